//! Pipeline error types

mod pipeline_error;

pub use pipeline_error::{PipelineError, Result};
