//! Pipeline Facade
//!
//! High-level API for the air-quality kernel regression experiment.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pipeline_facade::prelude::*;
//!
//! let config = PipelineConfigBuilder::new()
//!     .input("data/PM25_EscuelasAguirre_Daily_2021_2023_clean.csv")
//!     .build()
//!     .unwrap();
//!
//! let report = Experiment::new(config).run().unwrap();
//! println!("{}", report);
//! ```

// Re-export everything from pipeline-api
pub use pipeline_api::*;

// Re-export prelude for convenience
pub use pipeline_api::prelude;

// Individual stages for callers that assemble their own run
pub use pipeline_core::{features, loader, scaler, splitter, synthetic};
