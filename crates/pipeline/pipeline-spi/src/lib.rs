//! Pipeline Service Provider Interface
//!
//! Defines the data model flowing through the air-quality pipeline and the
//! seams between its stages:
//!
//! - [`ObservationSource`]: Where dated concentration readings come from
//! - [`FeatureScaler`]: Fit-once mapping of feature vectors into [0, 1]
//! - [`PipelineError`]: Error taxonomy for every stage
//! - [`Observation`], [`FeatureVector`], [`LabeledSample`], [`ScaledSample`], [`Split`]

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Dated, FeatureScaler, ObservationSource};
pub use error::{PipelineError, Result};
pub use model::{
    columns, FeatureVector, LabeledSample, Observation, Partition, ScaledSample, Split,
};
