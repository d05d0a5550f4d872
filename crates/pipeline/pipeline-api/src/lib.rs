//! Pipeline Consumer API
//!
//! Everything needed to run the air-quality kernel experiment end to end:
//!
//! - [`PipelineConfig`] / [`PipelineConfigBuilder`]: Run parameters
//! - [`Experiment`]: Load, build features, scale, split, fit, predict, evaluate
//! - [`ExperimentReport`]: Counts and metrics of one run

mod config;
mod experiment;
mod report;

// Re-export from core
pub use pipeline_core::{
    build_features, daily_series, split_by_date, CsvObservationSource,
    InMemoryObservationSource, MinMaxScaler, SyntheticSeries,
};

// Re-export from SPI
pub use pipeline_spi::{
    FeatureScaler, FeatureVector, LabeledSample, Observation, ObservationSource, PipelineError,
    Result, ScaledSample, Split,
};

// Re-export regression configuration
pub use regression_api::{FeatureMapConfig, Metrics, SvrConfig};

pub use config::{PipelineConfig, PipelineConfigBuilder, ScalerFit};
pub use experiment::Experiment;
pub use report::ExperimentReport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Experiment, ExperimentReport, PipelineConfig, PipelineConfigBuilder, ScalerFit};
    pub use crate::{FeatureMapConfig, Metrics, SvrConfig};
    pub use crate::{InMemoryObservationSource, CsvObservationSource, ObservationSource};
    pub use crate::{daily_series, SyntheticSeries};
    pub use crate::{PipelineError, Result};
}
