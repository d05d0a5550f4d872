//! Pipeline Core Implementations
//!
//! The data-preparation stages of the air-quality pipeline:
//!
//! - [`loader`]: CSV and in-memory observation sources
//! - [`features`]: Lag / month feature construction
//! - [`scaler`]: Min-max scaling into [0, 1]
//! - [`splitter`]: Calendar cutoff split with training truncation
//! - [`synthetic`]: Seeded synthetic daily series
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pipeline_core::prelude::*;
//!
//! let series = SyntheticSeries::new(NaiveDate::from_ymd_opt(2022, 11, 1).unwrap(), 120);
//! let observations = daily_series(&series).unwrap();
//! let samples = build_features(&observations);
//!
//! let scaler = MinMaxScaler::fit(samples.iter().map(|s| &s.features)).unwrap();
//! let cutoff = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let split = split_by_date(samples, cutoff, 50);
//!
//! assert_eq!(split.train.len(), 50);
//! assert!(scaler.transform(&split.eval[0].features).len() == 2);
//! ```

pub mod features;
pub mod loader;
pub mod scaler;
pub mod splitter;
pub mod synthetic;

// Re-export from SPI
pub use pipeline_spi::{
    Dated, FeatureScaler, FeatureVector, LabeledSample, Observation, ObservationSource,
    PipelineError, Result, ScaledSample, Split,
};

// Re-export implementations for convenience
pub use features::build_features;
pub use loader::{CsvObservationSource, InMemoryObservationSource};
pub use scaler::MinMaxScaler;
pub use splitter::split_by_date;
pub use synthetic::{daily_series, SyntheticSeries};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::features::build_features;
    pub use crate::loader::{CsvObservationSource, InMemoryObservationSource};
    pub use crate::scaler::MinMaxScaler;
    pub use crate::splitter::split_by_date;
    pub use crate::synthetic::{daily_series, SyntheticSeries};
    pub use pipeline_spi::{
        FeatureScaler, FeatureVector, LabeledSample, Observation, ObservationSource,
        PipelineError, Result, ScaledSample, Split,
    };
}
