//! Pipeline error types
//!
//! Every stage reports through [`PipelineError`]. All variants are terminal
//! for a single run: there is no retry and no partial report.

use regression_spi::RegressionError;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while loading, transforming or modelling data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    // Data loading
    /// Input could not be opened or read
    #[error("Failed to read '{path}': {reason}")]
    DataUnreadable { path: String, reason: String },

    /// A required column is absent from the header
    #[error("Required column '{column}' not found")]
    MissingColumn { column: String },

    /// A data row could not be parsed
    #[error("Malformed row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// The input contains a header but no data rows
    #[error("Dataset contains no observations")]
    EmptyDataset,

    // Features
    /// A feature has zero range, so min-max scaling is undefined
    #[error("Feature '{feature}' is constant ({value}); cannot scale a zero-range column")]
    DegenerateFeature { feature: String, value: f64 },

    /// Insufficient rows for the operation
    #[error("Insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    // Split
    /// A partition is empty after splitting and truncation
    #[error("The {partition} partition is empty after splitting at {cutoff}")]
    EmptyPartition { partition: String, cutoff: String },

    // Configuration
    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    // Modelling
    /// Fit, predict or evaluation failure
    #[error(transparent)]
    Regression(#[from] RegressionError),
}
