//! Regression error types
//!
//! Defines the standardized error type for kernel, regressor and metric operations.

use thiserror::Error;

/// Result type alias for regression operations
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Errors that can occur while fitting, predicting or evaluating
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Insufficient samples for the operation
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Feature vector does not have the expected number of coordinates
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Paired sequences have different lengths
    #[error("Length mismatch: {left} values vs {right} values")]
    LengthMismatch { left: usize, right: usize },

    /// An empty sequence was given where at least one value is required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Numerical computation error (non-finite targets or kernel values)
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
