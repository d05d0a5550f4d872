//! Error types for regression operations
//!
//! This module provides the [`RegressionError`] enum and [`Result`] type alias
//! shared by kernels, regressors and the evaluator.

mod regression_error;

pub use regression_error::{RegressionError, Result};
