//! Regression Service Provider Interface
//!
//! Defines the abstractions shared by every kernel regression implementation:
//!
//! - [`SimilarityKernel`]: Symmetric pairwise similarity used as an SVR kernel
//! - [`Regressor`]: Fit-once / predict-many contract over feature vectors
//! - [`RegressionError`]: Standardized error type for all regression operations
//! - [`Metrics`]: Error summary produced by the evaluator

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Regressor, SimilarityKernel};
pub use error::{RegressionError, Result};
pub use model::Metrics;
