//! Regression Facade
//!
//! Single entry point for kernel regression:
//! - `regression_spi` - Traits, errors and the metrics model
//! - `regression_api` - Configuration types
//! - `regression_core` - Fidelity kernel, SVR and metric implementations
//!
//! # Example
//!
//! ```rust
//! use regression_facade::prelude::*;
//!
//! let kernel = FeatureMapConfig::default().build(2).unwrap();
//! let mut model = SvrConfig::default().build(kernel).unwrap();
//! model.fit(&[vec![0.0, 0.5], vec![1.0, 0.5]], &[10.0, 20.0]).unwrap();
//! let predictions = model.predict(&[vec![0.5, 0.5]]).unwrap();
//! assert!(predictions[0].is_finite());
//! ```

// Re-export everything from API (which includes SPI and core)
pub use regression_api::*;

// Explicit re-exports for documentation
pub use regression_api::prelude;

// Re-export core modules for direct access
pub use regression_core::{kernel, metrics, svr};
