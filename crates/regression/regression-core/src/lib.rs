//! Regression Core Implementations
//!
//! Kernel regression building blocks, organized by concern:
//!
//! - [`kernel`]: ZZ feature map encoding and the fidelity similarity kernel
//! - [`svr`]: Epsilon-support-vector regression over a black-box kernel
//! - [`metrics`]: MAE / RMSE evaluation
//!
//! ## Example
//!
//! ```rust
//! use regression_core::prelude::*;
//!
//! let kernel = FidelityKernel::new(ZzFeatureMap::new(2, 1).unwrap());
//! let mut model = KernelSvr::new(kernel, 1.0, 0.1).unwrap();
//!
//! let x = vec![vec![0.1, 0.0], vec![0.4, 0.5], vec![0.9, 1.0]];
//! let y = vec![10.0, 14.0, 21.0];
//! model.fit(&x, &y).unwrap();
//!
//! let predictions = model.predict(&[vec![0.5, 0.5]]).unwrap();
//! assert_eq!(predictions.len(), 1);
//! ```

pub mod kernel;
pub mod metrics;
pub mod svr;

// Re-export from SPI
pub use regression_spi::{Metrics, RegressionError, Regressor, Result, SimilarityKernel};

// Re-export implementations for convenience
pub use kernel::{Amplitude, Entanglement, FidelityKernel, ZzFeatureMap};
pub use svr::KernelSvr;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::kernel::{Entanglement, FidelityKernel, ZzFeatureMap};
    pub use crate::metrics::{evaluate, mae, rmse};
    pub use crate::svr::KernelSvr;
    pub use regression_spi::{Metrics, RegressionError, Regressor, Result, SimilarityKernel};
}
