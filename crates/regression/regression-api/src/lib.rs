//! Regression Consumer API
//!
//! Configuration types for the similarity kernel and the support-vector
//! regressor, plus re-exports from SPI and core for convenience.

// Re-export from core
pub use regression_core::{
    metrics, Amplitude, Entanglement, FidelityKernel, KernelSvr, ZzFeatureMap,
};

// Re-export traits from SPI
pub use regression_spi::{Metrics, RegressionError, Regressor, Result, SimilarityKernel};

use serde::{Deserialize, Serialize};

/// Configuration for the ZZ feature map behind the fidelity kernel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureMapConfig {
    /// Number of Hadamard + phase repetitions
    pub reps: usize,
    /// Which coordinate pairs get a pairwise phase
    pub entanglement: Entanglement,
    /// Phase scale
    pub alpha: f64,
}

impl Default for FeatureMapConfig {
    fn default() -> Self {
        Self {
            reps: 1,
            entanglement: Entanglement::Full,
            alpha: 2.0,
        }
    }
}

impl FeatureMapConfig {
    /// Build a fidelity kernel for vectors of `feature_dimension` coordinates
    pub fn build(&self, feature_dimension: usize) -> Result<FidelityKernel> {
        let feature_map = ZzFeatureMap::new(feature_dimension, self.reps)?
            .with_entanglement(self.entanglement)
            .with_alpha(self.alpha)?;
        Ok(FidelityKernel::new(feature_map))
    }
}

/// Hyperparameters of the epsilon-SVR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvrConfig {
    /// Regularization parameter
    pub c: f64,
    /// Tube half-width
    pub epsilon: f64,
    /// Solver stopping tolerance
    pub tolerance: f64,
    /// Solver iteration cap
    pub max_iterations: usize,
}

impl Default for SvrConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            epsilon: 0.1,
            tolerance: 1e-3,
            max_iterations: 100_000,
        }
    }
}

impl SvrConfig {
    /// Build an unfitted regressor over `kernel`
    pub fn build<K: SimilarityKernel>(&self, kernel: K) -> Result<KernelSvr<K>> {
        KernelSvr::new(kernel, self.c, self.epsilon)?
            .with_tolerance(self.tolerance)?
            .with_max_iterations(self.max_iterations)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{FeatureMapConfig, SvrConfig};
    pub use regression_core::metrics::{evaluate, mae, rmse};
    pub use regression_core::{Entanglement, FidelityKernel, KernelSvr, ZzFeatureMap};
    pub use regression_spi::{Metrics, RegressionError, Regressor, Result, SimilarityKernel};
}
