//! Epsilon-support-vector regression over a black-box kernel
//!
//! The kernel is only ever called pairwise, so any [`SimilarityKernel`] can be
//! plugged in, including ones with no closed algebraic form.
//!
//! ## When to Use
//!
//! - Very small training sets (the full Gram matrix is computed up front)
//! - Kernels supplied as functions rather than as linear / polynomial / RBF

mod solver;

use regression_spi::{RegressionError, Regressor, Result, SimilarityKernel};
use tracing::{debug, warn};

/// Epsilon-SVR model
///
/// Predicts `f(x) = sum_i beta_i * k(x_i, x) + b` over the support vectors
/// `x_i` found during fitting.
///
/// # Example
///
/// ```rust
/// use regression_core::{FidelityKernel, KernelSvr, Regressor, ZzFeatureMap};
///
/// let kernel = FidelityKernel::new(ZzFeatureMap::new(2, 1).unwrap());
/// let mut model = KernelSvr::new(kernel, 1.0, 0.1).unwrap();
/// assert!(model.predict(&[vec![0.5, 0.5]]).is_err());
///
/// model.fit(&[vec![0.0, 0.0], vec![1.0, 1.0]], &[1.0, 2.0]).unwrap();
/// assert!(model.is_fitted());
/// ```
#[derive(Debug, Clone)]
pub struct KernelSvr<K> {
    kernel: K,
    /// Box constraint on the dual variables
    c: f64,
    /// Half-width of the insensitive tube
    epsilon: f64,
    /// KKT violation tolerance used as the stopping criterion
    tolerance: f64,
    max_iterations: usize,
    support_vectors: Vec<Vec<f64>>,
    dual_coefficients: Vec<f64>,
    intercept: f64,
    dimension: usize,
    iterations: usize,
    fitted: bool,
}

impl<K: SimilarityKernel> KernelSvr<K> {
    /// Create a new model
    ///
    /// # Arguments
    ///
    /// * `kernel` - Pairwise similarity function
    /// * `c` - Regularization parameter (> 0)
    /// * `epsilon` - Tube half-width (>= 0)
    pub fn new(kernel: K, c: f64, epsilon: f64) -> Result<Self> {
        if !c.is_finite() || c <= 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "c".to_string(),
                reason: "must be positive and finite".to_string(),
            });
        }
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "epsilon".to_string(),
                reason: "must be non-negative and finite".to_string(),
            });
        }

        Ok(Self {
            kernel,
            c,
            epsilon,
            tolerance: 1e-3,
            max_iterations: 100_000,
            support_vectors: Vec::new(),
            dual_coefficients: Vec::new(),
            intercept: 0.0,
            dimension: 0,
            iterations: 0,
            fitted: false,
        })
    }

    /// Set the stopping tolerance (default 1e-3)
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "tolerance".to_string(),
                reason: "must be positive and finite".to_string(),
            });
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Set the iteration cap (default 100 000)
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(RegressionError::InvalidParameter {
                name: "max_iterations".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        self.max_iterations = max_iterations;
        Ok(self)
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn support_vectors(&self) -> &[Vec<f64>] {
        &self.support_vectors
    }

    pub fn support_vector_count(&self) -> usize {
        self.support_vectors.len()
    }

    /// Weight of each support vector in the kernel expansion
    pub fn dual_coefficients(&self) -> &[f64] {
        &self.dual_coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Solver iterations used by the last fit
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn check_dimension(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.dimension {
            return Err(RegressionError::DimensionMismatch {
                expected: self.dimension,
                actual: x.len(),
            });
        }
        Ok(())
    }
}

impl<K: SimilarityKernel> Regressor for KernelSvr<K> {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        self.fitted = false;
        self.support_vectors.clear();
        self.dual_coefficients.clear();

        if y.is_empty() {
            return Err(RegressionError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }

        self.dimension = x[0].len();
        for row in x {
            self.check_dimension(row)?;
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(RegressionError::NumericalError(
                "training targets contain non-finite values".to_string(),
            ));
        }

        let gram = self.kernel.gram_matrix(x)?;
        if gram.iter().flatten().any(|v| !v.is_finite()) {
            return Err(RegressionError::NumericalError(format!(
                "{} kernel produced non-finite Gram entries",
                self.kernel.name()
            )));
        }

        let solution = solver::solve_epsilon_svr(
            &gram,
            y,
            self.c,
            self.epsilon,
            self.tolerance,
            self.max_iterations,
        );
        if !solution.converged {
            warn!(
                iterations = solution.iterations,
                "SVR solver reached the iteration cap before converging"
            );
        }

        for (row, &beta) in x.iter().zip(&solution.coefficients) {
            if beta != 0.0 {
                self.support_vectors.push(row.clone());
                self.dual_coefficients.push(beta);
            }
        }
        self.intercept = -solution.rho;
        self.iterations = solution.iterations;
        self.fitted = true;

        debug!(
            samples = y.len(),
            support_vectors = self.support_vectors.len(),
            iterations = self.iterations,
            intercept = self.intercept,
            "fitted epsilon-SVR"
        );
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }
        for row in x {
            self.check_dimension(row)?;
        }

        if self.support_vectors.is_empty() {
            return Ok(vec![self.intercept; x.len()]);
        }

        let similarities = self.kernel.cross_matrix(x, &self.support_vectors)?;
        Ok(similarities
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.dual_coefficients)
                    .map(|(k, beta)| k * beta)
                    .sum::<f64>()
                    + self.intercept
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
