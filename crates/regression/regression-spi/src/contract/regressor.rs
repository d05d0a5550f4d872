//! Regressor trait for fit-once / predict-many models
//!
//! Defines the core interface that every regression model over feature
//! vectors must implement.

use crate::error::Result;

/// Common trait for regression models over fixed-length feature vectors
///
/// A regressor has exactly two states, unfit and fit. Calling
/// [`Regressor::predict`] in the unfit state must return
/// [`RegressionError::NotFitted`](crate::RegressionError::NotFitted).
///
/// # Example
///
/// ```rust,ignore
/// use regression_spi::Regressor;
///
/// fn fit_predict<R: Regressor>(
///     model: &mut R,
///     x_train: &[Vec<f64>],
///     y_train: &[f64],
///     x_test: &[Vec<f64>],
/// ) -> regression_spi::Result<Vec<f64>> {
///     model.fit(x_train, y_train)?;
///     model.predict(x_test)
/// }
/// ```
pub trait Regressor {
    /// Fit the model to training vectors and their targets
    ///
    /// # Arguments
    ///
    /// * `x` - Training feature vectors, all of the same length
    /// * `y` - One target per training vector
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()>;

    /// Predict one value per input vector
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
