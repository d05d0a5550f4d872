//! Prediction error metrics
//!
//! Unlike silent `NaN` returns, every metric rejects empty or mismatched
//! inputs so an unusable evaluation partition is reported, not averaged.

use regression_spi::{Metrics, RegressionError, Result};

fn check_pair(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(RegressionError::LengthMismatch {
            left: actual.len(),
            right: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(RegressionError::EmptyInput(
            "cannot evaluate an empty prediction set".to_string(),
        ));
    }
    Ok(())
}

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences between predictions and actual values.
/// Same scale as the data.
///
/// # Example
///
/// ```rust
/// use regression_core::metrics::mae;
///
/// let actual = vec![1.0, 2.0, 3.0];
/// let predicted = vec![1.5, 2.0, 2.0];
/// assert!((mae(&actual, &predicted).unwrap() - 0.5).abs() < 1e-12);
/// ```
pub fn mae(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_pair(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Mean Squared Error (MSE)
pub fn mse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_pair(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Root Mean Squared Error (RMSE)
///
/// Square root of MSE. Same scale as the data.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mse(actual, predicted).map(f64::sqrt)
}

/// MAE and RMSE of `predicted` against `actual`
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<Metrics> {
    Ok(Metrics::new(mae(actual, predicted)?, rmse(actual, predicted)?))
}
