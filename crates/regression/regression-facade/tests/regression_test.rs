//! Unit tests for kernel regression
//!
//! Public behaviour of the individual components.

use regression_facade::kernel::{Amplitude, ZzFeatureMap, MAX_FEATURE_DIMENSION};
use regression_facade::metrics::{evaluate, mae, mse, rmse};
use regression_facade::prelude::*;

// ============================================================================
// Feature Map Tests
// ============================================================================

#[test]
fn test_encoded_state_is_normalized() {
    let map = ZzFeatureMap::new(3, 2).unwrap();
    let state = map.encode(&[0.3, 0.6, 0.9]).unwrap();

    assert_eq!(state.len(), 8);
    let norm: f64 = state.iter().map(Amplitude::norm_sqr).sum();
    assert!((norm - 1.0).abs() < 1e-12);
}

#[test]
fn test_feature_map_limits() {
    assert!(ZzFeatureMap::new(0, 1).is_err());
    assert!(ZzFeatureMap::new(MAX_FEATURE_DIMENSION + 1, 1).is_err());
    assert!(ZzFeatureMap::new(MAX_FEATURE_DIMENSION, 1).is_ok());
}

#[test]
fn test_kernel_name() {
    let kernel = FidelityKernel::new(ZzFeatureMap::new(2, 1).unwrap());
    assert_eq!(kernel.name(), "fidelity");
}

// ============================================================================
// Regressor Tests
// ============================================================================

#[test]
fn test_predict_before_fit() {
    let kernel = FeatureMapConfig::default().build(2).unwrap();
    let model = SvrConfig::default().build(kernel).unwrap();

    assert!(!model.is_fitted());
    assert_eq!(
        model.predict(&[vec![0.5, 0.5]]).unwrap_err(),
        RegressionError::NotFitted
    );
}

#[test]
fn test_fit_rejects_empty_training() {
    let kernel = FeatureMapConfig::default().build(2).unwrap();
    let mut model = SvrConfig::default().build(kernel).unwrap();
    assert!(matches!(
        model.fit(&[], &[]),
        Err(RegressionError::InsufficientData { .. })
    ));
}

#[test]
fn test_fit_rejects_non_finite_targets() {
    let kernel = FeatureMapConfig::default().build(2).unwrap();
    let mut model = SvrConfig::default().build(kernel).unwrap();
    let result = model.fit(&[vec![0.1, 0.2], vec![0.3, 0.4]], &[1.0, f64::NAN]);
    assert!(matches!(result, Err(RegressionError::NumericalError(_))));
}

// ============================================================================
// Metrics Tests
// ============================================================================

#[test]
fn test_metrics_known_values() {
    let actual = [1.0, 2.0, 3.0, 4.0];
    let predicted = [2.0, 2.0, 1.0, 4.0];

    assert!((mae(&actual, &predicted).unwrap() - 0.75).abs() < 1e-12);
    assert!((mse(&actual, &predicted).unwrap() - 1.25).abs() < 1e-12);
    assert!((rmse(&actual, &predicted).unwrap() - 1.25f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_metrics_identical_sequences() {
    let values = [3.5, 7.25, 1.0];
    assert_eq!(evaluate(&values, &values).unwrap(), Metrics::new(0.0, 0.0));
}

#[test]
fn test_metrics_errors() {
    assert!(matches!(
        evaluate(&[], &[]),
        Err(RegressionError::EmptyInput(_))
    ));
    assert!(matches!(
        evaluate(&[1.0], &[1.0, 2.0]),
        Err(RegressionError::LengthMismatch { .. })
    ));
}
