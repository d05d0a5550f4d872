//! Integration tests for kernel regression
//!
//! Fidelity kernel, SVR and metrics working together through the facade.

use regression_facade::prelude::*;

/// Points on a coarse grid of the unit square
fn grid(n: usize) -> Vec<Vec<f64>> {
    let step = 1.0 / (n - 1) as f64;
    (0..n)
        .flat_map(|i| (0..n).map(move |j| vec![i as f64 * step, j as f64 * step]))
        .collect()
}

#[test]
fn integration_gram_matrix_shape() {
    let kernel = FeatureMapConfig::default().build(2).unwrap();
    let xs = grid(4);

    let gram = kernel.gram_matrix(&xs).unwrap();
    assert_eq!(gram.len(), xs.len());

    for i in 0..xs.len() {
        assert!((gram[i][i] - 1.0).abs() < 1e-9);
        for j in 0..xs.len() {
            assert_eq!(gram[i][j], gram[j][i]);
            assert!((0.0..=1.0).contains(&gram[i][j]));
        }
    }
}

#[test]
fn integration_cross_matrix_matches_evaluate() {
    let kernel = FeatureMapConfig::default().build(2).unwrap();
    let rows = grid(3);
    let columns = vec![vec![0.25, 0.75], vec![0.9, 0.1]];

    let cross = kernel.cross_matrix(&rows, &columns).unwrap();
    for (i, row) in rows.iter().enumerate() {
        for (j, column) in columns.iter().enumerate() {
            let direct = kernel.evaluate(row, column).unwrap();
            assert!((cross[i][j] - direct).abs() < 1e-12);
        }
    }
}

#[test]
fn integration_linear_entanglement_differs_from_full() {
    let full = FeatureMapConfig::default().build(3).unwrap();
    let linear = FeatureMapConfig {
        entanglement: Entanglement::Linear,
        ..FeatureMapConfig::default()
    }
    .build(3)
    .unwrap();

    let a = [0.1, 0.7, 0.4];
    let b = [0.8, 0.2, 0.5];
    let full_value = full.evaluate(&a, &b).unwrap();
    let linear_value = linear.evaluate(&a, &b).unwrap();

    assert!((0.0..=1.0).contains(&full_value));
    assert!((0.0..=1.0).contains(&linear_value));
    assert!((full_value - linear_value).abs() > 1e-9);
}

#[test]
fn integration_svr_with_fidelity_kernel() {
    let xs = grid(6);
    let ys: Vec<f64> = xs.iter().map(|x| 20.0 + 8.0 * x[0] - 3.0 * x[1]).collect();

    let kernel = FeatureMapConfig::default().build(2).unwrap();
    let mut model = SvrConfig::default().build(kernel).unwrap();
    model.fit(&xs, &ys).unwrap();

    assert!(model.is_fitted());
    assert!(model.support_vector_count() <= xs.len());
    assert!(model.dual_coefficients().iter().all(|b| b.abs() <= 1.0 + 1e-9));

    // |f(x) - b| <= sum |beta| since every similarity lies in [0, 1]
    let bound: f64 = model.dual_coefficients().iter().map(|b| b.abs()).sum();
    let predictions = model.predict(&grid(5)).unwrap();
    for p in &predictions {
        assert!((p - model.intercept()).abs() <= bound + 1e-9);
    }

    let metrics = evaluate(&ys, &model.predict(&xs).unwrap()).unwrap();
    assert!(metrics.is_well_formed());
    assert!(metrics.rmse >= metrics.mae - 1e-12);
}

#[test]
fn integration_higher_c_fits_training_data_better() {
    let xs = grid(5);
    let ys: Vec<f64> = xs.iter().map(|x| 10.0 * x[0] + 5.0 * x[1]).collect();

    let fit_error = |c: f64| {
        let kernel = FeatureMapConfig::default().build(2).unwrap();
        let config = SvrConfig {
            c,
            tolerance: 1e-6,
            ..SvrConfig::default()
        };
        let mut model = config.build(kernel).unwrap();
        model.fit(&xs, &ys).unwrap();
        mae(&ys, &model.predict(&xs).unwrap()).unwrap()
    };

    assert!(fit_error(100.0) < fit_error(0.01));
}

#[test]
fn integration_dimension_checked_end_to_end() {
    let kernel = FeatureMapConfig::default().build(2).unwrap();
    let mut model = SvrConfig::default().build(kernel).unwrap();

    let result = model.fit(&[vec![0.1, 0.2, 0.3]], &[1.0]);
    assert!(matches!(result, Err(RegressionError::DimensionMismatch { .. })));
}
