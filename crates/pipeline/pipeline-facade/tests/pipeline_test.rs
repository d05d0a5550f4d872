//! Unit tests for the air-quality kernel pipeline
//!
//! Stage-level behaviour reached through the facade's stage modules.

use chrono::NaiveDate;
use pipeline_facade::features::build_features;
use pipeline_facade::scaler::MinMaxScaler;
use pipeline_facade::splitter::split_by_date;
use pipeline_facade::{FeatureScaler, FeatureVector, Observation, PipelineError};

fn observations(values: &[f64]) -> Vec<Observation> {
    NaiveDate::from_ymd_opt(2022, 12, 29)
        .unwrap()
        .iter_days()
        .zip(values)
        .map(|(date, &value)| Observation::new(date, value))
        .collect()
}

// ============================================================================
// Feature Builder Tests
// ============================================================================

#[test]
fn test_features_drop_first_row() {
    let samples = build_features(&observations(&[5.0, 6.0, 7.0]));
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].features, FeatureVector::new(5.0, 12));
    assert_eq!(samples[1].features, FeatureVector::new(6.0, 12));
}

#[test]
fn test_features_cross_year_boundary() {
    let samples = build_features(&observations(&[5.0, 6.0, 7.0, 8.0]));
    assert_eq!(samples[2].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    assert_eq!(samples[2].features.month, 1);
    assert_eq!(samples[2].target, 8.0);
}

// ============================================================================
// Scaler Tests
// ============================================================================

#[test]
fn test_scaler_unit_interval() {
    let samples = build_features(&observations(&[5.0, 9.0, 7.0, 8.0, 4.0]));
    let scaler = MinMaxScaler::fit(samples.iter().map(|s| &s.features)).unwrap();

    for sample in &samples {
        let scaled = scaler.transform(&sample.features);
        assert!(scaled.iter().all(|x| (0.0..=1.0).contains(x)));
    }
    assert_eq!(scaler.min(), &[5.0, 1.0]);
    assert_eq!(scaler.max(), &[9.0, 12.0]);
}

#[test]
fn test_scaler_degenerate_month() {
    let samples = build_features(&observations(&[5.0, 9.0, 7.0]));
    let result = MinMaxScaler::fit(samples.iter().map(|s| &s.features));
    assert!(matches!(
        result,
        Err(PipelineError::DegenerateFeature { ref feature, .. }) if feature == "month"
    ));
}

// ============================================================================
// Splitter Tests
// ============================================================================

#[test]
fn test_split_on_new_year() {
    let samples = build_features(&observations(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    let split = split_by_date(samples, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 1);

    assert_eq!(split.train_candidates, 2);
    assert_eq!(split.train.len(), 1);
    assert_eq!(split.train[0].target, 2.0);
    assert_eq!(split.eval.len(), 2);
    assert!(split.ensure_usable().is_ok());
}
