//! Lag / month feature construction

use chrono::Datelike;
use pipeline_spi::{FeatureVector, LabeledSample, Observation};

/// Build one labeled sample per observation after the first
///
/// Each sample's `lag_1` is the preceding observation's value, `month` is the
/// sample's own calendar month and the target is its own value. Observations
/// must already be sorted by date.
pub fn build_features(observations: &[Observation]) -> Vec<LabeledSample> {
    observations
        .windows(2)
        .map(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            LabeledSample {
                date: current.date,
                features: FeatureVector::new(previous.value, current.date.month()),
                target: current.value,
            }
        })
        .collect()
}
