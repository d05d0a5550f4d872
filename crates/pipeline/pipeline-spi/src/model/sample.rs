//! Labeled samples before and after scaling

use super::observation::FeatureVector;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Features of one observation together with its own value as target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub date: NaiveDate,
    pub features: FeatureVector,
    pub target: f64,
}

/// A sample whose features have been mapped by a fitted scaler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledSample {
    pub date: NaiveDate,
    pub features: Vec<f64>,
    pub target: f64,
}

impl ScaledSample {
    pub fn new(date: NaiveDate, features: Vec<f64>, target: f64) -> Self {
        Self {
            date,
            features,
            target,
        }
    }
}

/// Split samples into feature rows and targets, as regressors consume them
pub fn columns(samples: &[ScaledSample]) -> (Vec<Vec<f64>>, Vec<f64>) {
    samples
        .iter()
        .map(|s| (s.features.clone(), s.target))
        .unzip()
}
