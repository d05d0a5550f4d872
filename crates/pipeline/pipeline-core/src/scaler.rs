//! Min-max feature scaling

use pipeline_spi::{
    FeatureScaler, FeatureVector, LabeledSample, PipelineError, Result, ScaledSample,
};
use serde::{Deserialize, Serialize};

/// Per-coordinate min-max scaler fitted once on a set of feature vectors
///
/// Inputs seen during fitting map into [0, 1], with the observed minimum at
/// exactly 0 and the observed maximum at exactly 1. Inputs outside the fitted
/// range map outside [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl MinMaxScaler {
    /// Fit on the given feature vectors
    ///
    /// Fails on empty input, or when a coordinate takes a single value.
    pub fn fit<'a, I>(features: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a FeatureVector>,
    {
        let mut min = vec![f64::INFINITY; FeatureVector::DIMENSION];
        let mut max = vec![f64::NEG_INFINITY; FeatureVector::DIMENSION];
        let mut rows = 0usize;

        for vector in features {
            for (k, value) in vector.to_array().into_iter().enumerate() {
                min[k] = min[k].min(value);
                max[k] = max[k].max(value);
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(PipelineError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        for (k, name) in FeatureVector::NAMES.iter().enumerate() {
            if max[k] == min[k] {
                return Err(PipelineError::DegenerateFeature {
                    feature: name.to_string(),
                    value: min[k],
                });
            }
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> &[f64] {
        &self.min
    }

    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Scale the features of a labeled sample, keeping date and target
    pub fn transform_sample(&self, sample: &LabeledSample) -> ScaledSample {
        ScaledSample::new(sample.date, self.transform(&sample.features), sample.target)
    }
}

impl FeatureScaler for MinMaxScaler {
    fn transform(&self, features: &FeatureVector) -> Vec<f64> {
        features
            .to_array()
            .iter()
            .zip(self.min.iter().zip(&self.max))
            .map(|(&x, (&lo, &hi))| (x - lo) / (hi - lo))
            .collect()
    }

    fn inverse_transform(&self, scaled: &[f64]) -> Result<Vec<f64>> {
        if scaled.len() != self.min.len() {
            return Err(PipelineError::InvalidParameter {
                name: "scaled".to_string(),
                reason: format!(
                    "expected {} coordinates, got {}",
                    self.min.len(),
                    scaled.len()
                ),
            });
        }
        Ok(scaled
            .iter()
            .zip(self.min.iter().zip(&self.max))
            .map(|(&x, (&lo, &hi))| x * (hi - lo) + lo)
            .collect())
    }

    fn name(&self) -> &str {
        "minmax"
    }
}
