//! Feature scaler trait

use crate::error::Result;
use crate::model::FeatureVector;

/// Fitted mapping from feature vectors into numeric model inputs
pub trait FeatureScaler {
    /// Map a feature vector into scaled coordinates
    fn transform(&self, features: &FeatureVector) -> Vec<f64>;

    /// Map scaled coordinates back into feature units
    fn inverse_transform(&self, scaled: &[f64]) -> Result<Vec<f64>>;

    /// Name of this scaler
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    /// Mock implementation: fixed divisor per coordinate
    struct DivideBy(f64, f64);

    impl FeatureScaler for DivideBy {
        fn transform(&self, features: &FeatureVector) -> Vec<f64> {
            let [lag, month] = features.to_array();
            vec![lag / self.0, month / self.1]
        }

        fn inverse_transform(&self, scaled: &[f64]) -> Result<Vec<f64>> {
            if scaled.len() != 2 {
                return Err(PipelineError::InvalidParameter {
                    name: "scaled".to_string(),
                    reason: "expected 2 coordinates".to_string(),
                });
            }
            Ok(vec![scaled[0] * self.0, scaled[1] * self.1])
        }

        fn name(&self) -> &str {
            "divide"
        }
    }

    #[test]
    fn test_round_trip() {
        let scaler = DivideBy(100.0, 12.0);
        let scaled = scaler.transform(&FeatureVector::new(50.0, 6));
        assert_eq!(scaled, vec![0.5, 0.5]);
        assert_eq!(scaler.inverse_transform(&scaled).unwrap(), vec![50.0, 6.0]);
    }

    #[test]
    fn test_trait_object() {
        let scaler: Box<dyn FeatureScaler> = Box::new(DivideBy(1.0, 1.0));
        assert_eq!(scaler.name(), "divide");
        assert!(scaler.inverse_transform(&[1.0]).is_err());
    }
}
