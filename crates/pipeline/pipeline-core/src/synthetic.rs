//! Seeded synthetic daily series
//!
//! Produces `intercept + slope * t + noise` with uniform noise, one value per
//! calendar day. The same configuration always yields the same series.

use chrono::NaiveDate;
use pipeline_spi::{Observation, PipelineError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape of a synthetic daily series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSeries {
    /// Date of the first observation
    pub start: NaiveDate,
    /// Number of consecutive days
    pub days: usize,
    /// Value at day zero
    pub intercept: f64,
    /// Change per day
    pub slope: f64,
    /// Half-width of the uniform noise
    pub noise: f64,
    pub seed: u64,
}

impl SyntheticSeries {
    pub fn new(start: NaiveDate, days: usize) -> Self {
        Self {
            start,
            days,
            intercept: 10.0,
            slope: 0.005,
            noise: 4.0,
            seed: 42,
        }
    }

    pub fn with_trend(mut self, intercept: f64, slope: f64) -> Self {
        self.intercept = intercept;
        self.slope = slope;
        self
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate the observations described by `series`
pub fn daily_series(series: &SyntheticSeries) -> Result<Vec<Observation>> {
    if !series.noise.is_finite() || series.noise < 0.0 {
        return Err(PipelineError::InvalidParameter {
            name: "noise".to_string(),
            reason: "must be finite and non-negative".to_string(),
        });
    }
    if !series.intercept.is_finite() || !series.slope.is_finite() {
        return Err(PipelineError::InvalidParameter {
            name: "trend".to_string(),
            reason: "intercept and slope must be finite".to_string(),
        });
    }

    let mut rng = StdRng::seed_from_u64(series.seed);
    let observations: Vec<Observation> = series
        .start
        .iter_days()
        .take(series.days)
        .enumerate()
        .map(|(t, date)| {
            let noise = rng.gen_range(-series.noise..=series.noise);
            Observation::new(date, series.intercept + series.slope * t as f64 + noise)
        })
        .collect();

    if observations.len() < series.days {
        return Err(PipelineError::InvalidParameter {
            name: "days".to_string(),
            reason: format!("{} days from {} overflow the calendar", series.days, series.start),
        });
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
    }

    #[test]
    fn test_consecutive_days() {
        let observations = daily_series(&SyntheticSeries::new(start(), 365)).unwrap();
        assert_eq!(observations.len(), 365);
        assert_eq!(observations[0].date, start());
        assert_eq!(observations[364].date, NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
    }

    #[test]
    fn test_same_seed_same_series() {
        let series = SyntheticSeries::new(start(), 50).with_seed(7);
        assert_eq!(daily_series(&series).unwrap(), daily_series(&series).unwrap());

        let other = series.clone().with_seed(8);
        assert_ne!(daily_series(&series).unwrap(), daily_series(&other).unwrap());
    }

    #[test]
    fn test_noise_bounds() {
        let series = SyntheticSeries::new(start(), 200).with_trend(20.0, 0.0).with_noise(2.5);
        for observation in daily_series(&series).unwrap() {
            assert!((observation.value - 20.0).abs() <= 2.5);
        }
    }

    #[test]
    fn test_noiseless_trend() {
        let series = SyntheticSeries::new(start(), 10).with_trend(1.0, 0.5).with_noise(0.0);
        let observations = daily_series(&series).unwrap();
        assert!((observations[9].value - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_negative_noise_rejected() {
        let series = SyntheticSeries::new(start(), 10).with_noise(-1.0);
        assert!(matches!(
            daily_series(&series),
            Err(PipelineError::InvalidParameter { ref name, .. }) if name == "noise"
        ));
    }
}
