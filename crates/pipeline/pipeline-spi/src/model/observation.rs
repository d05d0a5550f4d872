//! Observation and feature vector models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated concentration reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    /// Concentration value (e.g. PM2.5 in µg/m³)
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Low-dimensional features derived from one observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Concentration of the previous observation
    pub lag_1: f64,
    /// Calendar month of the observation, 1 to 12
    pub month: u32,
}

impl FeatureVector {
    /// Column names, in the order of [`FeatureVector::to_array`]
    pub const NAMES: [&'static str; 2] = ["lag_1", "month"];

    /// Number of numeric coordinates
    pub const DIMENSION: usize = 2;

    pub fn new(lag_1: f64, month: u32) -> Self {
        Self { lag_1, month }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.lag_1, f64::from(self.month)]
    }
}
