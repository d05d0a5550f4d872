//! Evaluation metrics model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error summary of predictions against held-out truth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
}

impl Metrics {
    pub fn new(mae: f64, rmse: f64) -> Self {
        Self { mae, rmse }
    }

    /// Both metrics are finite and non-negative
    pub fn is_well_formed(&self) -> bool {
        self.mae.is_finite() && self.rmse.is_finite() && self.mae >= 0.0 && self.rmse >= 0.0
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MAE : {:.3}", self.mae)?;
        write!(f, "RMSE: {:.3}", self.rmse)
    }
}
