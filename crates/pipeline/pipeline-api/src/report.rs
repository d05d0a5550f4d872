//! Experiment report

use crate::config::ScalerFit;
use chrono::NaiveDate;
use regression_api::Metrics;
use serde::{Deserialize, Serialize};
use std::fmt;

const DISCLAIMER: &str = "Note: These results are reported solely to verify the functional \
integration of a kernel model within the analytical pipeline. They are not intended for \
comparison with other models.";

/// Counts and error metrics of one experiment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Where the observations came from
    pub source: String,
    /// Observations loaded, before feature construction
    pub observations: usize,
    /// Rows before the cutoff, before truncation
    pub train_samples: usize,
    /// Rows on or after the cutoff
    pub test_samples: usize,
    /// Training rows the regressor was fitted on
    pub training_samples_used: usize,
    pub support_vectors: usize,
    pub cutoff: NaiveDate,
    pub scaler_fit: ScalerFit,
    pub metrics: Metrics,
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset loaded successfully.")?;
        writeln!(f, "Number of observations: {}", self.observations)?;
        writeln!(f, "Train samples: {}", self.train_samples)?;
        writeln!(f, "Test samples : {}", self.test_samples)?;
        writeln!(f, "Kernel training samples used: {}", self.training_samples_used)?;
        writeln!(f, "Fidelity kernel successfully initialised.")?;
        writeln!(f, "Kernel-based regression executed successfully.")?;
        writeln!(f)?;
        writeln!(f, "Methodological evaluation (kernel architecture):")?;
        writeln!(f, "{}", self.metrics)?;
        writeln!(f)?;
        write!(f, "{}", DISCLAIMER)
    }
}
