//! Experiment configuration types.

use chrono::NaiveDate;
use pipeline_core::loader::{DEFAULT_DATE_COLUMN, DEFAULT_VALUE_COLUMN};
use pipeline_spi::{PipelineError, Result};
use regression_api::{FeatureMapConfig, SvrConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "data/PM25_EscuelasAguirre_Daily_2021_2023_clean.csv";

/// Default number of leading training rows kept for fitting
pub const DEFAULT_MAX_TRAIN_SAMPLES: usize = 50;

/// Which rows the min-max scaler is fitted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerFit {
    /// Every labeled row, training and evaluation alike. Evaluation rows
    /// influence the scaling bounds.
    #[default]
    AllRows,
    /// Only the truncated training rows
    TrainingRows,
}

/// Parameters of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// CSV file with the daily series
    pub input: PathBuf,
    /// Header of the date column
    pub date_column: String,
    /// Header of the concentration column
    pub value_column: String,
    /// First date of the evaluation partition
    pub cutoff: NaiveDate,
    /// Training rows kept after the split
    pub max_train_samples: usize,
    pub scaler_fit: ScalerFit,
    pub feature_map: FeatureMapConfig,
    pub svr: SvrConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            cutoff: default_cutoff(),
            max_train_samples: DEFAULT_MAX_TRAIN_SAMPLES,
            scaler_fit: ScalerFit::default(),
            feature_map: FeatureMapConfig::default(),
            svr: SvrConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration reading `input` with every other value at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Check the values the pipeline stages do not check themselves.
    pub fn validate(&self) -> Result<()> {
        if self.max_train_samples == 0 {
            return Err(invalid("max_train_samples", "must be at least 1"));
        }
        if self.date_column.trim().is_empty() {
            return Err(invalid("date_column", "must not be empty"));
        }
        if self.value_column.trim().is_empty() {
            return Err(invalid("value_column", "must not be empty"));
        }
        if self.date_column == self.value_column {
            return Err(invalid(
                "value_column",
                "must differ from the date column",
            ));
        }
        Ok(())
    }
}

/// Builder for PipelineConfig.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    base: PipelineConfig,
    input: Option<PathBuf>,
    date_column: Option<String>,
    value_column: Option<String>,
    cutoff: Option<NaiveDate>,
    max_train_samples: Option<usize>,
    scaler_fit: Option<ScalerFit>,
    feature_map: Option<FeatureMapConfig>,
    svr: Option<SvrConfig>,
}

impl PipelineConfigBuilder {
    /// Create a new builder over the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one read from a file.
    pub fn from_config(base: PipelineConfig) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Set the input file.
    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the date column header.
    pub fn date_column(mut self, column: &str) -> Self {
        self.date_column = Some(column.to_string());
        self
    }

    /// Set the value column header.
    pub fn value_column(mut self, column: &str) -> Self {
        self.value_column = Some(column.to_string());
        self
    }

    /// Set the split cutoff.
    pub fn cutoff(mut self, cutoff: NaiveDate) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Set the training truncation.
    pub fn max_train_samples(mut self, max_train_samples: usize) -> Self {
        self.max_train_samples = Some(max_train_samples);
        self
    }

    /// Set the scaler fit scope.
    pub fn scaler_fit(mut self, scaler_fit: ScalerFit) -> Self {
        self.scaler_fit = Some(scaler_fit);
        self
    }

    /// Set the feature map parameters.
    pub fn feature_map(mut self, feature_map: FeatureMapConfig) -> Self {
        self.feature_map = Some(feature_map);
        self
    }

    /// Set the regressor hyperparameters.
    pub fn svr(mut self, svr: SvrConfig) -> Self {
        self.svr = Some(svr);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<PipelineConfig> {
        let base = self.base;
        let config = PipelineConfig {
            input: self.input.unwrap_or(base.input),
            date_column: self.date_column.unwrap_or(base.date_column),
            value_column: self.value_column.unwrap_or(base.value_column),
            cutoff: self.cutoff.unwrap_or(base.cutoff),
            max_train_samples: self.max_train_samples.unwrap_or(base.max_train_samples),
            scaler_fit: self.scaler_fit.unwrap_or(base.scaler_fit),
            feature_map: self.feature_map.unwrap_or(base.feature_map),
            svr: self.svr.unwrap_or(base.svr),
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn invalid(name: &str, reason: &str) -> PipelineError {
    PipelineError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
