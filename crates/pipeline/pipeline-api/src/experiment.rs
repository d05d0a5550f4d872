//! End-to-end experiment orchestration
//!
//! Stages run strictly in order: load, build features, scale, split, fit,
//! predict, evaluate. The first failing stage aborts the run.

use crate::config::{PipelineConfig, ScalerFit};
use crate::report::ExperimentReport;
use pipeline_core::{build_features, split_by_date, CsvObservationSource, MinMaxScaler};
use pipeline_spi::{columns, FeatureVector, LabeledSample, ObservationSource, Result, Split};
use regression_api::{metrics, Regressor};
use tracing::{debug, info};

/// One configured run of the kernel regression pipeline
#[derive(Debug, Clone)]
pub struct Experiment {
    config: PipelineConfig,
}

impl Experiment {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run against the CSV file named in the configuration
    pub fn run(&self) -> Result<ExperimentReport> {
        let source = CsvObservationSource::new(&self.config.input)
            .with_columns(&self.config.date_column, &self.config.value_column);
        self.run_with_source(&source)
    }

    /// Run against any observation source
    pub fn run_with_source(&self, source: &dyn ObservationSource) -> Result<ExperimentReport> {
        let config = &self.config;
        config.validate()?;

        info!(source = %source.describe(), "Loading observations");
        let observations = source.load()?;
        info!(observations = observations.len(), "Dataset loaded");

        let samples = build_features(&observations);
        debug!(samples = samples.len(), "Built lag/month features");

        let (split, scaler) = self.split_and_fit_scaler(samples)?;
        info!(
            train_samples = split.train_candidates,
            test_samples = split.eval.len(),
            training_samples_used = split.train.len(),
            cutoff = %split.cutoff,
            "Split by date"
        );
        debug!(min = ?scaler.min(), max = ?scaler.max(), scope = ?config.scaler_fit, "Fitted scaler");

        let split = split.try_map(|sample| Ok(scaler.transform_sample(&sample)))?;
        let (train_x, train_y) = columns(&split.train);
        let (eval_x, eval_y) = columns(&split.eval);

        let kernel = config.feature_map.build(FeatureVector::DIMENSION)?;
        info!(
            reps = config.feature_map.reps,
            entanglement = ?config.feature_map.entanglement,
            "Fidelity kernel initialised"
        );

        let mut model = config.svr.build(kernel)?;
        model.fit(&train_x, &train_y)?;
        let predictions = model.predict(&eval_x)?;
        info!(
            support_vectors = model.support_vector_count(),
            iterations = model.iterations(),
            "Kernel regression executed"
        );

        let metrics = metrics::evaluate(&eval_y, &predictions)?;
        info!(mae = metrics.mae, rmse = metrics.rmse, "Evaluation complete");

        Ok(ExperimentReport {
            source: source.describe(),
            observations: observations.len(),
            train_samples: split.train_candidates,
            test_samples: split.eval.len(),
            training_samples_used: split.train.len(),
            support_vectors: model.support_vector_count(),
            cutoff: split.cutoff,
            scaler_fit: config.scaler_fit,
            metrics,
        })
    }

    /// Split the samples and fit the scaler on the configured rows
    fn split_and_fit_scaler(
        &self,
        samples: Vec<LabeledSample>,
    ) -> Result<(Split<LabeledSample>, MinMaxScaler)> {
        let config = &self.config;
        match config.scaler_fit {
            ScalerFit::AllRows => {
                let scaler = MinMaxScaler::fit(samples.iter().map(|s| &s.features))?;
                let split = split_by_date(samples, config.cutoff, config.max_train_samples);
                split.ensure_usable()?;
                Ok((split, scaler))
            }
            ScalerFit::TrainingRows => {
                let split = split_by_date(samples, config.cutoff, config.max_train_samples);
                split.ensure_usable()?;
                let scaler = MinMaxScaler::fit(split.train.iter().map(|s| &s.features))?;
                Ok((split, scaler))
            }
        }
    }
}
