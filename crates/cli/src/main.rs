//! # airq-kernel
//!
//! Command-line runner for the air-quality kernel regression experiment.
//! Prints the run report to stdout; diagnostics go to stderr and are
//! filtered with `RUST_LOG`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use pipeline_facade::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str =
    "airq_kernel=info,pipeline_api=info,pipeline_core=info,regression_core=warn";

#[derive(Parser, Debug)]
#[command(name = "airq-kernel")]
#[command(version, about = "Fidelity-kernel SVR over a daily PM2.5 series", long_about = None)]
struct Cli {
    /// Input CSV with a header row
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Name of the date column
    #[arg(long)]
    date_column: Option<String>,

    /// Name of the concentration column
    #[arg(long)]
    value_column: Option<String>,

    /// First date of the evaluation partition (YYYY-MM-DD)
    #[arg(long)]
    cutoff: Option<NaiveDate>,

    /// Leading training rows used to fit the regressor
    #[arg(short = 'n', long)]
    max_train_samples: Option<usize>,

    /// Fit the scaler on the training rows only
    #[arg(long)]
    scale_on_training_only: bool,

    /// JSON file with a full or partial pipeline configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the report as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run on a seeded synthetic series of this many days instead of the input file
    #[arg(long, value_name = "DAYS")]
    synthetic: Option<usize>,

    /// First day of the synthetic series
    #[arg(long, default_value = "2021-01-01", requires = "synthetic")]
    synthetic_start: NaiveDate,

    /// Seed of the synthetic series
    #[arg(long, default_value = "42", requires = "synthetic")]
    seed: u64,
}

/// Read a configuration file; missing fields keep their defaults
fn load_config_file(path: &Path) -> Result<PipelineConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Layer defaults, the optional config file and command-line flags
fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let base = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => PipelineConfig::default(),
    };

    let mut builder = PipelineConfigBuilder::from_config(base);
    if let Some(input) = &cli.input {
        builder = builder.input(input);
    }
    if let Some(column) = &cli.date_column {
        builder = builder.date_column(column);
    }
    if let Some(column) = &cli.value_column {
        builder = builder.value_column(column);
    }
    if let Some(cutoff) = cli.cutoff {
        builder = builder.cutoff(cutoff);
    }
    if let Some(max_train_samples) = cli.max_train_samples {
        builder = builder.max_train_samples(max_train_samples);
    }
    if cli.scale_on_training_only {
        builder = builder.scaler_fit(ScalerFit::TrainingRows);
    }

    Ok(builder.build()?)
}

fn write_report(report: &ExperimentReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!(path = %path.display(), "Report written");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let experiment = Experiment::new(config);

    let report = match cli.synthetic {
        Some(days) => {
            let series = SyntheticSeries::new(cli.synthetic_start, days).with_seed(cli.seed);
            let observations = daily_series(&series)?;
            let source = InMemoryObservationSource::new(observations)
                .with_label(&format!("synthetic seed {}", cli.seed));
            experiment.run_with_source(&source)?
        }
        None => experiment.run().with_context(|| {
            format!(
                "Experiment on {} failed",
                experiment.config().input.display()
            )
        })?,
    };

    println!("{}", report);

    if let Some(path) = &cli.output {
        write_report(&report, path)?;
    }
    Ok(())
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
