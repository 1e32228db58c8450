//! The `score` command: read a cleaned table, run the two-stage pipeline,
//! write the augmented table in the requested format.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::config::ScoringConfig;
use crate::core::Dataset;
use crate::io::csv::read_dataset;
use crate::io::output::{CsvWriter, JsonWriter, OutputWriter, TerminalWriter};
use crate::risk::score_dataset;

pub struct ScoreOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
    pub tail: Option<usize>,
    pub beta_aqi: Option<f64>,
    pub beta_temp: Option<f64>,
    pub female_factor: Option<f64>,
    pub s_weight: Option<f64>,
}

pub fn handle_score(options: ScoreOptions) -> Result<()> {
    let config = build_config(&options)?;
    let dataset = read_dataset(&options.input)
        .with_context(|| format!("failed to read {}", options.input.display()))?;
    log::debug!(
        "loaded {} regions from {}",
        dataset.len(),
        options.input.display()
    );

    let scored = score_dataset(&dataset, &config)?;
    write_output(&scored, &options)
}

/// Precedence: flag overrides > config file > defaults.
fn build_config(options: &ScoreOptions) -> Result<ScoringConfig> {
    let mut config = ScoringConfig::load(options.config.as_deref())?;
    if let Some(value) = options.beta_aqi {
        config.beta_aqi = value;
    }
    if let Some(value) = options.beta_temp {
        config.beta_temp = value;
    }
    if let Some(value) = options.female_factor {
        config.female_factor = value;
    }
    if let Some(value) = options.s_weight {
        config.s_weight = value;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid scoring parameters: {e}"))?;
    Ok(config)
}

fn write_output(dataset: &Dataset, options: &ScoreOptions) -> Result<()> {
    match options.format {
        OutputFormat::Terminal => {
            TerminalWriter::with_limits(options.top, options.tail).write_dataset(dataset)
        }
        OutputFormat::Json => {
            let writer = open_destination(options.output.as_deref())?;
            JsonWriter::new(writer).write_dataset(dataset)
        }
        OutputFormat::Csv => {
            let writer = open_destination(options.output.as_deref())?;
            CsvWriter::new(writer).write_dataset(dataset)
        }
    }
}

fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
