use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scored table as CSV
    Csv,
    /// Scored table as pretty-printed JSON
    Json,
    /// Ranked summary on the terminal
    Terminal,
}

#[derive(Parser, Debug)]
#[command(name = "phrs")]
#[command(about = "Regional public health risk scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a cleaned regional dataset
    Score {
        /// Cleaned input table (CSV)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Scoring configuration file (defaults to phrs.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show only the N highest-risk regions
        #[arg(long, visible_alias = "head")]
        top: Option<usize>,

        /// Show only the N lowest-risk regions
        #[arg(long)]
        tail: Option<usize>,

        /// Override the AQI excess slope
        #[arg(long)]
        beta_aqi: Option<f64>,

        /// Override the temperature deviation slope
        #[arg(long)]
        beta_temp: Option<f64>,

        /// Override the female group multiplier
        #[arg(long)]
        female_factor: Option<f64>,

        /// Override the smoking penalty weight
        #[arg(long)]
        s_weight: Option<f64>,
    },
}
