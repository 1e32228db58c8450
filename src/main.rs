use anyhow::Result;
use clap::Parser;
use phrs::cli::{Cli, Commands};
use phrs::commands::score::{handle_score, ScoreOptions};

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            output,
            format,
            config,
            top,
            tail,
            beta_aqi,
            beta_temp,
            female_factor,
            s_weight,
        } => handle_score(ScoreOptions {
            input,
            output,
            format,
            config,
            top,
            tail,
            beta_aqi,
            beta_temp,
            female_factor,
            s_weight,
        }),
    }
}
