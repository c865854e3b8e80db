//! wordchain - a word-chain text buffer with deferred copy
//!
//! This is the main entry point. It parses CLI arguments, sets up logging,
//! and delegates to the runner for the requested command.

mod cli;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordchain::config::Config;
use wordchain::user_config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::default();
    user_config::configure(&mut config);

    // Apply CLI overrides
    cli.apply_to_config(&mut config);

    match &cli.command {
        cli::Command::Bench { size, .. } => run::run_bench(*size, &config),
        cli::Command::Generate { size, seed, .. } => run::run_generate(*size, *seed, &config),
        cli::Command::Check { file, .. } => run::run_check(file, &config),
    }
}
