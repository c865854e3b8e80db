//! Command-line argument parsing for wordchain.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options, and applies them on top of the configured defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wordchain::config::Config;
use wordchain::core::cursor::CursorStrategy;
use wordchain::testdata::SizeClass;

/// Word-chain text buffer: benchmark, generate test data, check documents
#[derive(Debug, Parser)]
#[command(name = "wordchain", version, about)]
pub struct Cli {
    /// Default log level (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time the word-chain editor against the reference editor
    Bench {
        /// Size class of the generated documents to load
        #[arg(long, default_value = "small", value_parser = parse_size)]
        size: SizeClass,
        /// Operations per family per case
        #[arg(long)]
        iterations: Option<usize>,
        /// Exclusive end of the range cut or copied per round
        #[arg(long)]
        range: Option<usize>,
        /// Only use the first N case files
        #[arg(long)]
        cases: Option<usize>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// Cursor walk: from-head or nearest
        #[arg(long, value_parser = parse_cursor)]
        cursor: Option<CursorStrategy>,
    },
    /// Write random lowercase documents
    Generate {
        #[arg(long, default_value = "small", value_parser = parse_size)]
        size: SizeClass,
        /// Number of files to write
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the word count and misspellings of a document
    Check {
        file: PathBuf,
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
}

fn parse_size(s: &str) -> Result<SizeClass, String> {
    s.parse()
}

fn parse_cursor(s: &str) -> Result<CursorStrategy, String> {
    s.parse()
}

impl Cli {
    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        match &self.command {
            Command::Bench {
                iterations,
                range,
                cases,
                data_dir,
                dictionary,
                cursor,
                ..
            } => {
                if let Some(n) = iterations {
                    config.set("iterations", *n);
                }
                if let Some(n) = range {
                    config.set("cut_paste_range", *n);
                }
                if let Some(n) = cases {
                    config.set("cases", *n);
                }
                if let Some(dir) = data_dir {
                    config.set("data_dir", dir.to_string_lossy().into_owned());
                }
                if let Some(path) = dictionary {
                    config.set("dictionary", path.to_string_lossy().into_owned());
                }
                if let Some(strategy) = cursor {
                    let name = match strategy {
                        CursorStrategy::FromHead => "from-head",
                        CursorStrategy::Nearest => "nearest",
                    };
                    config.set("cursor", name);
                }
            }
            Command::Generate {
                count, data_dir, ..
            } => {
                if let Some(n) = count {
                    config.set("generate_count", *n);
                }
                if let Some(dir) = data_dir {
                    config.set("data_dir", dir.to_string_lossy().into_owned());
                }
            }
            Command::Check { dictionary, .. } => {
                if let Some(path) = dictionary {
                    config.set("dictionary", path.to_string_lossy().into_owned());
                }
            }
        }
    }
}
