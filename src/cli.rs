//! CLI argument parsing for hypoalert

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::stats::Tail;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hypoalert")]
#[command(version)]
#[command(
    about = "Benchmark filtered vs. simple hypoglycemia detectors under calibrated noise",
    long_about = None
)]
pub struct Cli {
    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the trials and test the generated error counts
    Simulate {
        /// TOML configuration file (missing keys use defaults)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Number of trials (overrides the configuration)
        #[arg(short = 'n', long, value_name = "N")]
        trials: Option<usize>,

        /// Random seed (overrides the configuration)
        #[arg(short, long, value_name = "SEED")]
        seed: Option<u64>,

        /// Run trials in parallel with per-trial sub-streams
        #[arg(long)]
        parallel: bool,
    },

    /// Test recorded error counts (reference dataset unless --input is given)
    Analyze {
        /// JSON file with {"simple": [...], "complex": [...]} or a saved result set
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Design target as a raw error count
        #[arg(short, long, value_name = "ERRORS", default_value = "9")]
        target: f64,

        /// Alternative hypothesis of the one-sample tests
        #[arg(long, value_enum, default_value = "greater")]
        alternative: Tail,
    },
}
