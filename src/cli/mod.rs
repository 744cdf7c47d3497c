//! CLI argument parsing for campusnav
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Campusnav - campus shortest walking path CLI
#[derive(Parser, Debug)]
#[command(name = "campusnav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display statistics for a campus dataset
    Stats {
        /// DOT dataset file describing buildings and walking paths
        dataset: PathBuf,
    },

    /// Find the shortest walking route between two buildings
    Route {
        /// DOT dataset file describing buildings and walking paths
        dataset: PathBuf,

        /// Starting building
        start: String,

        /// Destination building
        destination: String,
    },
}
