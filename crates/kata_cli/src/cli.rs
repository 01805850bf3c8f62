//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// kata - walk values for strings, race endpoints
#[derive(Parser)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe two URLs concurrently and print the one that responds first
    Race {
        /// First URL
        a: String,

        /// Second URL
        b: String,

        /// Give up after this many milliseconds (overrides the config file)
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
    },

    /// Print every string found in a JSON document
    Strings {
        /// JSON file to read (stdin when omitted or `-`)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One string per line
    Text,
    /// A JSON array of strings
    Json,
}
