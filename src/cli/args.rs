//! Command line argument parsing for the agora CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Agora - question search for a community Q&A platform
#[derive(Parser, Debug, Clone)]
#[command(name = "agora")]
#[command(about = "Search, filter and paginate a community Q&A question collection")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Agora Contributors")]
#[command(long_about = None)]
pub struct AgoraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AgoraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a question collection
    Search(SearchArgs),

    /// Show how a raw search string parses
    Parse(ParseArgs),

    /// Show statistics for a question collection
    Stats(StatsArgs),
}

/// Arguments for searching a question collection
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Question collection file (JSON array or JSON lines)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Raw search string (keywords, key:value filters, tags)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Explicit tags every result must carry (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Checkbox filters: no-answers, no-upvoted-or-accepted (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub filters: Vec<String>,

    /// Only questions at least this many days old
    #[arg(long, value_name = "DAYS")]
    pub days_old: Option<i64>,

    /// Sort mode: newest, oldest, highest-score, most-answers
    #[arg(short, long, default_value = "newest")]
    pub sort: String,

    /// Zero-based page index
    #[arg(short, long, default_value = "0")]
    pub page: usize,

    /// Page size
    #[arg(long, default_value = "15")]
    pub size: usize,

    /// Return every match as one page
    #[arg(long, conflicts_with = "page")]
    pub all: bool,
}

/// Arguments for inspecting the parser
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Raw search string to parse
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for collection statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Question collection file (JSON array or JSON lines)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
