//! Command line argument parsing for the lotnorm CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// lotnorm - search index normalization for auction listings
#[derive(Parser, Debug, Clone)]
#[command(name = "lotnorm")]
#[command(about = "Normalize auction listing text and extract lot/item numbers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LotnormArgs {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Normalizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Lot number prefix separator (overrides the config file)
    #[arg(long, env = "LOTNORM_PREFIX_SEPARATOR", global = true)]
    pub prefix_separator: Option<String>,

    /// Lot number extension separator (overrides the config file)
    #[arg(long, env = "LOTNORM_EXTENSION_SEPARATOR", global = true)]
    pub extension_separator: Option<String>,

    /// Index language for stopword removal (overrides the config file)
    #[arg(long, env = "LOTNORM_INDEX_LANGUAGE", global = true)]
    pub language: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LotnormArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Canonicalize text for the search index
    Filter(TextArgs),

    /// Extract lot numbers and show the remaining text
    #[command(name = "lot-numbers")]
    LotNumbers(TextArgs),

    /// Extract item numbers
    #[command(name = "item-numbers")]
    ItemNumbers(TextArgs),

    /// Lowercase, deduplicate and sort tokens
    Unique(TextArgs),

    /// Drop tokens shorter than a minimum length
    #[command(name = "min-length")]
    MinLength(MinLengthArgs),

    /// Build complete index text (filter, unique, min-length)
    Index(MinLengthArgs),

    /// Split a search query into lot numbers, item numbers and terms
    Query(TextArgs),
}

/// Input text shared by all commands.
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Text to process; read from stdin, one listing per line, when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for commands that filter by token length
#[derive(Parser, Debug, Clone)]
pub struct MinLengthArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Minimum token length in characters
    #[arg(short = 'n', long, default_value = "3")]
    pub min_length: usize,
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
