//! CLI argument parsing for regiontoc.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// regiontoc: numbered table of contents for `#region` markers.
///
/// Region markers are comment lines such as `// #region Name` and
/// `// #endregion`. The exact syntax depends on the file's language.
#[derive(Parser, Debug)]
#[command(name = "regiontoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: nearest .regiontoc.yaml above the current directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). REGIONTOC_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for regiontoc.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the numbered region outline of a file.
    ///
    /// Nested regions are numbered under their parent (1-1, 1-2, ...).
    /// Files without regions print a single placeholder line.
    Outline(OutlineArgs),

    /// Check that every region start has a matching end.
    ///
    /// Exits with status 2 and lists the offending lines when markers
    /// are unbalanced.
    Check(CheckArgs),

    /// Print the zero-based start line of a numbered region.
    ///
    /// Intended for editor integrations that jump to a region.
    Locate(LocateArgs),

    /// List supported language ids and their marker patterns.
    Languages,
}

/// Output format for `outline` and `check`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON for editor integrations.
    Json,
}

/// Arguments for the `outline` command.
#[derive(Parser, Debug)]
pub struct OutlineArgs {
    /// File to scan.
    pub file: PathBuf,

    /// Language id (default: detected from the file name).
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// File to check.
    pub file: PathBuf,

    /// Language id (default: detected from the file name).
    #[arg(short, long)]
    pub language: Option<String>,

    /// Report every unclosed start marker, not only the innermost.
    #[arg(long)]
    pub all: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `locate` command.
#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// File to scan.
    pub file: PathBuf,

    /// Region number as shown by `outline` (e.g. `2` or `1-3`).
    pub region: String,

    /// Language id (default: detected from the file name).
    #[arg(short, long)]
    pub language: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
