//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug, Clone)]
#[command(name = "rewind")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Start with the move list sorted newest first
    #[arg(long)]
    pub descending: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
