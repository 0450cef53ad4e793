//! Command-line interface for the rewind terminal client.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe in the terminal with full move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(long)]
    pub descending: bool,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
