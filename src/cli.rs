//! Command-line interface for scramble.

use clap::Parser;
use std::path::PathBuf;

/// Scramble - sequence-memory tile game
#[derive(Parser, Debug)]
#[command(name = "scramble")]
#[command(
    about = "Memorize numbered tiles, survive the scramble, click them back in order",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Pre-fill the tile count (3-7) in the frontend input
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Speed up the memorize delay and scramble cadence
    #[arg(long)]
    pub fast: bool,

    /// Write tracing output to this file (the TUI owns the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
