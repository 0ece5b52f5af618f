//! Scramble - sequence-memory tile game.

use anyhow::Result;
use clap::Parser;
use scramble::cli::Cli;
use scramble::game::Timing;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The TUI owns the terminal, so tracing goes to a file or nowhere.
    if let Some(path) = &cli.log_file {
        let log_file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    }

    let timing = if cli.fast {
        Timing::fast()
    } else {
        Timing::standard()
    };

    info!(fast = cli.fast, count = ?cli.count, "starting scramble");
    scramble::tui::run(timing, cli.count).await
}
