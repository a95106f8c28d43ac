//! Time Voyager - console entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use time_voyager::{App, Cli, Command, GameConfig};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command_or_default() {
        Command::Play { config } => run_play(config).await,
        Command::DefaultConfig => {
            print!("{}", GameConfig::default().to_toml()?);
            Ok(())
        }
    }
}

/// Run the game on stdin/stdout
#[instrument]
async fn run_play(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    info!("Starting Time Voyager");
    let mut app = App::new(config);
    app.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
