//! Command-line interface for time_voyager.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Time Voyager - menu and tic-tac-toe driven from the console
#[derive(Parser, Debug)]
#[command(name = "time_voyager")]
#[command(about = "Tic-tac-toe with a menu screen, played from the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play on stdin/stdout
    Play {
        /// Path to a TOML config file; built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}

impl Cli {
    /// Returns the command to run, defaulting to `play` with no config file.
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { config: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["time_voyager"]);
        assert_eq!(cli.command_or_default(), Command::Play { config: None });
    }

    #[test]
    fn test_play_with_config() {
        let cli = Cli::parse_from(["time_voyager", "play", "--config", "voyager.toml"]);
        assert_eq!(
            cli.command_or_default(),
            Command::Play {
                config: Some(PathBuf::from("voyager.toml"))
            }
        );
    }
}
