//! Command-line interface for the emoji tic-tac-toe renderer.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Emoji Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "emoji_tictactoe")]
#[command(about = "Emoji tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Marker drawn for X (overrides config)
    #[arg(long)]
    pub x_marker: Option<String>,

    /// Marker drawn for O (overrides config)
    #[arg(long)]
    pub o_marker: Option<String>,

    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, if any, then applies flag overrides.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };

        if self.x_marker.is_some() || self.o_marker.is_some() {
            let mut markers = config.markers().clone();
            if let Some(x) = &self.x_marker {
                markers = markers.with_x(x.clone());
            }
            if let Some(o) = &self.o_marker {
                markers = markers.with_o(o.clone());
            }
            config = config.with_markers(markers);
        }
        if let Some(file) = &self.log_file {
            let logging = config.logging().clone().with_file(file.clone());
            config = config.with_logging(logging);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoji_tictactoe::Mark;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["emoji_tictactoe"]).unwrap();
        assert_eq!(cli.load_config().unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_marker_overrides() {
        let cli = Cli::try_parse_from(["emoji_tictactoe", "--x-marker", "🐱", "--o-marker", "🐶"])
            .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.markers().for_mark(Mark::X), "🐱");
        assert_eq!(config.markers().for_mark(Mark::O), "🐶");
    }

    #[test]
    fn test_override_that_collides_is_rejected() {
        let cli = Cli::try_parse_from(["emoji_tictactoe", "--x-marker", "🧑‍💻"]).unwrap();
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_log_file_override() {
        let cli = Cli::try_parse_from(["emoji_tictactoe", "--log-file", "/tmp/game.log"]).unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.logging().file(), &PathBuf::from("/tmp/game.log"));
    }
}
