//! Renderer configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use emoji_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Complete renderer configuration. Every field has a default, so an empty
/// file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TuiConfig {
    /// Emoji drawn for each mark.
    markers: Markers,
    /// Animation timings.
    animation: AnimationConfig,
    /// Log destination and filter.
    logging: LoggingConfig,
}

/// Emoji markers for X and O.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Markers {
    /// Marker for X.
    x: String,
    /// Marker for O.
    o: String,
}

impl Markers {
    /// Returns the marker for `mark`.
    pub fn for_mark(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            x: "🏃‍♂️".to_string(),
            o: "🧑‍💻".to_string(),
        }
    }
}

/// Animation timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// How long the last-moved cell stays emphasized.
    move_highlight_ms: u64,
    /// Number of confetti pieces on a win.
    confetti_pieces: usize,
    /// How long confetti stays on screen.
    confetti_lifetime_ms: u64,
    /// Input poll and redraw period.
    tick_ms: u64,
}

impl AnimationConfig {
    /// Last-moved emphasis as a duration.
    pub fn move_highlight(&self) -> Duration {
        Duration::from_millis(self.move_highlight_ms)
    }

    /// Confetti lifetime as a duration.
    pub fn confetti_lifetime(&self) -> Duration {
        Duration::from_millis(self.confetti_lifetime_ms)
    }

    /// Redraw period as a duration.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            move_highlight_ms: 500,
            confetti_pieces: 50,
            confetti_lifetime_ms: 4000,
            tick_ms: 50,
        }
    }
}

/// Log file and default filter. `RUST_LOG` overrides the filter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path.
    file: PathBuf,
    /// Filter used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("emoji_tictactoe.log"),
            filter: "info".to_string(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.markers.x, o = %config.markers.o, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the renderer cannot use.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markers.x.trim().is_empty() || self.markers.o.trim().is_empty() {
            return Err(ConfigError::new("Markers must not be empty".to_string()));
        }
        if self.markers.x == self.markers.o {
            return Err(ConfigError::new("X and O markers must differ".to_string()));
        }
        if self.animation.tick_ms == 0 {
            return Err(ConfigError::new("animation.tick_ms must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TuiConfig::from_toml("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.markers().for_mark(Mark::X), "🏃‍♂️");
        assert_eq!(config.animation().move_highlight(), Duration::from_millis(500));
        assert_eq!(*config.animation().confetti_pieces(), 50);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = TuiConfig::from_toml(
            r#"
            [markers]
            o = "🤖"

            [animation]
            confetti_pieces = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.markers().o(), "🤖");
        assert_eq!(config.markers().x(), "🏃‍♂️");
        assert_eq!(*config.animation().confetti_pieces(), 10);
        assert_eq!(*config.animation().tick_ms(), 50);
    }

    #[test]
    fn test_rejects_identical_markers() {
        let err = TuiConfig::from_toml("[markers]\nx = \"A\"\no = \"A\"\n").unwrap_err();
        assert!(err.message.contains("differ"));
    }

    #[test]
    fn test_rejects_zero_tick() {
        assert!(TuiConfig::from_toml("[animation]\ntick_ms = 0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = TuiConfig::from_toml("[markers\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nfilter = \"debug\"").unwrap();
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging().filter(), "debug");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
