//! Engine configuration loaded from TOML.

use crate::board::{Board, STANDARD_SIZE};
use crate::symbol::Symbols;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game engine.
///
/// Every field has a default, so an empty file is a valid configuration:
///
/// ```toml
/// size = 3
/// player_symbol = "X"
/// computer_symbol = "O"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Board side length.
    #[serde(default = "default_size")]
    size: usize,

    /// Symbol written by the player.
    #[serde(default = "default_player_symbol")]
    player_symbol: String,

    /// Symbol written by the computer.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: String,

    /// Seed for the computer's random source; `None` seeds from the OS.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

#[instrument]
fn default_size() -> usize {
    STANDARD_SIZE
}

#[instrument]
fn default_player_symbol() -> String {
    "X".to_string()
}

#[instrument]
fn default_computer_symbol() -> String {
    "O".to_string()
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds the empty board described by this configuration.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::new(self.size).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Validates and pairs the configured symbols.
    #[instrument(skip(self))]
    pub fn symbols(&self) -> Result<Symbols, ConfigError> {
        Symbols::parse(&self.player_symbol, &self.computer_symbol)
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            player_symbol: default_player_symbol(),
            computer_symbol: default_computer_symbol(),
            seed: None,
        }
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
    use crate::engine::GameEngine;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.size(), 3);
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = EngineConfig::from_toml_str("size = 4\nplayer_symbol = \"O\"\ncomputer_symbol = \"X\"\nseed = 7").unwrap();
        assert_eq!(*config.size(), 4);
        assert_eq!(config.player_symbol(), "O");
        assert_eq!(config.seed(), &Some(7));
    }

    #[test]
    fn test_invalid_toml_reports_error() {
        let err = EngineConfig::from_toml_str("size = \"big\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_size_board_rejected() {
        let config = EngineConfig::default().with_size(0);
        assert!(config.board().is_err());
    }

    #[test]
    fn test_oversized_board_rejected() {
        let config = EngineConfig::from_toml_str("size = 4294967296").unwrap();
        let err = config.board().unwrap_err();
        assert!(err.message.contains("exceeds the maximum"));
        assert!(GameEngine::from_config(&config).is_err());
    }

    #[test]
    fn test_identical_symbols_rejected() {
        let config = EngineConfig::default().with_computer_symbol("X".to_string());
        let err = config.symbols().unwrap_err();
        assert!(err.message.contains("cannot both use"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size = 5\nseed = 99").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.size(), 5);
        assert_eq!(config.seed(), &Some(99));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let err = EngineConfig::from_file("/nonexistent/noughts.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
