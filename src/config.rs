//! Arcade configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for an arcade run.
///
/// Everything has a sensible default; a TOML file only needs the keys
/// it wants to override.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Display name of the first player.
    #[serde(default = "default_player_a")]
    player_a: String,

    /// Display name of the second player.
    #[serde(default = "default_player_b")]
    player_b: String,

    /// The one name the love calculator accepts (case-insensitive).
    #[serde(default = "default_player_a")]
    accepted_name: String,

    /// Suppress all tone cues.
    #[serde(default)]
    muted: bool,
}

fn default_player_a() -> String {
    "Adi".to_string()
}

fn default_player_b() -> String {
    "Dev".to_string()
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
            accepted_name: default_player_a(),
            muted: false,
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_a = %config.player_a, player_b = %config.player_b, "Config loaded");
        Ok(config)
    }

    /// Returns a copy with tone cues muted.
    pub fn with_muted(mut self) -> Self {
        self.muted = true;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
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

    #[test]
    fn defaults_fill_missing_keys() {
        let config: ArcadeConfig = toml::from_str("player_b = \"Devika\"").unwrap();
        assert_eq!(config.player_a(), "Adi");
        assert_eq!(config.player_b(), "Devika");
        assert_eq!(config.accepted_name(), "Adi");
        assert!(!config.muted());
    }

    #[test]
    fn with_muted_sets_the_flag() {
        let config = ArcadeConfig::default().with_muted();
        assert!(*config.muted());
    }
}
