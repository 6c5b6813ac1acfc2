//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use hotseat_engine::PlayerDefaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HotseatConfig {
    /// Name used when the X player leaves theirs blank.
    #[serde(default = "default_player_x")]
    player_x_default: String,

    /// Name used when the O player leaves theirs blank.
    #[serde(default = "default_player_o")]
    player_o_default: String,

    /// Refuse to start until both names are filled in, instead of
    /// substituting defaults.
    #[serde(default)]
    require_names: bool,

    /// Log file used by the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_x() -> String {
    PlayerDefaults::default().x
}

fn default_player_o() -> String {
    PlayerDefaults::default().o
}

fn default_log_file() -> PathBuf {
    PathBuf::from("hotseat.log")
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            player_x_default: default_player_x(),
            player_o_default: default_player_o(),
            require_names: false,
            log_file: default_log_file(),
        }
    }
}

impl HotseatConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(require_names = config.require_names, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Default names handed to the engine.
    pub fn player_defaults(&self) -> PlayerDefaults {
        PlayerDefaults {
            x: self.player_x_default.clone(),
            o: self.player_o_default.clone(),
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
    fn test_empty_config_uses_defaults() {
        let config = HotseatConfig::from_toml("").unwrap();
        assert_eq!(config, HotseatConfig::default());
        assert_eq!(config.player_x_default(), "Player X");
        assert_eq!(config.player_o_default(), "Player O");
        assert!(!config.require_names());
    }

    #[test]
    fn test_partial_config() {
        let config = HotseatConfig::from_toml("require_names = true\nplayer_o_default = \"Zed\"").unwrap();
        assert!(*config.require_names());
        assert_eq!(config.player_defaults().o, "Zed");
        assert_eq!(config.player_defaults().x, "Player X");
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = HotseatConfig::from_toml("require_names = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
