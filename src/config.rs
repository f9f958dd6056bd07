//! Application configuration.

use crate::relay::types::DEFAULT_PENDING_HIGH_WATER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Relay settings
    pub relay: RelaySettings,
    /// Workout settings
    pub workout: WorkoutSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            relay: RelaySettings::default(),
            workout: WorkoutSettings::default(),
        }
    }
}

/// Relay-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaySettings {
    /// Pending-queue length that triggers a growth warning
    pub pending_high_water: usize,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            pending_high_water: DEFAULT_PENDING_HIGH_WATER,
        }
    }
}

/// Workout-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSettings {
    /// Plan selected when none is specified
    pub default_workout: String,
}

impl Default for WorkoutSettings {
    fn default() -> Self {
        Self {
            default_workout: "Incinerator".to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "wristlink", "WristLink")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration, falling back to defaults when no file exists.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load application configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
