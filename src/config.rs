//! Configuration for the compass accuracy monitor.

use crate::accuracy::AccuracyLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the monitor and its calibration prompt.
///
/// These are caller defaults, not live monitor state: the monitor itself is
/// never persisted across process restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Accuracy requirement used when a watch does not specify one
    pub required_accuracy: AccuracyLevel,

    /// Whether to drive the modal calibration prompt at all
    pub show_calibration_prompt: bool,

    /// Whether `simulateAccuracyChange` clears the shown-once suppression,
    /// so a simulation can always force a fresh prompt
    pub simulate_resets_prompt: bool,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            required_accuracy: AccuracyLevel::High,
            show_calibration_prompt: true,
            simulate_resets_prompt: true,
        }
    }
}

impl MonitorSettings {
    /// Load settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let settings: MonitorSettings = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("compass-monitor")
            .join("config.json")
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
