//! Game configuration loaded from TOML.
//!
//! ```toml
//! unrestricted = false
//!
//! [clock]
//! enabled = true
//! seconds_per_side = 60
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Countdown settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Whether the game runs a clock at all. Defaults to true.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Starting time for each side, in seconds. Defaults to 60.
    #[serde(default = "default_seconds_per_side")]
    pub seconds_per_side: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_seconds_per_side() -> u64 {
    60
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            enabled: default_enabled(),
            seconds_per_side: default_seconds_per_side(),
        }
    }
}

impl ClockConfig {
    /// Starting time per side, or `None` when the clock is disabled.
    pub fn per_side(&self) -> Option<Duration> {
        self.enabled
            .then(|| Duration::from_secs(self.seconds_per_side))
    }
}

/// Settings for a new [`Game`](crate::Game).
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Start in unrestricted (free placement) mode.
    #[serde(default)]
    pub unrestricted: bool,
    /// Countdown settings.
    #[serde(default)]
    pub clock: ClockConfig,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
