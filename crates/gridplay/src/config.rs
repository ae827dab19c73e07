//! Game configuration loaded from TOML and command-line overrides.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gridplay_engine::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, WinPolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Board size, starting mark and win policy for a game.
///
/// Missing keys in a config file fall back to a classic 3x3 full-line game
/// with X moving first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    #[getter(copy)]
    size: usize,
    /// Mark that moves first, also restored on restart.
    #[getter(copy)]
    starting_mark: Mark,
    /// How a winner is recognised.
    #[getter(copy)]
    policy: WinPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            starting_mark: Mark::X,
            policy: WinPolicy::FullLine,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, policy = %config.policy, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        size: Option<usize>,
        starting_mark: Option<Mark>,
        policy: Option<WinPolicy>,
    ) -> Self {
        Self {
            size: size.unwrap_or(self.size),
            starting_mark: starting_mark.unwrap_or(self.starting_mark),
            policy: policy.unwrap_or(self.policy),
        }
    }

    /// Rejects configurations the engine cannot be built from.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE {
            warn!(size = self.size, "Board size too small");
            return Err(ConfigError::new(format!(
                "Board size {} is below the minimum of {}",
                self.size, MIN_BOARD_SIZE
            )));
        }
        if self.size > MAX_BOARD_SIZE {
            warn!(size = self.size, "Board size too large");
            return Err(ConfigError::new(format!(
                "Board size {} is above the maximum of {}",
                self.size, MAX_BOARD_SIZE
            )));
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
