//! Game configuration loaded from TOML.

use crate::session::RoleBinding;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_tictactoe::{
    DEFAULT_DEPTH_CEILING, ExplorationMode, Player, RandomFallback, SearchConfig, Strategy,
};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_search.toml";

/// Settings for a game against the search-driven opponent.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_setters::Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Search technique the opponent starts with.
    #[serde(default)]
    strategy: Strategy,

    /// Mark played from the keyboard; the other mark is automated.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Pause before the opponent moves, in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Largest depth limit iterative deepening tries.
    #[serde(default = "default_depth_ceiling")]
    depth_ceiling: usize,

    /// Exploration rules shared by all strategies.
    #[serde(default)]
    exploration: ExplorationMode,

    /// Seed for the fallback picker; random when unset.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Log destination for the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_opponent_delay_ms() -> u64 {
    400
}

fn default_depth_ceiling() -> usize {
    DEFAULT_DEPTH_CEILING
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_search.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            human_mark: default_human_mark(),
            opponent_delay_ms: default_opponent_delay_ms(),
            depth_ceiling: default_depth_ceiling(),
            exploration: ExplorationMode::default(),
            seed: None,
            log_file: default_log_file(),
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
        let config = Self::from_toml(&content)?;
        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.opponent_delay_ms > 60_000 {
            return Err(ConfigError::new(format!(
                "opponent_delay_ms must be at most 60000, got {}",
                self.opponent_delay_ms
            )));
        }
        Ok(())
    }

    /// Search tunables derived from this config.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.exploration, self.depth_ceiling)
    }

    /// Pause before the opponent moves.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Role assignment derived from `human_mark`.
    pub fn roles(&self) -> RoleBinding {
        RoleBinding::new(self.human_mark)
    }

    /// Fallback picker, seeded when `seed` is set.
    pub fn fallback(&self) -> RandomFallback {
        match self.seed {
            Some(seed) => RandomFallback::seeded(seed),
            None => RandomFallback::from_entropy(),
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
