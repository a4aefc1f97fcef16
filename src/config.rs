//! Session configuration loaded from TOML.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Which marks the players use, who opens, and how long the engine
/// pauses before replying.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark played by the human. The engine plays the other one.
    #[serde(default = "default_human")]
    human: Player,

    /// Mark that moves first.
    #[serde(default = "default_first_mover")]
    first_mover: Player,

    /// Pause before the engine's reply, in milliseconds. Presentation only.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

#[instrument]
fn default_first_mover() -> Player {
    Player::O
}

#[instrument]
fn default_think_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            first_mover: default_first_mover(),
            think_delay_ms: default_think_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(human: Player, first_mover: Player, think_delay_ms: u64) -> Self {
        Self {
            human,
            first_mover,
            think_delay_ms,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, first_mover = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Mark played by the engine.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// Pause before the engine's reply.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Overrides the human's mark.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Overrides who moves first.
    pub fn with_first_mover(mut self, first_mover: Player) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Overrides the engine's pause.
    pub fn with_think_delay_ms(mut self, think_delay_ms: u64) -> Self {
        self.think_delay_ms = think_delay_ms;
        self
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

    #[test]
    fn test_defaults_match_classic_setup() {
        let config = GameConfig::default();
        assert_eq!(*config.human(), Player::X);
        assert_eq!(config.computer(), Player::O);
        assert_eq!(*config.first_mover(), Player::O);
        assert_eq!(config.think_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: GameConfig = toml::from_str("think_delay_ms = 0").unwrap();
        assert_eq!(*config.human(), Player::X);
        assert_eq!(*config.think_delay_ms(), 0);
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default()
            .with_human(Player::O)
            .with_first_mover(Player::O)
            .with_think_delay_ms(10);
        assert_eq!(config, GameConfig::new(Player::O, Player::O, 10));
    }
}
