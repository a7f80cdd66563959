//! Session configuration.
//!
//! Hosts configure a game at startup by providing a `SessionConfig`:
//! how many rounds make up a game and how long the player has per round.
//! The config can be built in code or read from JSON, where missing
//! fields fall back to the defaults of the bundled game.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Number of events the player orders each round.
pub const ROUND_SIZE: usize = 4;

/// Rounds in a default game.
pub const DEFAULT_ROUNDS_TO_BE_PLAYED: u32 = 6;

/// Seconds per round in a default game.
pub const DEFAULT_TIME_PER_QUESTION: u32 = 60;

/// Remaining seconds at which the countdown turns urgent.
pub const DEFAULT_WARNING_THRESHOLD: u32 = 10;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rounds in one game (at least 1).
    pub rounds_to_be_played: u32,

    /// Seconds the player has to order one round (at least 1).
    pub time_per_question: u32,

    /// Remaining seconds at which the countdown reports a warning.
    ///
    /// Must be below `time_per_question`.
    pub warning_threshold: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds_to_be_played: DEFAULT_ROUNDS_TO_BE_PLAYED,
            time_per_question: DEFAULT_TIME_PER_QUESTION,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds in a game.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds_to_be_played = rounds;
        self
    }

    /// Set the seconds per round.
    #[must_use]
    pub fn with_time_per_question(mut self, seconds: u32) -> Self {
        self.time_per_question = seconds;
        self
    }

    /// Set the warning threshold in seconds.
    #[must_use]
    pub fn with_warning_threshold(mut self, seconds: u32) -> Self {
        self.warning_threshold = seconds;
        self
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<()> {
        if self.rounds_to_be_played == 0 {
            return Err(EngineError::InvalidConfig(
                "rounds_to_be_played must be at least 1".to_string(),
            ));
        }
        if self.time_per_question == 0 {
            return Err(EngineError::InvalidConfig(
                "time_per_question must be at least 1".to_string(),
            ));
        }
        if self.warning_threshold >= self.time_per_question {
            return Err(EngineError::InvalidConfig(format!(
                "warning_threshold ({}) must be below time_per_question ({})",
                self.warning_threshold, self.time_per_question
            )));
        }
        Ok(())
    }
}
