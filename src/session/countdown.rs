//! Per-round countdown driven by the host's timer.
//!
//! The host calls `tick()` once per second and evaluates the round when
//! the countdown reports `Tick::Expired`. Nothing here touches the
//! session.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result, SessionConfig};

/// Result of advancing the countdown by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tick {
    /// Time left, above the warning threshold.
    Running { remaining: u32 },
    /// Time left, at or below the warning threshold.
    Warning { remaining: u32 },
    /// No time left; the round should be evaluated.
    Expired,
}

/// Seconds left in the current round.
///
/// Always `remaining <= total` and `warning_threshold < total`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CountdownRecord")]
pub struct RoundCountdown {
    total: u32,
    warning_threshold: u32,
    remaining: u32,
}

#[derive(Deserialize)]
struct CountdownRecord {
    total: u32,
    warning_threshold: u32,
    remaining: u32,
}

impl TryFrom<CountdownRecord> for RoundCountdown {
    type Error = EngineError;

    fn try_from(record: CountdownRecord) -> Result<Self> {
        let mut countdown = Self::new(record.total, record.warning_threshold)?;
        if record.remaining > record.total {
            return Err(EngineError::InvalidConfig(format!(
                "remaining ({}) exceeds total ({})",
                record.remaining, record.total
            )));
        }
        countdown.remaining = record.remaining;
        Ok(countdown)
    }
}

impl RoundCountdown {
    /// Create a full countdown of `total` seconds.
    ///
    /// Fails with `InvalidConfig` unless `total >= 1` and
    /// `warning_threshold < total`.
    pub fn new(total: u32, warning_threshold: u32) -> Result<Self> {
        if total == 0 {
            return Err(EngineError::InvalidConfig(
                "countdown total must be at least 1".to_string(),
            ));
        }
        if warning_threshold >= total {
            return Err(EngineError::InvalidConfig(format!(
                "warning_threshold ({}) must be below total ({})",
                warning_threshold, total
            )));
        }
        Ok(Self {
            total,
            warning_threshold,
            remaining: total,
        })
    }

    /// Create a countdown from the session's time settings.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        Self::new(config.time_per_question, config.warning_threshold)
    }

    /// Advance one second.
    ///
    /// Once expired, further ticks keep reporting `Expired`.
    pub fn tick(&mut self) -> Tick {
        self.remaining = self.remaining.saturating_sub(1);
        match self.remaining {
            0 => Tick::Expired,
            remaining if remaining <= self.warning_threshold => Tick::Warning { remaining },
            remaining => Tick::Running { remaining },
        }
    }

    /// Seconds left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Has the countdown reached zero?
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Restore the full time for a new round.
    pub fn reset(&mut self) {
        self.remaining = self.total;
    }
}

impl std::fmt::Display for RoundCountdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
