//! Engine error types.

use thiserror::Error;

/// Errors reported by the catalog loader, round operations and the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The event resource is missing or could not be parsed.
    #[error("event data unavailable: {reason}")]
    DataUnavailable {
        /// What went wrong while loading.
        reason: String,
    },

    /// The catalog is too small to draw a round from.
    #[error("insufficient event data: {available} events available, {required} required")]
    InsufficientData {
        /// Events in the catalog.
        available: usize,
        /// Events needed for one round.
        required: usize,
    },

    /// A round slot index was outside the round.
    #[error("slot index {index} out of range for a round of {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of slots in the round.
        len: usize,
    },

    /// A round refers to an event the catalog does not hold.
    #[error("event {id} is not in the catalog")]
    UnknownEvent {
        /// Raw id of the missing event.
        id: u32,
    },

    /// The current round has already been evaluated.
    #[error("round already resolved")]
    RoundAlreadyResolved,

    /// The current round has not been evaluated yet.
    #[error("round still in progress")]
    RoundInProgress,

    /// No round has been drawn yet.
    #[error("no active round")]
    NoActiveRound,

    /// Session configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Shorthand for a `DataUnavailable` error.
    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
