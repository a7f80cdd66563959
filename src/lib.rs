//! # bout-time
//!
//! Round engine for "Bout Time", a trivia game where the player puts four
//! historical events in chronological order before the clock runs out.
//!
//! ## Design Principles
//!
//! 1. **Host-Owned State**: A `GameSession` is a plain value the host
//!    shell owns. There are no globals and no callbacks into the host.
//!
//! 2. **Typed Failures**: Missing data, short catalogs, bad slots and
//!    double evaluation are all `EngineError`s the host decides on.
//!
//! 3. **Deterministic Draws**: Rounds come from a seeded ChaCha8 RNG, so a
//!    seed replays a whole game.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `events`: Historical events, the catalog, and its JSON loader
//! - `round`: Drawing a round, swapping slots, judging the order
//! - `session`: Game lifecycle, countdown, score card

pub mod core;
pub mod events;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, GameRngState, Result, SessionConfig, ROUND_SIZE};

pub use crate::events::{
    EventCatalog, EventId, EventSource, HistoricalEvent, JsonFileSource, JsonTextSource, LoadPolicy,
};

pub use crate::round::{chronological_order, draw_round, is_chronological, RoundState};

pub use crate::session::{
    Advance, GameSession, RoundCountdown, RoundOutcome, ScoreCard, SessionPhase, Tick,
};
