//! Core engine types: errors, RNG, configuration.
//!
//! These are shared by the catalog, round and session modules.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SessionConfig, ROUND_SIZE};
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
