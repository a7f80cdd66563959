//! Game session: the rounds of one game and their score.
//!
//! - `GameSession`: draws rounds, takes swaps, evaluates, tracks score
//! - `RoundCountdown`: per-round timer state the host ticks
//! - `ScoreCard`: the end-of-game summary

mod countdown;
mod score;
#[allow(clippy::module_inception)]
mod session;

pub use countdown::{RoundCountdown, Tick};
pub use score::ScoreCard;
pub use session::{Advance, GameSession, RoundOutcome, SessionPhase};
