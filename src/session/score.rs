//! End-of-game summary.

use serde::{Deserialize, Serialize};

/// Correct rounds out of rounds played. Displays as `score/rounds_played`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Rounds answered correctly.
    pub score: u32,
    /// Rounds evaluated.
    pub rounds_played: u32,
}

impl std::fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.score, self.rounds_played)
    }
}
