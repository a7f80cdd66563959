//! Game session: rounds, score and lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! Created --begin--> RoundInProgress --evaluate--> RoundResolved --next_round--> RoundInProgress
//!                                                       |
//!                                (rounds_played == rounds_to_be_played)
//!                                                       v
//!                          RoundInProgress <--play_again-- Complete
//! ```
//!
//! The phase is derived from the counters and the current round.
//!
//! ## Example
//!
//! ```
//! use bout_time::core::{GameRng, SessionConfig};
//! use bout_time::events::{EventCatalog, HistoricalEvent};
//! use bout_time::session::{GameSession, SessionPhase};
//! use chrono::{TimeZone, Utc};
//!
//! let catalog: EventCatalog = (0..6)
//!     .map(|i| HistoricalEvent::new(
//!         format!("event {}", i),
//!         Utc.with_ymd_and_hms(1900 + i, 1, 1, 0, 0, 0).unwrap(),
//!         "https://example.org",
//!     ))
//!     .collect();
//!
//! let config = SessionConfig::new().with_rounds(1);
//! let mut session = GameSession::start(config, catalog, GameRng::new(7)).unwrap();
//!
//! session.swap(0, 1).unwrap();
//! let outcome = session.evaluate().unwrap();
//! assert_eq!(outcome.rounds_played, 1);
//! assert_eq!(session.phase(), SessionPhase::Complete);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::countdown::RoundCountdown;
use super::score::ScoreCard;
use crate::core::{EngineError, GameRng, GameRngState, Result, SessionConfig, ROUND_SIZE};
use crate::events::{EventCatalog, HistoricalEvent};
use crate::round::{draw_round, is_chronological, RoundState};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No round drawn yet.
    Created,
    /// The player is ordering the current round.
    RoundInProgress,
    /// The current round was evaluated; more rounds remain.
    RoundResolved,
    /// Every round has been played.
    Complete,
}

/// Result of evaluating a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Did the working order match chronological order?
    pub is_correct: bool,
    /// Score after this round.
    pub score: u32,
    /// Rounds played after this round.
    pub rounds_played: u32,
}

/// What `next_round` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A fresh round was drawn.
    NewRound,
    /// All rounds are played; nothing changed.
    SessionComplete,
}

/// One game: a catalog, the current round, and the running score.
///
/// Owned by the host and mutated through `&mut self`.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    catalog: EventCatalog,
    rng: GameRng,
    countdown: RoundCountdown,
    current: Option<RoundState>,
    score: u32,
    rounds_played: u32,
}

impl GameSession {
    /// Create a session in the `Created` phase.
    ///
    /// Fails with `InvalidConfig` for an unusable config and with
    /// `InsufficientData` if the catalog cannot fill a round.
    pub fn new(config: SessionConfig, catalog: EventCatalog, rng: GameRng) -> Result<Self> {
        config.validate()?;
        let countdown = RoundCountdown::from_config(&config)?;
        if catalog.len() < ROUND_SIZE {
            return Err(EngineError::InsufficientData {
                available: catalog.len(),
                required: ROUND_SIZE,
            });
        }

        info!(
            events = catalog.len(),
            rounds = config.rounds_to_be_played,
            seed = rng.seed(),
            "session created"
        );

        Ok(Self {
            config,
            catalog,
            rng,
            countdown,
            current: None,
            score: 0,
            rounds_played: 0,
        })
    }

    /// Create a session and draw its first round.
    pub fn start(config: SessionConfig, catalog: EventCatalog, rng: GameRng) -> Result<Self> {
        let mut session = Self::new(config, catalog, rng)?;
        session.begin()?;
        Ok(session)
    }

    /// Draw the first round.
    ///
    /// Does nothing once a round has been drawn.
    pub fn begin(&mut self) -> Result<()> {
        if self.current.is_none() {
            self.current = Some(draw_round(&self.catalog, &mut self.rng)?);
        }
        Ok(())
    }

    // === Queries ===

    /// Lifecycle phase, derived from the current round and rounds played.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.current {
            None => SessionPhase::Created,
            Some(round) if !round.is_resolved() => SessionPhase::RoundInProgress,
            Some(_) if self.rounds_played >= self.config.rounds_to_be_played => SessionPhase::Complete,
            Some(_) => SessionPhase::RoundResolved,
        }
    }

    /// Have all rounds been played?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == SessionPhase::Complete
    }

    /// Rounds answered correctly.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rounds evaluated so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Rounds in a full session.
    #[must_use]
    pub fn rounds_to_be_played(&self) -> u32 {
        self.config.rounds_to_be_played
    }

    /// Settings the session was created with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Events rounds are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Score so far, for the end-of-game screen.
    #[must_use]
    pub fn score_card(&self) -> ScoreCard {
        ScoreCard {
            score: self.score,
            rounds_played: self.rounds_played,
        }
    }

    /// A fresh countdown for one round, from the session's time settings.
    #[must_use]
    pub fn countdown(&self) -> RoundCountdown {
        self.countdown.clone()
    }

    /// RNG checkpoint; restoring it replays the same future rounds.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The current round.
    pub fn current_round(&self) -> Result<&RoundState> {
        self.current.as_ref().ok_or(EngineError::NoActiveRound)
    }

    /// The current round's events in the player's working order.
    pub fn current_round_events(&self) -> Result<SmallVec<[&HistoricalEvent; ROUND_SIZE]>> {
        self.current_round()?
            .ids()
            .iter()
            .map(|&id| {
                self.catalog
                    .get(id)
                    .ok_or(EngineError::UnknownEvent { id: id.raw() })
            })
            .collect()
    }

    /// Link of the event currently in `slot`.
    pub fn event_link(&self, slot: usize) -> Result<&str> {
        let round = self.current_round()?;
        let id = round.get(slot).ok_or(EngineError::IndexOutOfRange {
            index: slot,
            len: round.len(),
        })?;
        self.catalog
            .get(id)
            .map(|event| event.link.as_str())
            .ok_or(EngineError::UnknownEvent { id: id.raw() })
    }

    // === Player actions ===

    fn current_mut(&mut self) -> Result<&mut RoundState> {
        self.current.as_mut().ok_or(EngineError::NoActiveRound)
    }

    /// Exchange the events in slots `i` and `j` of the current round.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.current_mut()?.swap(i, j)
    }

    /// Move the event in `slot` one place towards slot 0.
    pub fn move_up(&mut self, slot: usize) -> Result<()> {
        self.current_mut()?.move_up(slot)
    }

    /// Move the event in `slot` one place towards the last slot.
    pub fn move_down(&mut self, slot: usize) -> Result<()> {
        self.current_mut()?.move_down(slot)
    }

    /// Judge the current round and update the counters.
    ///
    /// `rounds_played` always goes up by one and `score` goes up by one
    /// if the order was correct. A round can only be evaluated once;
    /// a second call fails with `RoundAlreadyResolved` and changes nothing.
    pub fn evaluate(&mut self) -> Result<RoundOutcome> {
        let round = self.current.as_mut().ok_or(EngineError::NoActiveRound)?;
        if round.is_resolved() {
            return Err(EngineError::RoundAlreadyResolved);
        }

        let is_correct = is_chronological(round, &self.catalog)?;
        round.mark_resolved();

        self.rounds_played += 1;
        if is_correct {
            self.score += 1;
        }

        debug!(
            is_correct,
            score = self.score,
            rounds_played = self.rounds_played,
            "round evaluated"
        );

        Ok(RoundOutcome {
            is_correct,
            score: self.score,
            rounds_played: self.rounds_played,
        })
    }

    // === Progression ===

    /// Move on after a resolved round.
    ///
    /// Draws a fresh round unless every round has been played, in which
    /// case nothing changes and `Advance::SessionComplete` is returned.
    pub fn next_round(&mut self) -> Result<Advance> {
        match self.phase() {
            SessionPhase::Created => Err(EngineError::NoActiveRound),
            SessionPhase::RoundInProgress => Err(EngineError::RoundInProgress),
            SessionPhase::Complete => Ok(Advance::SessionComplete),
            SessionPhase::RoundResolved => {
                self.current = Some(draw_round(&self.catalog, &mut self.rng)?);
                Ok(Advance::NewRound)
            }
        }
    }

    /// Start over: zero the counters and draw a fresh round.
    ///
    /// Accepted in any phase.
    pub fn play_again(&mut self) -> Result<()> {
        let round = draw_round(&self.catalog, &mut self.rng)?;
        self.current = Some(round);
        self.score = 0;
        self.rounds_played = 0;

        info!(rounds = self.config.rounds_to_be_played, "new game started");
        Ok(())
    }
}
