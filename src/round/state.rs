//! The player's working order for one round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{EngineError, Result, ROUND_SIZE};
use crate::events::EventId;

/// Four events in the order the player currently has them.
///
/// Only swaps change the order. Once the round is evaluated it is marked
/// resolved and further swaps are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoundRecord", into = "RoundRecord")]
pub struct RoundState {
    slots: SmallVec<[EventId; ROUND_SIZE]>,
    resolved: bool,
}

/// Serialized form; the fixed-size array keeps the slot count exact.
#[derive(Serialize, Deserialize)]
struct RoundRecord {
    slots: [EventId; ROUND_SIZE],
    resolved: bool,
}

impl From<RoundRecord> for RoundState {
    fn from(record: RoundRecord) -> Self {
        Self {
            slots: SmallVec::from_buf(record.slots),
            resolved: record.resolved,
        }
    }
}

impl From<RoundState> for RoundRecord {
    fn from(round: RoundState) -> Self {
        let mut slots = [EventId::new(0); ROUND_SIZE];
        slots.copy_from_slice(&round.slots);
        Self {
            slots,
            resolved: round.resolved,
        }
    }
}

impl RoundState {
    /// Create a round with the given working order.
    ///
    /// `draw_round` is the normal way to get a round; this is for
    /// replaying a known arrangement.
    #[must_use]
    pub fn from_ids(ids: [EventId; ROUND_SIZE]) -> Self {
        Self {
            slots: SmallVec::from_buf(ids),
            resolved: false,
        }
    }

    /// The working order, slot 0 first.
    #[must_use]
    pub fn ids(&self) -> &[EventId] {
        &self.slots
    }

    /// Event in a slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<EventId> {
        self.slots.get(slot).copied()
    }

    /// Number of slots (always `ROUND_SIZE`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a drawn round.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Has this round been evaluated?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.resolved = true;
    }

    /// Exchange the events in slots `i` and `j`.
    ///
    /// `i == j` is a no-op. Out-of-range slots fail with `IndexOutOfRange`
    /// and leave the order untouched.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        if self.resolved {
            return Err(EngineError::RoundAlreadyResolved);
        }
        self.check_slot(i)?;
        self.check_slot(j)?;

        self.slots.swap(i, j);
        debug!(i, j, "swapped round slots");
        Ok(())
    }

    /// Move the event in `slot` one place down (towards the last slot).
    pub fn move_down(&mut self, slot: usize) -> Result<()> {
        let below = slot.checked_add(1).ok_or(EngineError::IndexOutOfRange {
            index: slot,
            len: self.len(),
        })?;
        self.swap(slot, below)
    }

    /// Move the event in `slot` one place up (towards slot 0).
    pub fn move_up(&mut self, slot: usize) -> Result<()> {
        let above = slot.checked_sub(1).ok_or(EngineError::IndexOutOfRange {
            index: slot,
            len: self.len(),
        })?;
        self.swap(slot, above)
    }

    fn check_slot(&self, slot: usize) -> Result<()> {
        if slot >= self.slots.len() {
            return Err(EngineError::IndexOutOfRange {
                index: slot,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}
