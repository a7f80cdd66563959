//! Checking a working order against chronological order.

use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use super::state::RoundState;
use crate::core::{EngineError, Result, ROUND_SIZE};
use crate::events::{EventCatalog, EventId};

type Dated = SmallVec<[(EventId, DateTime<Utc>); ROUND_SIZE]>;

fn dated(round: &RoundState, catalog: &EventCatalog) -> Result<Dated> {
    round
        .ids()
        .iter()
        .map(|&id| {
            catalog
                .get(id)
                .map(|event| (id, event.date))
                .ok_or(EngineError::UnknownEvent { id: id.raw() })
        })
        .collect()
}

/// The round's events sorted by date, oldest first.
///
/// The sort is stable: events sharing a date keep their relative
/// order from the working order.
pub fn chronological_order(round: &RoundState, catalog: &EventCatalog) -> Result<SmallVec<[EventId; ROUND_SIZE]>> {
    let mut sorted = dated(round, catalog)?;
    sorted.sort_by_key(|&(_, date)| date);
    Ok(sorted.into_iter().map(|(id, _)| id).collect())
}

/// Is the working order chronological?
///
/// Compares each slot against the stable chronological order by event
/// and date. Since the sort starts from the working order, this holds
/// exactly when the working order's dates never decrease.
pub fn is_chronological(round: &RoundState, catalog: &EventCatalog) -> Result<bool> {
    let working = dated(round, catalog)?;
    let mut sorted = working.clone();
    sorted.sort_by_key(|&(_, date)| date);
    Ok(working == sorted)
}
