//! Drawing the events for a new round.

use smallvec::SmallVec;
use tracing::debug;

use super::state::RoundState;
use crate::core::{EngineError, GameRng, Result, ROUND_SIZE};
use crate::events::{EventCatalog, EventId};

/// Draw `ROUND_SIZE` distinct events from the catalog.
///
/// Events are sampled uniformly without replacement and the returned
/// order is random. The catalog is not touched.
///
/// Fails with `InsufficientData` if the catalog holds fewer than
/// `ROUND_SIZE` events.
pub fn draw_round(catalog: &EventCatalog, rng: &mut GameRng) -> Result<RoundState> {
    let insufficient = || EngineError::InsufficientData {
        available: catalog.len(),
        required: ROUND_SIZE,
    };

    let picked = rng
        .sample_indices(catalog.len(), ROUND_SIZE)
        .ok_or_else(insufficient)?;

    let ids: SmallVec<[EventId; ROUND_SIZE]> = picked
        .into_iter()
        .map(|i| {
            catalog.id_at(i).ok_or(EngineError::IndexOutOfRange {
                index: i,
                len: catalog.len(),
            })
        })
        .collect::<Result<_>>()?;
    let ids = ids.into_inner().map_err(|_| insufficient())?;

    debug!(?ids, "drew round");
    Ok(RoundState::from_ids(ids))
}
