//! Event catalog for id lookup.
//!
//! The `EventCatalog` holds every event known to a game. It is built once
//! from loaded data and never changes afterwards; clones share storage.

use im::Vector;

use super::event::{EventId, HistoricalEvent};
use crate::core::{EngineError, Result};

/// Immutable set of events a session draws its rounds from.
///
/// Backed by a persistent vector, so cloning a catalog into a session is O(1).
///
/// ## Example
///
/// ```
/// use bout_time::events::{EventCatalog, EventId, HistoricalEvent};
/// use chrono::{TimeZone, Utc};
///
/// let catalog = EventCatalog::new(vec![HistoricalEvent::new(
///     "Magna Carta sealed",
///     Utc.with_ymd_and_hms(1215, 6, 15, 0, 0, 0).unwrap(),
///     "https://example.org/magna-carta",
/// )]);
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(EventId::new(0)).unwrap().description, "Magna Carta sealed");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventCatalog {
    events: Vector<HistoricalEvent>,
}

impl EventCatalog {
    /// Most events a catalog can hold; ids are `u32`.
    pub const MAX_EVENTS: usize = u32::MAX as usize;

    /// Build a catalog; ids follow input order.
    ///
    /// Events past `MAX_EVENTS` are dropped. Use `try_new` to reject them.
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = HistoricalEvent>) -> Self {
        Self {
            events: events.into_iter().take(Self::MAX_EVENTS).collect(),
        }
    }

    /// Build a catalog, failing with `DataUnavailable` if there are more
    /// than `MAX_EVENTS` events.
    pub fn try_new(events: impl IntoIterator<Item = HistoricalEvent>) -> Result<Self> {
        let events: Vector<HistoricalEvent> = events.into_iter().collect();
        if events.len() > Self::MAX_EVENTS {
            return Err(EngineError::DataUnavailable {
                reason: format!(
                    "{} events exceed the catalog limit of {}",
                    events.len(),
                    Self::MAX_EVENTS
                ),
            });
        }
        Ok(Self { events })
    }

    /// The id of the event at `index`, if there is one.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<EventId> {
        if index >= self.events.len() {
            return None;
        }
        u32::try_from(index).ok().map(EventId::new)
    }

    /// Get an event by ID.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&HistoricalEvent> {
        self.events.get(id.index())
    }

    /// Check if an ID refers to an event in this catalog.
    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        id.index() < self.events.len()
    }

    /// Get the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over all events with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (EventId, &HistoricalEvent)> {
        (0u32..)
            .zip(self.events.iter())
            .map(|(i, event)| (EventId::new(i), event))
    }
}

impl FromIterator<HistoricalEvent> for EventCatalog {
    fn from_iter<I: IntoIterator<Item = HistoricalEvent>>(iter: I) -> Self {
        Self::new(iter)
    }
}
