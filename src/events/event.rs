//! Historical events - the static data a round is made of.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of an event inside its `EventCatalog`.
///
/// Rounds hold ids rather than copies of the events they show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl EventId {
    /// Create a new event ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID as a catalog index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// A dated historical event.
///
/// `date` is only used for ordering; how it is shown is up to the host.
///
/// ## Example
///
/// ```
/// use bout_time::events::HistoricalEvent;
/// use chrono::{TimeZone, Utc};
///
/// let moon = HistoricalEvent::new(
///     "First crewed Moon landing",
///     Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap(),
///     "https://en.wikipedia.org/wiki/Apollo_11",
/// );
/// assert_eq!(moon.link, "https://en.wikipedia.org/wiki/Apollo_11");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// Text shown to the player.
    pub description: String,

    /// When the event happened.
    pub date: DateTime<Utc>,

    /// URI for further reading.
    pub link: String,
}

impl HistoricalEvent {
    /// Create a new event.
    pub fn new(description: impl Into<String>, date: DateTime<Utc>, link: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            date,
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_id() {
        let id = EventId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(id.index(), 5);
        assert_eq!(format!("{}", id), "Event(5)");
    }

    #[test]
    fn test_event_serde() {
        let event = HistoricalEvent::new(
            "Fall of the Berlin Wall",
            Utc.with_ymd_and_hms(1989, 11, 9, 0, 0, 0).unwrap(),
            "https://example.org/berlin",
        );

        let json = serde_json::to_string(&event).unwrap();
        let back: HistoricalEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
