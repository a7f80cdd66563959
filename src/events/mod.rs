//! Historical events and the catalog rounds are drawn from.
//!
//! - `HistoricalEvent`: description, date and link of one event
//! - `EventCatalog`: the immutable set of events for a game
//! - `EventSource`: loads the catalog from bundled JSON data

mod catalog;
mod event;
mod loader;

pub use catalog::EventCatalog;
pub use event::{EventId, HistoricalEvent};
pub use loader::{parse_date, parse_events, EventSource, JsonFileSource, JsonTextSource, LoadPolicy};
