//! Loading the event catalog from bundled JSON data.
//!
//! The resource is a JSON array of records:
//!
//! ```json
//! [
//!   { "Event": "First crewed Moon landing", "Date": "1969-07-20T20:17:00Z", "Link": "https://..." },
//!   { "Event": "Fall of the Berlin Wall",   "Date": "1989-11-09",           "Link": "https://..." }
//! ]
//! ```
//!
//! `Date` is either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date
//! (taken as midnight UTC).
//!
//! Records that are missing a field or carry an unparseable date are
//! dropped under `LoadPolicy::Lenient` and fail the whole load under
//! `LoadPolicy::Strict`. A missing resource, or one that is not a JSON
//! array, is always `DataUnavailable`.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use super::catalog::EventCatalog;
use super::event::HistoricalEvent;
use crate::core::{EngineError, Result};

/// How malformed records are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Drop malformed records and keep loading.
    #[default]
    Lenient,
    /// Fail on the first malformed record.
    Strict,
}

/// Something that can produce the full set of events for a game.
///
/// Called once, before a session is created.
pub trait EventSource {
    /// Load every event.
    ///
    /// Fails with `DataUnavailable` if the backing resource is missing
    /// or malformed.
    fn load(&self) -> Result<Vec<HistoricalEvent>>;

    /// Load every event into a catalog.
    fn load_catalog(&self) -> Result<EventCatalog> {
        self.load().and_then(EventCatalog::try_new)
    }
}

/// Events read from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
    policy: LoadPolicy,
}

impl JsonFileSource {
    /// Read from `path` with the lenient policy.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    /// Set the malformed-record policy.
    #[must_use]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl EventSource for JsonFileSource {
    fn load(&self) -> Result<Vec<HistoricalEvent>> {
        let text = std::fs::read_to_string(&self.path).map_err(|err| {
            EngineError::data_unavailable(format!("cannot read {}: {}", self.path.display(), err))
        })?;
        parse_events(&text, self.policy)
    }
}

/// Events parsed from an in-memory JSON document.
#[derive(Clone, Debug)]
pub struct JsonTextSource {
    text: String,
    policy: LoadPolicy,
}

impl JsonTextSource {
    /// Parse `text` with the lenient policy.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            policy: LoadPolicy::default(),
        }
    }

    /// Set the malformed-record policy.
    #[must_use]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl EventSource for JsonTextSource {
    fn load(&self) -> Result<Vec<HistoricalEvent>> {
        parse_events(&self.text, self.policy)
    }
}

#[derive(Deserialize)]
struct EventRecord {
    #[serde(rename = "Event")]
    description: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Link")]
    link: String,
}

/// Parse a JSON array of event records.
pub fn parse_events(text: &str, policy: LoadPolicy) -> Result<Vec<HistoricalEvent>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(text)
        .map_err(|err| EngineError::data_unavailable(format!("expected a JSON array of events: {}", err)))?;

    let total = records.len();
    let mut events = Vec::with_capacity(total);

    for (index, value) in records.into_iter().enumerate() {
        match convert_record(value) {
            Ok(event) => events.push(event),
            Err(reason) => match policy {
                LoadPolicy::Strict => {
                    return Err(EngineError::data_unavailable(format!("record {}: {}", index, reason)));
                }
                LoadPolicy::Lenient => {
                    warn!(index, %reason, "dropping malformed event record");
                }
            },
        }
    }

    info!(loaded = events.len(), dropped = total - events.len(), "event data loaded");
    Ok(events)
}

fn convert_record(value: serde_json::Value) -> std::result::Result<HistoricalEvent, String> {
    let record: EventRecord = serde_json::from_value(value).map_err(|err| err.to_string())?;
    let date = parse_date(&record.date).ok_or_else(|| format!("unparseable date {:?}", record.date))?;
    Ok(HistoricalEvent::new(record.description, date, record.link))
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = day.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = r#"[
        { "Event": "Moon landing", "Date": "1969-07-20T20:17:00Z", "Link": "https://example.org/moon" },
        { "Event": "No date", "Link": "https://example.org/none" },
        { "Event": "Berlin Wall falls", "Date": "1989-11-09", "Link": "https://example.org/wall" },
        { "Event": "Bad date", "Date": "sometime in spring", "Link": "https://example.org/bad" },
        42
    ]"#;

    #[test]
    fn test_parse_date_formats() {
        let ts = parse_date("1969-07-20T20:17:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap());

        let offset = parse_date("1969-07-20T22:17:00+02:00").unwrap();
        assert_eq!(offset, ts);

        let day = parse_date("1989-11-09").unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(1989, 11, 9, 0, 0, 0).unwrap());

        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("1989-13-40").is_none());
    }

    #[test]
    fn test_lenient_drops_malformed_records() {
        let events = parse_events(MIXED, LoadPolicy::Lenient).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].description, "Moon landing");
        assert_eq!(events[1].description, "Berlin Wall falls");
        assert_eq!(events[1].link, "https://example.org/wall");
    }

    #[test]
    fn test_strict_rejects_first_malformed_record() {
        let err = parse_events(MIXED, LoadPolicy::Strict).unwrap_err();
        match err {
            EngineError::DataUnavailable { reason } => assert!(reason.starts_with("record 1:")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_not_an_array_is_unavailable() {
        let err = parse_events(r#"{ "Event": "x" }"#, LoadPolicy::Lenient).unwrap_err();
        assert!(matches!(err, EngineError::DataUnavailable { .. }));

        let err = parse_events("not json", LoadPolicy::Lenient).unwrap_err();
        assert!(matches!(err, EngineError::DataUnavailable { .. }));
    }

    #[test]
    fn test_empty_array_loads_nothing() {
        let events = parse_events("[]", LoadPolicy::Strict).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_text_source_builds_catalog() {
        let catalog = JsonTextSource::new(MIXED).load_catalog().unwrap();
        assert_eq!(catalog.len(), 2);

        let strict = JsonTextSource::new(MIXED).with_policy(LoadPolicy::Strict);
        assert!(strict.load_catalog().is_err());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let source = JsonFileSource::new("/definitely/not/here/events.json");
        let err = source.load().unwrap_err();
        match err {
            EngineError::DataUnavailable { reason } => assert!(reason.contains("events.json")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
