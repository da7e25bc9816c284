//! The timestamped record pushed by the event source

use crate::domain::EventId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One timestamped event
///
/// Encoded on the wire as `{"id": <integer>, "when": "<RFC 3339>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub when: DateTime<Utc>,
}

impl Event {
    pub fn new(id: EventId, when: DateTime<Utc>) -> Self {
        Self { id, when }
    }

    /// Stamp `id` with the current time
    pub fn now(id: EventId) -> Self {
        Self::new(id, Utc::now())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event(id={}, when={})",
            self.id,
            self.when.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Event {
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap();
        Event::new(EventId::new(42), when)
    }

    #[test]
    fn test_wire_format_uses_id_and_when() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 42, "when": "2024-03-01T12:30:45Z" })
        );
    }

    #[test]
    fn test_decodes_offset_timestamps() {
        let event: Event =
            serde_json::from_str(r#"{"id":42,"when":"2024-03-01T14:30:45+02:00"}"#).unwrap();
        assert_eq!(event, sample());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        assert!(serde_json::from_str::<Event>(r#"{"id":42}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Event(id=42, when=2024-03-01T12:30:45.000Z)"
        );
    }

    #[test]
    fn test_now_stamps_current_time() {
        let before = Utc::now();
        let event = Event::now(EventId::new(7));
        let after = Utc::now();

        assert_eq!(event.id, EventId::new(7));
        assert!(event.when >= before && event.when <= after);
    }
}
