//! Identifiers for events and for the requests that flow through the services

use nutype::nutype;
use uuid::Uuid;

/// Identifier carried by every [`crate::domain::Event`]
///
/// On a stream, ids are allocated by [`crate::source::EventIdSequence`];
/// on a point lookup the caller picks the id.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
    AsRef
))]
pub struct EventId(i64);

/// Correlates the log lines of one unit of work, passed explicitly down the
/// call chain
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn generate() -> Self {
        // Uuid::now_v7() is time-ordered, so ids sort by creation
        Self::new(Uuid::now_v7())
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_serializes_as_bare_integer() {
        let id = EventId::new(1_700_000_000_123);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1700000000123");
    }

    #[test]
    fn event_ids_order_numerically() {
        assert!(EventId::new(2) > EventId::new(1));
        assert!(EventId::new(-1) < EventId::new(0));
    }

    #[test]
    fn correlation_id_generation_is_unique() {
        let id1 = CorrelationId::generate();
        let id2 = CorrelationId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_ref().get_version_num(), 7);
    }
}
