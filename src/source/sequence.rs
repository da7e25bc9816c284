//! Id allocation for one event stream

use crate::domain::EventId;
use chrono::Utc;

/// Hands out strictly increasing event ids for a single stream
///
/// Ids track wall-clock milliseconds, but two events produced within the same
/// millisecond (or after the clock steps backwards) still get distinct,
/// increasing ids: each id is `max(previous + 1, now_ms)`.
#[derive(Debug, Default)]
pub struct EventIdSequence {
    last: Option<i64>,
}

impl EventIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EventId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Allocate the next id given the current clock reading
    pub fn next_at(&mut self, now_millis: i64) -> EventId {
        let id = match self.last {
            Some(last) => now_millis.max(last.saturating_add(1)),
            None => now_millis,
        };
        self.last = Some(id);
        EventId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_id_is_the_clock_reading() {
        let mut sequence = EventIdSequence::new();
        assert_eq!(sequence.next_at(1_000), EventId::new(1_000));
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut sequence = EventIdSequence::new();
        let a = sequence.next_at(1_000);
        let b = sequence.next_at(1_000);
        let c = sequence.next_at(1_000);
        assert_eq!(
            (a, b, c),
            (EventId::new(1_000), EventId::new(1_001), EventId::new(1_002))
        );
    }

    #[test]
    fn test_clock_going_backwards_keeps_increasing() {
        let mut sequence = EventIdSequence::new();
        sequence.next_at(5_000);
        assert_eq!(sequence.next_at(4_000), EventId::new(5_001));
    }

    #[test]
    fn test_clock_jump_forward_is_followed() {
        let mut sequence = EventIdSequence::new();
        sequence.next_at(1_000);
        assert_eq!(sequence.next_at(2_000), EventId::new(2_000));
    }

    #[test]
    fn test_live_clock_ids_are_close_to_now() {
        let mut sequence = EventIdSequence::new();
        let before = Utc::now().timestamp_millis();
        let id = *sequence.next_id().as_ref();
        assert!(id >= before);
    }

    proptest! {
        #[test]
        fn ids_strictly_increase_for_any_clock(readings in proptest::collection::vec(0i64..10_000, 1..200)) {
            let mut sequence = EventIdSequence::new();
            let ids: Vec<EventId> = readings.iter().map(|&ms| sequence.next_at(ms)).collect();

            for pair in ids.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
            for (id, &ms) in ids.iter().zip(&readings) {
                prop_assert!(*id.as_ref() >= ms);
            }
        }
    }
}
