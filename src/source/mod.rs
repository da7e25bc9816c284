//! Event source: a paced, never-ending stream of timestamped events
//!
//! Every call to [`EventStreamSource::open_stream`] builds an independent
//! generator with its own timer and id sequence, so concurrent subscribers
//! share nothing. Dropping the stream drops its timer.

pub mod routes;
pub mod sequence;

pub use routes::{router, StreamConnections};
pub use sequence::EventIdSequence;

use crate::domain::{Event, EventId};
use futures_util::Stream;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

/// Default pacing between two events
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Produces events, one per tick
#[derive(Debug, Clone)]
pub struct EventStreamSource {
    tick_interval: Duration,
}

impl EventStreamSource {
    pub fn new(tick_interval: Duration) -> Self {
        // tokio intervals reject a zero period
        Self {
            tick_interval: tick_interval.max(Duration::from_millis(1)),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Open a new infinite event stream
    ///
    /// The first event is produced one tick after the stream is opened, then
    /// one per tick. A consumer that falls behind does not receive a burst of
    /// catch-up events: the next tick is rescheduled a full period after the
    /// late one.
    pub fn open_stream(&self) -> impl Stream<Item = Event> + Send + 'static {
        let period = self.tick_interval;

        async_stream::stream! {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut ids = EventIdSequence::new();

            loop {
                ticker.tick().await;
                let event = Event::now(ids.next_id());
                trace!(event_id = %event.id, "Emitting event");
                yield event;
            }
        }
    }

    /// Echo `id` back as an event stamped with the current time
    pub fn get_by_id(&self, id: EventId) -> Event {
        Event::now(id)
    }
}

impl Default for EventStreamSource {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
