//! HTTP surface of the event source
//!
//! - `GET /events/{id}`: one event as JSON
//! - `GET /events`: `text/event-stream`, one `data:` frame per tick
//!
//! Open streams end when the shutdown token is cancelled, so a graceful
//! shutdown closes every subscription instead of waiting on it forever.

use crate::domain::{Event, EventId};
use crate::http::headers::paths;
use crate::infrastructure::log_messages::stream as messages;
use crate::source::EventStreamSource;
use axum::{
    extract::{Path, State},
    response::sse::{Event as SseEvent, Sse},
    routing::get,
    Json, Router,
};
use futures_util::{Stream, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
struct SourceState {
    source: Arc<EventStreamSource>,
    shutdown: CancellationToken,
    connections: StreamConnections,
}

/// Counts the event streams currently held open by peers
#[derive(Debug, Clone, Default)]
pub struct StreamConnections {
    active: Arc<AtomicUsize>,
}

impl StreamConnections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    fn open(&self) -> StreamConnection {
        let id = Uuid::now_v7();
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        info!(connection_id = %id, active, "{}", messages::OPENED);
        StreamConnection {
            id,
            delivered: 0,
            active: Arc::clone(&self.active),
        }
    }
}

/// Build the router for the event source endpoints
pub fn router(
    source: Arc<EventStreamSource>,
    shutdown: CancellationToken,
    connections: StreamConnections,
) -> Router {
    Router::new()
        .route(paths::EVENTS, get(stream_events))
        .route(paths::EVENT_BY_ID, get(event_by_id))
        .route(paths::HEALTH, get(health_handler))
        .with_state(SourceState {
            source,
            shutdown,
            connections,
        })
}

async fn event_by_id(State(state): State<SourceState>, Path(id): Path<i64>) -> Json<Event> {
    let event = state.source.get_by_id(EventId::new(id));
    debug!(event_id = %event.id, "Serving event by id");
    Json(event)
}

async fn stream_events(
    State(state): State<SourceState>,
) -> Sse<impl Stream<Item = Result<SseEvent, axum::Error>>> {
    let mut connection = state.connections.open();

    let frames = state
        .source
        .open_stream()
        .take_until(state.shutdown.cancelled_owned())
        .map(move |event| {
            // Capture the whole guard, not just its counter
            let connection = &mut connection;
            connection.delivered += 1;
            SseEvent::default().json_data(event)
        });

    Sse::new(frames)
}

/// Health check handler
async fn health_handler() -> &'static str {
    "OK"
}

/// Logs the lifetime of one stream subscription
///
/// axum drops the response stream when the peer goes away, which drops this
/// guard together with the stream's timer.
struct StreamConnection {
    id: Uuid,
    delivered: u64,
    active: Arc<AtomicUsize>,
}

impl Drop for StreamConnection {
    fn drop(&mut self) {
        let active = self.active.fetch_sub(1, Ordering::SeqCst) - 1;
        info!(
            connection_id = %self.id,
            delivered = self.delivered,
            active,
            "{}",
            messages::CLOSED
        );
    }
}
