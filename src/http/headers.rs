//! HTTP header constants and well-known paths
//!
//! Shared by the servers and by the stream consumer so both sides agree on
//! the wire contract.

/// Header name for request ID used for tracing and correlation
pub const X_REQUEST_ID: &str = "x-request-id";

/// Content types used on the wire
pub mod content_types {
    pub const JSON: &str = "application/json";
    pub const EVENT_STREAM: &str = "text/event-stream";
}

/// Well-known paths
pub mod paths {
    /// Health check endpoint path
    pub const HEALTH: &str = "/health";

    /// Server-sent event stream
    pub const EVENTS: &str = "/events";

    /// Single event lookup
    pub const EVENT_BY_ID: &str = "/events/{id}";

    /// Reservation listing and batch insert
    pub const RESERVATIONS: &str = "/reservations";

    /// WebSocket greeting handler
    pub const GREETINGS_WS: &str = "/ws/greetings";

    /// Concrete path for one event id
    pub fn event_by_id(id: i64) -> String {
        format!("{EVENTS}/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_constants() {
        assert!(X_REQUEST_ID.starts_with("x-"));
        assert!(paths::HEALTH.starts_with('/'));
        assert!(paths::EVENT_BY_ID.starts_with(paths::EVENTS));
        assert!(paths::GREETINGS_WS.starts_with('/'));
    }

    #[test]
    fn test_event_by_id_path() {
        assert_eq!(paths::event_by_id(-3), "/events/-3");
    }
}
