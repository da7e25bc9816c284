//! Log message constants for infrastructure components
//!
//! This module centralizes log messages used by the servers and the
//! consumer so that wording stays consistent across binaries.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING_EVENT_SERVER: &str = "Starting event source server";
    pub const STARTING_RESERVATION_SERVER: &str = "Starting reservation server";
    pub const STARTING_CONSUMER: &str = "Starting event stream consumer";
    pub const LISTENING: &str = "Listening for connections";
    pub const SHUTDOWN_REQUESTED: &str = "Shutdown requested";
    pub const STOPPED: &str = "Server stopped";
}

/// Database-related log messages
pub mod database {
    pub const CONNECTING: &str = "Connecting to database";
    pub const HEALTH_CHECK_FAILED: &str = "Database health check failed";
    pub const MIGRATION_STARTED: &str = "Running database migrations";
    pub const MIGRATION_COMPLETED: &str = "Database migrations completed successfully";
    pub const USING_IN_MEMORY: &str = "Using in-memory reservation storage";
}

/// Event stream subscription messages
pub mod stream {
    pub const OPENED: &str = "Event stream opened";
    pub const CLOSED: &str = "Event stream closed";
    pub const CONNECTED: &str = "Connected to event stream";
    pub const CANCELLED: &str = "Event stream consumption cancelled";
    pub const FAILED: &str = "Event stream failed";
}

/// Reservation service messages
pub mod reservations {
    pub const SAVING_BATCH: &str = "Saving reservation batch";
    pub const BATCH_REJECTED: &str = "Reservation batch rejected";
    pub const BATCH_SAVED: &str = "Reservation batch saved";
    pub const SEEDING: &str = "Seeding sample reservations";
    pub const STORED: &str = "Stored reservation";
}

/// Greeting socket messages
pub mod greetings {
    pub const SOCKET_OPENED: &str = "Greeting socket opened";
    pub const SOCKET_CLOSED: &str = "Greeting socket closed";
    pub const GREETING_REQUESTED: &str = "Greeting requested";
}
