//! Infrastructure for Event Pulse
//!
//! Database access, tracing setup and centralized log messages.

pub mod database;
pub mod log_messages;
pub mod telemetry;

pub use database::*;
pub use telemetry::init_tracing;
