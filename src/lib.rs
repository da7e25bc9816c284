//! Event Pulse - reactive HTTP patterns in three small services
//!
//! - an event source that pushes one timestamped [`domain::Event`] per tick
//!   over server-sent events,
//! - a consumer that reads that stream and hands each event to a sink,
//! - a reservation service with a transactional batch insert and a
//!   WebSocket greeting handler.

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod greeting;
pub mod http;
pub mod infrastructure;
pub mod reservation;
pub mod source;

pub use error::{Error, Result};
