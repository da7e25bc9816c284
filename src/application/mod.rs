//! Application wiring
//!
//! Each server is built from [`Settings`](crate::config::Settings), binds its
//! listener eagerly so the bound address is known before it runs, and stops
//! when its shutdown token is cancelled.

pub mod event_server;
pub mod reservation_server;
pub mod server;

pub use event_server::EventServer;
pub use reservation_server::ReservationServer;
pub use server::{cancel_on_signal, shutdown_signal};
