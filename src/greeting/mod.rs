//! Greetings pushed over a WebSocket

pub mod service;
pub mod ws;

pub use service::GreetingService;
pub use ws::router;
