//! Event stream consumer
//!
//! Reads the event source's `text/event-stream` endpoint over HTTP and hands
//! every decoded [`crate::domain::Event`] to an [`EventSink`], in arrival
//! order. There is no retry: a dropped connection ends consumption with
//! [`ClientError::Connection`] and the caller decides what to do next.

pub mod consumer;
pub mod error;
pub mod sink;
pub mod sse;

pub use consumer::EventStreamConsumer;
pub use error::ClientError;
pub use sink::{EventSink, WriterSink};
pub use sse::SseDecoder;
