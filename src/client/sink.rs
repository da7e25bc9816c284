//! Terminal consumers of received events

use crate::domain::Event;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Receives each event synchronously, in arrival order
pub trait EventSink {
    fn accept(&mut self, event: &Event);
}

impl<F> EventSink for F
where
    F: FnMut(&Event),
{
    fn accept(&mut self, event: &Event) {
        self(event)
    }
}

/// Writes one line per event in its display form
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn accept(&mut self, event: &Event) {
        if let Err(e) = writeln!(self.writer, "{event}").and_then(|_| self.writer.flush()) {
            warn!(event_id = %event.id, error = %e, "Failed to write event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventId;
    use chrono::{TimeZone, Utc};

    fn event(id: i64) -> Event {
        Event::new(
            EventId::new(id),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_writer_sink_writes_one_line_per_event() {
        let mut sink = WriterSink::new(Vec::new());
        sink.accept(&event(1));
        sink.accept(&event(2));

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "Event(id=1, when=2024-01-01T00:00:00.000Z)\nEvent(id=2, when=2024-01-01T00:00:00.000Z)\n"
        );
    }

    #[test]
    fn test_closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: &Event| seen.push(event.id);
            sink.accept(&event(5));
        }
        assert_eq!(seen, vec![EventId::new(5)]);
    }
}
