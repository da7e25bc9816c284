//! Prints the event stream, or a single event when given an id:
//!
//! ```text
//! event-pulse-client        # follow /events until Ctrl-C
//! event-pulse-client 42     # fetch /events/42
//! ```

use anyhow::{Context, Result};
use event_pulse::application::cancel_on_signal;
use event_pulse::client::{EventStreamConsumer, WriterSink};
use event_pulse::config::Settings;
use event_pulse::domain::EventId;
use event_pulse::infrastructure::init_tracing;
use event_pulse::infrastructure::log_messages::application as messages;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings.logging);

    let requested_id = std::env::args()
        .nth(1)
        .map(|raw| raw.parse::<i64>().with_context(|| format!("invalid event id: {raw}")))
        .transpose()?;

    let consumer = EventStreamConsumer::from_settings(&settings.client)?;
    info!(base_url = %consumer.base_url(), "{}", messages::STARTING_CONSUMER);

    match requested_id {
        Some(id) => {
            let event = consumer.fetch_by_id(EventId::new(id)).await?;
            println!("{event}");
        }
        None => {
            let shutdown = CancellationToken::new();
            cancel_on_signal(shutdown.clone());

            let mut sink = WriterSink::stdout();
            let delivered = consumer.consume_into(&mut sink, shutdown).await?;
            info!(delivered, "Consumer finished");
        }
    }

    Ok(())
}
