use anyhow::Result;
use event_pulse::application::{cancel_on_signal, EventServer};
use event_pulse::config::Settings;
use event_pulse::infrastructure::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings.logging);

    let server = EventServer::build(&settings).await?;
    cancel_on_signal(server.shutdown_token());
    server.run().await?;

    Ok(())
}
