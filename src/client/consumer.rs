//! HTTP consumer of the event source

use crate::client::error::Result;
use crate::client::{ClientError, EventSink, SseDecoder};
use crate::config::ClientSettings;
use crate::domain::{Event, EventId};
use crate::http::headers::{content_types, paths};
use crate::infrastructure::log_messages::stream as messages;
use futures_util::{Stream, StreamExt};
use reqwest::{header::ACCEPT, Response, StatusCode};
use std::pin::pin;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// Connects to an event source and reads its events
#[derive(Debug, Clone)]
pub struct EventStreamConsumer {
    client: reqwest::Client,
    base_url: String,
}

impl EventStreamConsumer {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Result<Self> {
        // No overall request timeout: the event stream is meant to stay open
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        Self::new(&settings.base_url, settings.connect_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch a single event by id in one round trip
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_by_id(&self, id: EventId) -> Result<Event> {
        let url = self.url(&paths::event_by_id(id.into_inner()));

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, content_types::JSON)
            .send()
            .await?;
        let response = check_status(response, &url)?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Open the event stream
    ///
    /// Nothing happens until the stream is first polled. The stream is
    /// unbounded and cannot be resumed: it ends only after yielding exactly
    /// one error, either [`ClientError::Connection`] (including the server
    /// closing the stream) or [`ClientError::MalformedElement`]. Dropping it
    /// closes the connection. The body is read one chunk per poll, so a slow
    /// reader is back-pressured by TCP instead of buffering.
    pub fn events(&self) -> impl Stream<Item = Result<Event>> + Send + 'static {
        let url = self.url(paths::EVENTS);
        let request = self
            .client
            .get(&url)
            .header(ACCEPT, content_types::EVENT_STREAM);

        async_stream::try_stream! {
            let response = request.send().await.map_err(ClientError::from)?;
            let response = check_status(response, &url)?;
            info!(url = %url, "{}", messages::CONNECTED);

            let mut body = response.bytes_stream();
            let mut decoder = SseDecoder::new();

            while let Some(chunk) = body.next().await {
                let chunk = chunk.map_err(ClientError::from)?;
                for payload in decoder.decode(&chunk)? {
                    let event: Event = serde_json::from_str(&payload).map_err(ClientError::from)?;
                    yield event;
                }
            }

            Err::<(), _>(ClientError::closed_by_peer(&url))?;
        }
    }

    /// Feed every event into `sink` until the stream fails or `shutdown` is
    /// cancelled
    ///
    /// Returns the number of events delivered when cancelled. After
    /// cancellation no further event reaches the sink, even one that was
    /// already received.
    #[instrument(skip(self, sink, shutdown), fields(base_url = %self.base_url))]
    pub async fn consume_into<S>(&self, sink: &mut S, shutdown: CancellationToken) -> Result<u64>
    where
        S: EventSink + ?Sized,
    {
        let mut events = pin!(self.events());
        let mut delivered = 0u64;

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!(delivered, "{}", messages::CANCELLED);
                    return Ok(delivered);
                }
                next = events.next() => match next {
                    Some(Ok(event)) => {
                        sink.accept(&event);
                        delivered += 1;
                    }
                    Some(Err(error)) => {
                        warn!(delivered, error = %error, "{}", messages::FAILED);
                        return Err(error);
                    }
                    None => return Err(ClientError::closed_by_peer(&self.url(paths::EVENTS))),
                },
            }
        }
    }
}

fn check_status(response: Response, url: &str) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound {
            url: url.to_string(),
        }),
        status => Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        }),
    }
}
