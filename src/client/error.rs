use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures surfaced by the event stream consumer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport failure: refused, reset, timed out, or closed by the peer
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {url}")]
    NotFound { url: String },

    /// An element that does not decode into an event
    #[error("Malformed stream element: {reason}")]
    MalformedElement { reason: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

impl ClientError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedElement {
            reason: reason.into(),
        }
    }

    /// The peer ended a stream that never ends on its own
    pub fn closed_by_peer(url: &str) -> Self {
        Self::Connection(format!("stream from {url} closed by peer"))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::malformed(err.to_string())
        } else {
            ClientError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::malformed(err.to_string())
    }
}
