use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A name to greet, as received over the greeting socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, From)]
#[display("{name}")]
pub struct GreetingRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, From)]
#[display("{message}")]
pub struct GreetingResponse {
    pub message: String,
}
