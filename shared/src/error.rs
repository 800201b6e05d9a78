//! Error type produced by catalog clients.

use thiserror::Error;

/// A failed catalog call: transport error, non-success status or an
/// undecodable body. Views never branch on the cause, so only the message is
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Build an error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The request never produced a response.
    pub fn network(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Network error: {detail}"))
    }

    /// The service answered with a non-success status.
    pub fn http(status: u16) -> Self {
        Self::new(format!("HTTP error: {status}"))
    }

    /// The response body did not match the expected shape.
    pub fn parse(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Parse error: {detail}"))
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }
}
