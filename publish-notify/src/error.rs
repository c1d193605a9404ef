//! Application-wide error types.

use thiserror::Error;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webhook rejected notification: {status} - {body}")]
    Webhook { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn webhook(status: u16, body: impl Into<String>) -> Self {
        Self::Webhook {
            status,
            body: body.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Whether this error came from the outbound call to the messaging endpoint.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Webhook { .. })
    }
}
