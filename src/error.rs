//! Unified SDK error types.

use crate::chart::ChartError;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// HTTP failures keep their own message so callers see e.g.
    /// `API request failed with status 500` verbatim.
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The transport failed before a response arrived (DNS, connect, timeout).
    #[error("{0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A response arrived with a non-2xx status.
    #[error("API request failed with status {status}")]
    Status { status: u16, body: String },

    /// The body did not match the expected wire shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Wrap any transport error, keeping its message untouched.
    pub fn network(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        HttpError::Network(err.into())
    }

    /// Status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        HttpError::Network(Box::new(err))
    }
}
