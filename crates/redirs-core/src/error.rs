//! Error types for the fetch → decode → filter pipeline.
//!
//! Kept as concrete enums so callers can tell an HTTP status failure apart
//! from a transport failure before it is logged.

use thiserror::Error;

/// Failure while requesting the redirects resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status.
    #[error("HTTP error {0}")]
    Status(u32),
    /// Curl reported an error (DNS, connection refused, timeout, ...).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// The resource URL could not be built from the page location.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Status code carried by a non-success response, if that is what failed.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Any failure of a search run. All of them end in the terminal handler.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Body was not a JSON array of entry objects.
    #[error("invalid redirects payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// Entry field cannot be read or searched as text (absent, null
    /// element, or a value with no substring search).
    #[error("entry {index}: `{field}` is not searchable")]
    MalformedEntry { index: usize, field: &'static str },
    /// Blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
