//! Error types for the JSON fetcher.

use thiserror::Error;

/// Errors that can occur while fetching a JSON document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {status_text}")]
    Transport { status: u16, status_text: String },

    /// The request never produced a response (DNS, refused connection, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
