//! Error type for remote directory requests.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable from the page's point of view. Item-level
//! errors are swallowed into placeholder records by `api::fetch_directory`;
//! only index-level errors reach the page state as a retryable error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, offline).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// A body or embedded payload was not valid JSON.
    #[error("invalid JSON: {0}")]
    Decode(String),

    /// The index response lacked `data.keys`.
    #[error("index response is missing data.keys")]
    MissingKeys,

    /// An entry of `data.keys` was not a `{ name: string }` descriptor.
    #[error("malformed key descriptor at position {index}")]
    MalformedKey { index: usize },

    /// A detail response lacked the string `data` payload.
    #[error("detail response is missing its data payload")]
    MissingPayload,

    /// The embedded payload decoded to `null`.
    #[error("detail payload decoded to null")]
    NullRecord,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
