//! Error types for querydash-http.

use thiserror::Error;

/// Error returned by the request and serialization helpers.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Serializing to or parsing from JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A query string component did not decode to UTF-8.
    #[error("invalid percent-encoding in {0:?}")]
    InvalidEncoding(String),
}
