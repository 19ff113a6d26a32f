//! Error types for mr-radar

use thiserror::Error;

/// Errors surfaced by configuration loading, the GitLab API client, and the
/// review-queue orchestration.
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection-level failure talking to the API
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API returned HTTP status {status}")]
    Http {
        /// The HTTP status code of the response
        status: u16,
    },

    /// The API response body was not well-formed JSON of the expected shape
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invariant violation that should not occur in practice
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
