//! Client-level error type.

use thiserror::Error;

/// Errors returned by a [`crate::ScannerApi`] implementation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, malformed body).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with the status the flow expects.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The API key contains bytes that cannot go in a header.
    #[error("invalid API key header: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}
