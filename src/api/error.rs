use thiserror::Error;

/// Errors from the movies API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body was not the expected shape.
    #[error("failed to decode trending response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}
