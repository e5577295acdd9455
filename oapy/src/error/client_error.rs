//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the transport layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A caller-supplied transport failed.
    #[error("Transport failed: {0}")]
    Transport(String),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },
}

impl ClientError {
    /// Creates a transport error from any displayable failure.
    pub fn transport(message: impl std::fmt::Display) -> Self {
        Self::Transport(message.to_string())
    }

    /// Returns `true` if repeating the request might succeed.
    ///
    /// The builder never retries on its own; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Transport(_) => false,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
        }
    }

}
