//! Top-level API error type.

use super::{ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Top-level error type for all request operations.
///
/// Nothing is retried or translated: a transport failure or a malformed body
/// ends the single `send` call it happened in and is handed to the caller.
///
/// ## Examples
///
/// ```rust,ignore
/// use oapy::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Client(e) => eprintln!("Network error: {e}"),
///         ApiError::Validation(e) => eprintln!("Invalid body: {e}"),
///         ApiError::Config(e) => eprintln!("Bad request setup: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport errors (network, timeout, connection failures).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Serialization and deserialization errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request construction errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
