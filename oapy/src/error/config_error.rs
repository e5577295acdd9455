//! Request construction errors.

use thiserror::Error;

/// Errors while turning builder state into a concrete request.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("Base URL cannot be a base: {url}")]
    CannotBeABase {
        /// The rejected URL.
        url: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },

    /// Path template contains invalid parameter syntax.
    #[error("Invalid path template: {message}")]
    InvalidPathTemplate {
        /// Description of the path template error.
        message: String,
    },

    /// A `{name}` placeholder had no value in the supplied params.
    #[error("Missing path parameter: {name}")]
    MissingPathParam {
        /// The placeholder name.
        name: String,
    },

    /// A path parameter rendered a segment the URL would resolve away.
    #[error("Invalid path parameter {name}: {message}")]
    InvalidPathParam {
        /// The placeholder name.
        name: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Params or query did not serialize into a flat name/value mapping.
    #[error("Invalid {kind}: {message}")]
    InvalidParams {
        /// `"path parameters"` or `"query"`.
        kind: &'static str,
        /// Description of the problem.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid path template error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }

    /// Creates a missing path parameter error.
    pub fn missing_path_param(name: impl Into<String>) -> Self {
        Self::MissingPathParam { name: name.into() }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
