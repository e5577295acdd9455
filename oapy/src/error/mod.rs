//! Layered error types.
//!
//! - [`ApiError`] - Top-level error returned by every fallible operation
//! - [`ClientError`] - Transport and network failures
//! - [`ValidationError`] - Body (de)serialization and status decoding failures
//! - [`ConfigError`] - Base URL, header and path template problems

mod api_error;
mod client_error;
mod config_error;
mod validation_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use validation_error::ValidationError;
