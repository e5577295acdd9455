//! The typed client and request builder.
//!
//! - [`Client`] - Entry point bound to one schema and base URL
//! - [`PathSelector`] - A chosen path, waiting for a method
//! - [`RequestBuilder`] - Collects params, query, body and options, then sends
//! - [`RequestOptions`] / [`RequestContext`] - Layered headers, timeout and transport

mod builder;
mod executor;
mod options;

pub use builder::{Client, ClientBuilder, PathSelector, RequestBuilder};
pub use options::{merge_headers, RequestContext, RequestOptions};
