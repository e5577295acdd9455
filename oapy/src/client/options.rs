//! Request options and the shared request context.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::transport::Transport;

/// Headers, timeout and passthrough options applied to a request.
///
/// Options are layered: client defaults, then the per-call layer collected
/// on the builder, then the options handed to the terminal send. A later
/// layer replaces every value an earlier layer set for the same header name
/// (names compare case-insensitively). Passthrough options are opaque to the
/// builder and reach the transport as [`TransportRequest::passthrough`],
/// merged key by key.
///
/// [`TransportRequest::passthrough`]: crate::transport::TransportRequest::passthrough
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use oapy::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("X-Request-Id", "abc-123")?
///     .timeout(Duration::from_secs(5));
///
/// assert_eq!(options.headers["x-request-id"], "abc-123");
/// assert_eq!(options.timeout, Some(Duration::from_secs(5)));
/// # Ok::<(), oapy::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Headers of this layer.
    pub headers: HeaderMap,
    /// Timeout of this layer; `None` defers to lower layers.
    pub timeout: Option<Duration>,
    /// Transport-specific options of this layer.
    pub passthrough: Map<String, Value>,
}

impl RequestOptions {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any earlier value of the same name.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name or value is not
    /// valid HTTP.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self, ConfigError> {
        let name = name.as_ref();
        let header_name =
            HeaderName::try_from(name).map_err(|e| ConfigError::invalid_header(name, e))?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| ConfigError::invalid_header(name, e))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Merges a whole header map into this layer.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        merge_headers(&mut self.headers, &headers);
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a passthrough option for the transport.
    pub fn passthrough(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.passthrough.insert(name.into(), value.into());
        self
    }

    /// Layers `other` on top of `self`.
    pub fn merge(&mut self, other: RequestOptions) {
        merge_headers(&mut self.headers, &other.headers);
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        self.passthrough.extend(other.passthrough);
    }
}

/// Copies `layer` into `target`.
///
/// Every header name present in `layer` loses all of its values in `target`
/// first, so multi-valued headers are replaced as a whole.
pub fn merge_headers(target: &mut HeaderMap, layer: &HeaderMap) {
    for name in layer.keys() {
        target.remove(name);
        for value in layer.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}

/// Settings shared by every request made through one client.
#[derive(Clone, Default)]
pub struct RequestContext {
    /// Replaces the default `reqwest` transport.
    pub transport: Option<Arc<dyn Transport>>,
    /// Lowest-precedence options layer.
    pub options: RequestOptions,
}

impl RequestContext {
    /// Creates a context using the default transport and no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `transport` for every request.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Uses `options` as the default layer.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("options", &self.options)
            .finish()
    }
}
