//! The transport contract.
//!
//! A transport takes a fully built request and returns the status code plus
//! the complete response text. [`ReqwestTransport`] is used unless the client
//! or a request context supplies another one.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::method::RestMethod;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Boxed future type for async trait methods.
///
/// This type alias provides dyn-compatible async method returns.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A request ready to go over the wire.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Base URL joined with the rendered path, plus the query string.
    pub url: Url,
    /// The HTTP method.
    pub method: RestMethod,
    /// Merged headers, including `Content-Type`.
    pub headers: HeaderMap,
    /// Serialized body. Always `None` for methods without a body.
    pub body: Option<String>,
    /// Per-request timeout overriding the transport's own.
    pub timeout: Option<Duration>,
    /// Merged caller-defined options, forwarded untouched.
    pub passthrough: Map<String, Value>,
}

/// A received response.
pub trait TransportResponse: Send {
    /// The HTTP status code.
    fn status(&self) -> u16;

    /// Reads the whole body as text.
    fn text(self: Box<Self>) -> BoxFuture<'static, Result<String, ClientError>>;
}

/// Anything that can perform an HTTP exchange.
///
/// Implementors must be `Send + Sync` so one transport can be shared by every
/// clone of a client.
///
/// ## Examples
///
/// ```rust
/// use oapy::transport::{BoxFuture, Transport, TransportRequest, TransportResponse};
/// use oapy::ClientError;
///
/// struct Teapot;
///
/// struct TeapotResponse;
///
/// impl TransportResponse for TeapotResponse {
///     fn status(&self) -> u16 {
///         418
///     }
///
///     fn text(self: Box<Self>) -> BoxFuture<'static, Result<String, ClientError>> {
///         Box::pin(async { Ok("short and stout".to_string()) })
///     }
/// }
///
/// impl Transport for Teapot {
///     fn fetch(
///         &self,
///         _request: TransportRequest,
///     ) -> BoxFuture<'_, Result<Box<dyn TransportResponse>, ClientError>> {
///         Box::pin(async { Ok(Box::new(TeapotResponse) as Box<dyn TransportResponse>) })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends `request` and resolves once the response head has arrived.
    fn fetch(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<Box<dyn TransportResponse>, ClientError>>;
}

/// The default transport, backed by a pooled `reqwest::Client`.
///
/// Passthrough options are not interpreted; configure the underlying client
/// with [`from_client`](Self::from_client) instead.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given overall timeout.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn fetch(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<Box<dyn TransportResponse>, ClientError>> {
        Box::pin(async move {
            if !request.passthrough.is_empty() {
                let ignored: Vec<&str> = request.passthrough.keys().map(String::as_str).collect();
                debug!(?ignored, "reqwest transport ignores passthrough options");
            }
            let mut builder = self
                .client
                .request(request.method.to_reqwest(), request.url)
                .headers(request.headers);
            if let Some(timeout) = request.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| {
                match (e.is_timeout(), request.timeout) {
                    (true, Some(timeout)) => ClientError::Timeout {
                        duration_ms: timeout.as_millis() as u64,
                    },
                    _ => ClientError::Request(e),
                }
            })?;
            Ok(Box::new(ReqwestResponse(response)) as Box<dyn TransportResponse>)
        })
    }
}

struct ReqwestResponse(reqwest::Response);

impl TransportResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    fn text(self: Box<Self>) -> BoxFuture<'static, Result<String, ClientError>> {
        Box::pin(async move { self.0.text().await.map_err(ClientError::Request) })
    }
}
