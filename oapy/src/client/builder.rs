//! The client entry point and the chainable request builder.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use url::Url;

use super::options::{merge_headers, RequestContext, RequestOptions};
use crate::codec::{BodySerializer, DefaultSerializer};
use crate::content_type::ContentType;
use crate::error::{ApiError, ConfigError, ValidationError};
use crate::method::HttpMethod;
use crate::params;
use crate::path_template;
use crate::schema::{
    DefaultContentTypeIn, Operation, ParamsIn, Path, QueryIn, RequestBody, RequestOf, Schema,
};
use crate::transport::{ReqwestTransport, Transport, TransportRequest, DEFAULT_TIMEOUT_SECS};

/// Builder for configuring a [`Client`].
pub struct ClientBuilder<S> {
    base_url: Url,
    transport: Option<Arc<dyn Transport>>,
    defaults: RequestOptions,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> ClientBuilder<S> {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            transport: None,
            defaults: RequestOptions::default(),
            _schema: PhantomData,
        }
    }

    /// Uses `transport` instead of the default `reqwest` transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = Client::<Petstore>::builder(base_url)
    ///     .default_header("X-Api-Key", "special-key")?
    ///     .build()?;
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        self.defaults = self.defaults.header(name, value)?;
        Ok(self)
    }

    /// Sets the default per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.defaults.timeout = Some(timeout);
        self
    }

    /// Builds the [`Client`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL cannot carry a path or the default
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client<S>, ApiError> {
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase {
                url: self.base_url.to_string(),
            }
            .into());
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(Duration::from_secs(
                DEFAULT_TIMEOUT_SECS,
            ))?) as Arc<dyn Transport>,
        };

        Ok(Client {
            base_url: self.base_url,
            transport,
            defaults: self.defaults,
            _schema: PhantomData,
        })
    }
}

impl<S> fmt::Debug for ClientBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url.as_str())
            .field("custom_transport", &self.transport.is_some())
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// Typed HTTP client for one schema.
///
/// The client only holds the base URL, the transport and the default options
/// layer, so cloning it is cheap. Every request starts with [`Client::path`].
///
/// ## Examples
///
/// ```rust,ignore
/// let client = Client::<Petstore>::parse("https://petstore3.swagger.io/api/v3")?;
///
/// let response = client
///     .path(PetById)
///     .method(Get)
///     .params(PetIdParams { pet_id: 10 })
///     .send()
///     .await?;
///
/// match response {
///     GetPetResponse::Ok(pet) => println!("found {}", pet.name),
///     GetPetResponse::NotFound => println!("no such pet"),
///     other => println!("status {}", other.status()),
/// }
/// ```
pub struct Client<S> {
    pub(super) base_url: Url,
    pub(super) transport: Arc<dyn Transport>,
    pub(super) defaults: RequestOptions,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> Client<S> {
    /// Creates a new builder for configuring a client.
    ///
    /// ## Arguments
    ///
    /// * `base_url` - The base URL every path is appended to.
    pub fn builder(base_url: Url) -> ClientBuilder<S> {
        ClientBuilder::new(base_url)
    }

    /// Creates a client with the default transport and no default options.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL cannot carry a path or the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Parses `base_url` and creates a client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL does not parse, or for the reasons listed
    /// on [`Client::new`].
    pub fn parse(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(ConfigError::from)?;
        Self::new(base_url)
    }

    /// Creates a client from a request context.
    ///
    /// ## Errors
    ///
    /// Returns an error for the reasons listed on [`Client::new`].
    pub fn with_context(base_url: Url, context: RequestContext) -> Result<Self, ApiError> {
        let mut builder = Self::builder(base_url);
        builder.transport = context.transport;
        builder.defaults = context.options;
        builder.build()
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the default options layer.
    pub fn defaults(&self) -> &RequestOptions {
        &self.defaults
    }

    /// Selects a path of the schema.
    pub fn path<P: Path<S>>(&self, _path: P) -> PathSelector<S, P> {
        PathSelector {
            client: self.clone(),
            _path: PhantomData,
        }
    }
}

impl<S> Clone for Client<S> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
            defaults: self.defaults.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S> fmt::Debug for Client<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// A path chosen from the schema, waiting for a method.
///
/// Only methods the path declares can be selected:
///
/// ```rust,compile_fail
/// use oapy::{Client, Get, Json, Never, Operation, Path, Post, Schema};
///
/// struct Api;
/// impl Schema for Api {}
///
/// struct Health;
/// impl Path<Api> for Health {
///     const TEMPLATE: &'static str = "/health";
/// }
/// impl Operation<Get> for Health {
///     const STATUSES: &'static [u16] = &[200];
///     type Params = Never;
///     type Query = Never;
///     type RequestContentType = Json;
///     type ResponseContentType = Json;
/// }
///
/// let client = Client::<Api>::parse("http://localhost:8080").unwrap();
/// let _ = client.path(Health).method(Post);
/// ```
///
/// and a body can only be set when the operation declares one:
///
/// ```rust,compile_fail
/// use oapy::{Client, Get, Json, Never, Operation, Path, Schema};
///
/// struct Api;
/// impl Schema for Api {}
///
/// struct Health;
/// impl Path<Api> for Health {
///     const TEMPLATE: &'static str = "/health";
/// }
/// impl Operation<Get> for Health {
///     const STATUSES: &'static [u16] = &[200];
///     type Params = Never;
///     type Query = Never;
///     type RequestContentType = Json;
///     type ResponseContentType = Json;
/// }
///
/// let client = Client::<Api>::parse("http://localhost:8080").unwrap();
/// let _ = client.path(Health).method(Get).body("ping".to_string());
/// ```
pub struct PathSelector<S, P> {
    client: Client<S>,
    _path: PhantomData<fn() -> P>,
}

impl<S: Schema, P: Path<S>> PathSelector<S, P> {
    /// Selects method `M` with its default request content type.
    pub fn method<M>(
        self,
        _method: M,
    ) -> RequestBuilder<S, P, M, DefaultContentTypeIn<P, M>, DefaultSerializer<DefaultContentTypeIn<P, M>>>
    where
        M: HttpMethod,
        P: Operation<M>,
    {
        RequestBuilder::new(self.client, DefaultSerializer::new())
    }

    /// Selects method `M` with request content type `CT`.
    ///
    /// Only content types the operation declares a body for are accepted.
    pub fn method_as<M, CT>(
        self,
        _method: M,
        _content_type: CT,
    ) -> RequestBuilder<S, P, M, CT, DefaultSerializer<CT>>
    where
        M: HttpMethod,
        CT: ContentType,
        P: RequestBody<M, CT>,
    {
        RequestBuilder::new(self.client, DefaultSerializer::new())
    }

    /// Selects method `M` with request content type `CT` and a custom body
    /// serializer.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use oapy::codec::to_xml;
    ///
    /// let response = client
    ///     .path(PetCollection)
    ///     .method_with(Put, Xml, to_xml::<Pet>)
    ///     .body(pet)
    ///     .send_as(RequestOptions::new(), Xml)
    ///     .await?;
    /// ```
    pub fn method_with<M, CT, F>(
        self,
        _method: M,
        _content_type: CT,
        serializer: F,
    ) -> RequestBuilder<S, P, M, CT, F>
    where
        M: HttpMethod,
        CT: ContentType,
        P: RequestBody<M, CT>,
        F: BodySerializer<RequestOf<P, M, CT>>,
    {
        RequestBuilder::new(self.client, serializer)
    }
}

impl<S, P> fmt::Debug for PathSelector<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSelector")
            .field("path", &std::any::type_name::<P>())
            .finish()
    }
}

/// Collects params, query and body for one operation.
///
/// Each step consumes the builder and returns it, so a builder is used for
/// exactly one request. Repeating a step replaces the earlier value. Nothing
/// touches the network until one of the `send` operations.
pub struct RequestBuilder<S, P, M, CT, Ser>
where
    P: Operation<M>,
{
    pub(super) client: Client<S>,
    pub(super) params: Option<ParamsIn<P, M>>,
    pub(super) query: Option<QueryIn<P, M>>,
    pub(super) body: Option<Result<String, ValidationError>>,
    pub(super) options: RequestOptions,
    serializer: Ser,
    _marker: PhantomData<fn() -> (M, CT)>,
}

impl<S, P, M, CT, Ser> RequestBuilder<S, P, M, CT, Ser>
where
    S: Schema,
    P: Path<S> + Operation<M>,
    M: HttpMethod,
    CT: ContentType,
{
    fn new(client: Client<S>, serializer: Ser) -> Self {
        Self {
            client,
            params: None,
            query: None,
            body: None,
            options: RequestOptions::default(),
            serializer,
            _marker: PhantomData,
        }
    }

    /// Sets the path parameters.
    pub fn params(mut self, params: ParamsIn<P, M>) -> Self {
        self.params = Some(params);
        self
    }

    /// Sets the query.
    pub fn query(mut self, query: QueryIn<P, M>) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets the request body.
    ///
    /// The body is serialized right away; a serialization failure is reported
    /// by the send operation. Methods that carry no body (GET, DELETE, HEAD,
    /// OPTIONS, TRACE) never transmit it.
    pub fn body(mut self, body: RequestOf<P, M, CT>) -> Self
    where
        P: RequestBody<M, CT>,
        Ser: BodySerializer<RequestOf<P, M, CT>>,
    {
        self.body = Some(self.serializer.serialize(&body));
        self
    }

    /// Layers `options` onto this request's per-call options.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options.merge(options);
        self
    }

    /// Sets one per-call header.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self, ApiError> {
        self.options = self.options.header(name, value)?;
        Ok(self)
    }

    /// Turns the collected state into a transport request.
    pub(super) fn prepare(
        self,
        send_options: RequestOptions,
    ) -> Result<(Arc<dyn Transport>, TransportRequest), ApiError> {
        let path_values = match &self.params {
            Some(params) => params::to_pairs("path parameters", params)?,
            None => Vec::new(),
        };
        let segments = path_template::render(P::TEMPLATE, &path_values)?;
        let mut url = path_template::join(&self.client.base_url, &segments)?;

        if let Some(query) = &self.query {
            let pairs = params::to_pairs("query", query)?;
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        let mut headers = HeaderMap::new();
        let content_type = HeaderValue::from_str(CT::MIME)
            .map_err(|e| ConfigError::invalid_header(CONTENT_TYPE.as_str(), e))?;
        headers.insert(CONTENT_TYPE, content_type);
        merge_headers(&mut headers, &self.client.defaults.headers);
        merge_headers(&mut headers, &self.options.headers);
        merge_headers(&mut headers, &send_options.headers);

        let timeout = send_options
            .timeout
            .or(self.options.timeout)
            .or(self.client.defaults.timeout);

        let mut passthrough = self.client.defaults.passthrough.clone();
        passthrough.extend(self.options.passthrough);
        passthrough.extend(send_options.passthrough);

        let body = if M::METHOD.has_body() {
            self.body.transpose()?
        } else {
            None
        };

        let request = TransportRequest {
            url,
            method: M::METHOD,
            headers,
            body,
            timeout,
            passthrough,
        };
        Ok((self.client.transport, request))
    }
}

impl<S, P, M, CT, Ser> fmt::Debug for RequestBuilder<S, P, M, CT, Ser>
where
    P: Operation<M>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("path", &std::any::type_name::<P>())
            .field("method", &std::any::type_name::<M>())
            .field("content_type", &std::any::type_name::<CT>())
            .field("has_params", &self.params.is_some())
            .field("has_query", &self.query.is_some())
            .field("has_body", &self.body.is_some())
            .field("options", &self.options)
            .finish()
    }
}
