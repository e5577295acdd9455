//! Request execution with tracing instrumentation.
//!
//! The terminal operations of [`RequestBuilder`] live here: each performs
//! exactly one transport call and decodes the response into the operation's
//! response union.

use tracing::{debug, instrument, warn, Span};

use super::builder::RequestBuilder;
use super::options::RequestOptions;
use crate::codec::{DefaultDeserializer, Deserializer};
use crate::content_type::ContentType;
use crate::error::{ApiError, ValidationError};
use crate::method::HttpMethod;
use crate::schema::{
    DefaultContentTypeOut, Operation, Path, ResponseOf, ResponseUnion, Responses, Schema,
};

fn otel_status(status: u16) -> &'static str {
    match status {
        200..=299 => "OK",
        500..=599 => "ERROR",
        _ => "UNSET",
    }
}

impl<S, P, M, CT, Ser> RequestBuilder<S, P, M, CT, Ser>
where
    S: Schema,
    P: Path<S> + Operation<M> + ResponseUnion<M, DefaultContentTypeOut<P, M>>,
    M: HttpMethod,
    CT: ContentType,
{
    /// Sends the request and decodes the response with the operation's
    /// default response content type.
    ///
    /// ## Errors
    ///
    /// Returns an error if the request cannot be built, the transport fails,
    /// or the response does not decode into the declared union.
    pub async fn send(self) -> Result<ResponseOf<P, M, DefaultContentTypeOut<P, M>>, ApiError> {
        self.send_with(RequestOptions::default()).await
    }

    /// Like [`send`](Self::send), with a final options layer.
    ///
    /// ## Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_with(
        self,
        options: RequestOptions,
    ) -> Result<ResponseOf<P, M, DefaultContentTypeOut<P, M>>, ApiError> {
        self.send_as(options, <DefaultContentTypeOut<P, M> as Default>::default())
            .await
    }
}

impl<S, P, M, CT, Ser> RequestBuilder<S, P, M, CT, Ser>
where
    S: Schema,
    P: Path<S> + Operation<M>,
    M: HttpMethod,
    CT: ContentType,
{
    /// Sends the request and decodes the response union declared for
    /// response content type `RCT`.
    ///
    /// ## Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_as<RCT>(
        self,
        options: RequestOptions,
        content_type: RCT,
    ) -> Result<ResponseOf<P, M, RCT>, ApiError>
    where
        P: ResponseUnion<M, RCT>,
        RCT: ContentType,
    {
        self.send_deserialize(options, content_type, DefaultDeserializer::<RCT>::new())
            .await
    }

    /// Sends the request and decodes every declared body with `deserializer`.
    ///
    /// The deserializer receives the response text and status code; its
    /// result is placed in the variant declared for that status.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use oapy::codec::XmlCodec;
    ///
    /// let response = client
    ///     .path(PetCollection)
    ///     .method_with(Put, Xml, to_xml::<Pet>)
    ///     .body(pet)
    ///     .send_deserialize(RequestOptions::new(), Xml, XmlCodec)
    ///     .await?;
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The path, query or headers are invalid
    /// - The body failed to serialize
    /// - The transport fails (network, timeout, etc.)
    /// - The status is not declared, or a declared body does not decode
    #[instrument(
        name = "api_request",
        skip_all,
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send_deserialize<RCT, D>(
        self,
        options: RequestOptions,
        _content_type: RCT,
        deserializer: D,
    ) -> Result<ResponseOf<P, M, RCT>, ApiError>
    where
        P: ResponseUnion<M, RCT>,
        RCT: ContentType,
        D: Deserializer,
    {
        let () = <P as ResponseUnion<M, RCT>>::COVERS_STATUSES;
        Span::current().record("http.method", M::METHOD.to_string().as_str());

        let (transport, request) = self.prepare(options)?;
        Span::current().record("http.url", request.url.as_str());
        debug!(
            path = P::TEMPLATE,
            content_type = CT::MIME,
            has_body = request.body.is_some(),
            "dispatching request"
        );

        let response = transport.fetch(request).await?;
        let status = response.status();
        Span::current().record("http.status_code", status);
        Span::current().record("otel.status_code", otel_status(status));

        let text = response.text().await?;

        match <ResponseOf<P, M, RCT> as Responses>::decode(status, text, &deserializer) {
            Ok(decoded) => {
                debug!(status, accept = RCT::MIME, "decoded response");
                Ok(decoded)
            }
            Err(ValidationError::UndeclaredStatus { status, body }) => {
                let declared = <P as Operation<M>>::STATUSES;
                warn!(
                    status,
                    declared = ?declared,
                    "response status is not declared for this operation"
                );
                Err(ValidationError::UndeclaredStatus { status, body }.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
