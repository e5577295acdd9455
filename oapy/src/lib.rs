//! Statically typed HTTP client for OpenAPI schemas.
//!
//! The `oapy` crate turns a schema, expressed as trait impls on marker
//! types, into a request builder whose every step is checked at compile
//! time: which paths exist, which methods a path declares, which content
//! types a method accepts and returns, and the exact shape of params, query,
//! body and every declared response.
//!
//! ## Features
//!
//! - **Schema projection**: traits and named aliases narrow a schema to one
//!   operation ([`ParamsIn`], [`QueryIn`], [`RequestOf`], [`ResponseOf`], ...)
//! - **Chainable builder**: collect params, query, body and headers, then
//!   perform exactly one network call
//! - **Discriminated responses**: a [`responses!`] enum per operation, one
//!   variant per declared status code
//! - **Content negotiation**: JSON by default, any MIME type via
//!   [`ContentType`] markers and custom (de)serializers
//! - **Pluggable transport**: `reqwest` by default, any [`Transport`] impl
//!   otherwise
//!
//! ## Example
//!
//! ```rust,no_run
//! use oapy::{responses, Client, Get, Json, Never, Operation, Path, ResponseUnion, Schema};
//! use serde::{Deserialize, Serialize};
//!
//! struct Petstore;
//! impl Schema for Petstore {}
//!
//! #[derive(Debug, Clone, Copy)]
//! struct PetById;
//!
//! impl Path<Petstore> for PetById {
//!     const TEMPLATE: &'static str = "/pet/{petId}";
//! }
//!
//! #[derive(Serialize)]
//! struct PetId {
//!     #[serde(rename = "petId")]
//!     pet_id: u64,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Pet {
//!     name: String,
//! }
//!
//! impl Operation<Get> for PetById {
//!     const STATUSES: &'static [u16] = &[200, 404];
//!     type Params = PetId;
//!     type Query = Never;
//!     type RequestContentType = Json;
//!     type ResponseContentType = Json;
//! }
//!
//! responses! {
//!     #[derive(Debug)]
//!     enum GetPet {
//!         200 => Found(Pet),
//!         404 => NotFound,
//!     }
//! }
//!
//! impl ResponseUnion<Get, Json> for PetById {
//!     type Union = GetPet;
//! }
//!
//! # async fn run() -> Result<(), oapy::ApiError> {
//! let client = Client::<Petstore>::parse("https://petstore3.swagger.io/api/v3")?;
//!
//! match client.path(PetById).method(Get).params(PetId { pet_id: 10 }).send().await? {
//!     GetPet::Found(pet) => println!("found {}", pet.name),
//!     GetPet::NotFound => println!("no such pet"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod content_type;
pub mod error;
pub mod method;
pub mod params;
pub mod path_template;
pub mod schema;
pub mod transport;

// Re-exports for convenience
pub use client::{
    Client, ClientBuilder, PathSelector, RequestBuilder, RequestContext, RequestOptions,
};
pub use content_type::{ContentType, FormUrlEncoded, Html, Json, OctetStream, PlainText, Xml, Yaml};
pub use error::{ApiError, ClientError, ConfigError, ValidationError};
pub use method::{Delete, Get, Head, HttpMethod, Options, Patch, Post, Put, RestMethod, Trace};
pub use schema::{
    status_codes, DefaultContentTypeIn, DefaultContentTypeOut, Never, Operation, ParamsIn, Path,
    QueryIn, RequestBody, RequestOf, ResponseOf, ResponseUnion, Responses, ResultOf, Schema,
    StatusBody,
};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
