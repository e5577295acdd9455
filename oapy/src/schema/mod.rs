//! Schema projection.
//!
//! A schema is never inspected at runtime. It is a set of trait impls on
//! zero-sized marker types, normally emitted by a generator from an OpenAPI
//! document, and the traits below narrow it to the exact types one operation
//! accepts and returns:
//!
//! | Derivation | Expressed as |
//! |---|---|
//! | paths of a schema | implementors of [`Path<S>`] |
//! | methods of a path | `M` such that `P: Operation<M>` |
//! | request content types | `CT` such that `P: RequestBody<M, CT>` |
//! | response content types | `CT` such that `P: ResponseUnion<M, CT>` |
//! | default content type | [`DefaultContentTypeIn`], [`DefaultContentTypeOut`] |
//! | path parameters | [`ParamsIn`] |
//! | query string | [`QueryIn`] |
//! | request body | [`RequestOf`] |
//! | status codes | [`Operation::STATUSES`] / [`status_codes`] |
//! | response body of one status | [`ResultOf`] |
//! | response union | [`ResponseOf`] |
//!
//! "Not applicable" is spelled [`Never`]. A builder step whose argument type
//! is `Never` can never be called.
//!
//! ## Examples
//!
//! ```rust
//! use oapy::{responses, Get, Json, Never, Operation, Path, ResponseUnion, Schema};
//! use oapy::{ParamsIn, ResponseOf, ResultOf};
//!
//! struct Store;
//! impl Schema for Store {}
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Inventory;
//!
//! impl Path<Store> for Inventory {
//!     const TEMPLATE: &'static str = "/store/inventory";
//! }
//!
//! impl Operation<Get> for Inventory {
//!     const STATUSES: &'static [u16] = &[200];
//!     type Params = Never;
//!     type Query = Never;
//!     type RequestContentType = Json;
//!     type ResponseContentType = Json;
//! }
//!
//! responses! {
//!     #[derive(Debug, PartialEq)]
//!     enum InventoryResponse {
//!         200 => Ok(std::collections::HashMap<String, i32>),
//!     }
//! }
//!
//! impl ResponseUnion<Get, Json> for Inventory {
//!     type Union = InventoryResponse;
//! }
//!
//! fn counts(response: ResponseOf<Inventory, Get, Json>) -> ResultOf<Inventory, Get, Json, 200> {
//!     match response {
//!         InventoryResponse::Ok(counts) => counts,
//!     }
//! }
//!
//! fn no_params(never: ParamsIn<Inventory, Get>) -> ! {
//!     match never {}
//! }
//! # let _ = (counts, no_params);
//! ```
//!
//! A body whose shape does not match the schema does not compile:
//!
//! ```rust,compile_fail
//! use oapy::{Json, Never, Operation, Path, Post, RequestBody, RequestOf, Schema};
//!
//! struct Store;
//! impl Schema for Store {}
//!
//! struct Order;
//! impl Operation<Post> for Order {
//!     const STATUSES: &'static [u16] = &[200];
//!     type Params = Never;
//!     type Query = Never;
//!     type RequestContentType = Json;
//!     type ResponseContentType = Json;
//! }
//! impl RequestBody<Post, Json> for Order {
//!     type Body = u64;
//! }
//!
//! let body: RequestOf<Order, Post, Json> = "not a number";
//! ```
//!
//! Every response union of an operation covers the operation's full status
//! set. A status without content under the union's content type is still
//! listed, as a status-only variant. A union that drops one is rejected when
//! the operation is used:
//!
//! ```rust,compile_fail
//! use oapy::{responses, status_codes, Get, Never, Operation, PlainText, ResponseUnion};
//!
//! struct Inventory;
//! impl Operation<Get> for Inventory {
//!     const STATUSES: &'static [u16] = &[200, 404];
//!     type Params = Never;
//!     type Query = Never;
//!     type RequestContentType = PlainText;
//!     type ResponseContentType = PlainText;
//! }
//!
//! responses! {
//!     enum InventoryText {
//!         200 => Ok(String),
//!     }
//! }
//!
//! impl ResponseUnion<Get, PlainText> for Inventory {
//!     type Union = InventoryText;
//! }
//!
//! let _ = status_codes::<Inventory, Get, PlainText>();
//! ```

mod responses;

use serde::{Serialize, Serializer};

use crate::content_type::ContentType;
use crate::method::HttpMethod;

pub use responses::{Responses, StatusBody};

/// Marker for one API schema (one OpenAPI document).
pub trait Schema: Send + Sync + 'static {}

/// A path key of schema `S`.
///
/// The template may contain `{name}` placeholders that are filled from the
/// operation's path parameters.
pub trait Path<S: Schema>: Send + Sync + 'static {
    /// The path template, e.g. `/pet/{petId}`.
    const TEMPLATE: &'static str;
}

/// The operation a path declares for method marker `M`.
///
/// Implemented once per declared method; a method without an impl cannot be
/// selected.
pub trait Operation<M> {
    /// Every status code declared under `responses`, independent of content
    /// type.
    const STATUSES: &'static [u16];

    /// Shape of `parameters.path`, or [`Never`].
    type Params: Serialize + Send;

    /// Shape of `parameters.query`, or [`Never`].
    type Query: Serialize + Send;

    /// Content type chosen when the caller does not pick one.
    ///
    /// `Json` whenever the operation declares `application/json`, or has no
    /// request body at all.
    type RequestContentType: ContentType;

    /// Response content type chosen when the caller does not pick one.
    type ResponseContentType: ContentType;
}

/// The body an operation accepts under content type `CT`.
pub trait RequestBody<M, CT>: Operation<M> {
    /// Shape of `requestBody.content[CT]`.
    type Body: Send;
}

/// The response union an operation produces under content type `CT`.
pub trait ResponseUnion<M, CT>: Operation<M> {
    /// One variant per declared status code.
    type Union: Responses;

    /// Evaluates to `()` when `Union` lists exactly [`Operation::STATUSES`];
    /// fails const evaluation otherwise.
    #[doc(hidden)]
    const COVERS_STATUSES: () = assert!(
        same_statuses(
            <Self as Operation<M>>::STATUSES,
            <Self::Union as Responses>::STATUSES,
        ),
        "response union does not list exactly the operation's status codes"
    );
}

/// Set equality of two status lists.
#[doc(hidden)]
pub const fn same_statuses(declared: &[u16], listed: &[u16]) -> bool {
    contains_all(declared, listed) && contains_all(listed, declared)
}

const fn contains_all(haystack: &[u16], needles: &[u16]) -> bool {
    let mut i = 0;
    while i < needles.len() {
        let mut j = 0;
        let mut found = false;
        while j < haystack.len() {
            if haystack[j] == needles[i] {
                found = true;
            }
            j += 1;
        }
        if !found {
            return false;
        }
        i += 1;
    }
    true
}

/// The uninhabited "not applicable" type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Never {}

impl Serialize for Never {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

/// Path parameters of an operation.
pub type ParamsIn<P, M> = <P as Operation<M>>::Params;

/// Query string of an operation.
pub type QueryIn<P, M> = <P as Operation<M>>::Query;

/// Default request content type of an operation.
pub type DefaultContentTypeIn<P, M> = <P as Operation<M>>::RequestContentType;

/// Default response content type of an operation.
pub type DefaultContentTypeOut<P, M> = <P as Operation<M>>::ResponseContentType;

/// Request body of an operation under a content type.
pub type RequestOf<P, M, CT> = <P as RequestBody<M, CT>>::Body;

/// Response union of an operation under a content type.
pub type ResponseOf<P, M, CT> = <P as ResponseUnion<M, CT>>::Union;

/// Response body declared for one status code under a content type.
pub type ResultOf<P, M, CT, const STATUS: u16> =
    <ResponseOf<P, M, CT> as StatusBody<STATUS>>::Data;

/// Every status code an operation declares.
///
/// Naming `CT` also checks that the union under `CT` covers the same set.
pub fn status_codes<P, M, CT>() -> &'static [u16]
where
    P: ResponseUnion<M, CT>,
    M: HttpMethod,
    CT: ContentType,
{
    let () = <P as ResponseUnion<M, CT>>::COVERS_STATUSES;
    <P as Operation<M>>::STATUSES
}
