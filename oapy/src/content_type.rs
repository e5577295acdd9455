//! Content type markers.
//!
//! A content type is a zero-sized marker carrying its MIME string. Schemas key
//! request bodies and response unions by these markers, so any MIME type can
//! take part in negotiation: define a marker, implement [`ContentType`], and
//! declare bodies against it.
//!
//! Only [`Json`] converts formats by default. Every other marker serializes
//! request bodies on a best-effort basis and passes response text through
//! unchanged; use a custom serializer or one of the [`codec`](crate::codec)
//! deserializers when a real conversion is needed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::error::ValidationError;

/// A MIME type usable as a request or response content type.
///
/// ## Examples
///
/// ```rust
/// use oapy::ContentType;
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Csv;
///
/// impl ContentType for Csv {
///     const MIME: &'static str = "text/csv";
/// }
///
/// let text: String = Csv::deserialize("a,b\n1,2").unwrap();
/// assert_eq!(text, "a,b\n1,2");
/// assert_eq!(Csv::serialize("a,b").unwrap(), "a,b");
/// ```
pub trait ContentType: Copy + Default + Send + Sync + 'static {
    /// The value sent in the `Content-Type` header.
    const MIME: &'static str;

    /// Serializes a request body when the caller supplied no serializer.
    fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, ValidationError> {
        codec::best_effort(value)
    }

    /// Deserializes a response body when the caller supplied no deserializer.
    fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, ValidationError> {
        codec::pass_through(text)
    }
}

/// `application/json`, the default content type in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Json;

impl ContentType for Json {
    const MIME: &'static str = "application/json";

    fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, ValidationError> {
        codec::to_json(value)
    }

    fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, ValidationError> {
        serde_json::from_str(text).map_err(ValidationError::JsonParse)
    }
}

macro_rules! text_content_types {
    ($($(#[$doc:meta])* $marker:ident => $mime:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl ContentType for $marker {
                const MIME: &'static str = $mime;
            }
        )*
    };
}

text_content_types! {
    /// `application/xml`.
    Xml => "application/xml",
    /// `application/yaml`.
    Yaml => "application/yaml",
    /// `text/plain`.
    PlainText => "text/plain",
    /// `text/html`.
    Html => "text/html",
    /// `application/x-www-form-urlencoded`.
    FormUrlEncoded => "application/x-www-form-urlencoded",
    /// `application/octet-stream`.
    OctetStream => "application/octet-stream",
}
