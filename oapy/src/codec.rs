//! Request serializers and response deserializers.
//!
//! Serializers implement [`BodySerializer`]. Any closure from a body reference
//! to text qualifies, so the `to_*` functions here can be handed straight to
//! [`PathSelector::method_with`](crate::PathSelector::method_with).
//!
//! Deserializers implement [`Deserializer`]. They are generic over the target
//! type because one response union decodes a different body type per status.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::Serialize;

use crate::content_type::ContentType;
use crate::error::ValidationError;

/// Turns a request body into the text that goes over the wire.
pub trait BodySerializer<B>: Send + Sync {
    /// Serializes `body`.
    fn serialize(&self, body: &B) -> Result<String, ValidationError>;
}

impl<B, F> BodySerializer<B> for F
where
    F: Fn(&B) -> Result<String, ValidationError> + Send + Sync,
{
    fn serialize(&self, body: &B) -> Result<String, ValidationError> {
        self(body)
    }
}

/// Uses the default rule of the request content type `CT`.
///
/// JSON bodies go through `serde_json`; every other content type falls back
/// to [`best_effort`].
pub struct DefaultSerializer<CT>(PhantomData<fn() -> CT>);

impl<CT> DefaultSerializer<CT> {
    /// Creates the serializer.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<CT> Default for DefaultSerializer<CT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<CT> fmt::Debug for DefaultSerializer<CT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultSerializer")
            .field(&std::any::type_name::<CT>())
            .finish()
    }
}

impl<B: Serialize, CT: ContentType> BodySerializer<B> for DefaultSerializer<CT> {
    fn serialize(&self, body: &B) -> Result<String, ValidationError> {
        CT::serialize(body)
    }
}

/// Serializes a value as JSON text.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ValidationError> {
    serde_json::to_string(value).map_err(ValidationError::JsonSerialize)
}

/// Serializes a value as XML text.
pub fn to_xml<T: Serialize + ?Sized>(value: &T) -> Result<String, ValidationError> {
    quick_xml::se::to_string(value).map_err(|e| ValidationError::XmlSerialize(e.to_string()))
}

/// Serializes a value as YAML text.
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, ValidationError> {
    serde_yaml::to_string(value).map_err(ValidationError::YamlParse)
}

/// Renders a value as text without knowing the target format.
///
/// Strings are sent verbatim. Anything else is rendered in its JSON form, so
/// numbers and booleans become their usual textual representation.
pub fn best_effort<T: Serialize + ?Sized>(value: &T) -> Result<String, ValidationError> {
    match serde_json::to_value(value).map_err(ValidationError::JsonSerialize)? {
        serde_json::Value::String(text) => Ok(text),
        other => Ok(other.to_string()),
    }
}

/// Hands response text over unchanged.
///
/// Only succeeds for body types that deserialize from a bare string.
pub fn pass_through<T: DeserializeOwned>(text: &str) -> Result<T, ValidationError> {
    let deserializer: serde::de::value::StrDeserializer<'_, serde::de::value::Error> =
        text.into_deserializer();
    T::deserialize(deserializer).map_err(|e| ValidationError::ContentTypeMismatch {
        expected: "a text body type".to_string(),
        actual: e.to_string(),
    })
}

/// Turns response text into a typed body.
///
/// The status code is passed along so that a deserializer can treat error
/// responses differently from successful ones.
pub trait Deserializer: Send + Sync {
    /// Decodes `text`, received with `status`, into `T`.
    fn deserialize<T: DeserializeOwned>(&self, text: &str, status: u16)
        -> Result<T, ValidationError>;
}

/// Uses the default rule of the response content type `CT`.
pub struct DefaultDeserializer<CT>(PhantomData<fn() -> CT>);

impl<CT> DefaultDeserializer<CT> {
    /// Creates the deserializer.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<CT> Default for DefaultDeserializer<CT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<CT> fmt::Debug for DefaultDeserializer<CT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultDeserializer")
            .field(&std::any::type_name::<CT>())
            .finish()
    }
}

impl<CT: ContentType> Deserializer for DefaultDeserializer<CT> {
    fn deserialize<T: DeserializeOwned>(
        &self,
        text: &str,
        _status: u16,
    ) -> Result<T, ValidationError> {
        CT::deserialize(text)
    }
}

/// Parses every response as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Deserializer for JsonCodec {
    fn deserialize<T: DeserializeOwned>(
        &self,
        text: &str,
        _status: u16,
    ) -> Result<T, ValidationError> {
        serde_json::from_str(text).map_err(ValidationError::JsonParse)
    }
}

/// Passes every response through as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Deserializer for PassThrough {
    fn deserialize<T: DeserializeOwned>(
        &self,
        text: &str,
        _status: u16,
    ) -> Result<T, ValidationError> {
        pass_through(text)
    }
}

/// Parses every response as XML.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl Deserializer for XmlCodec {
    fn deserialize<T: DeserializeOwned>(
        &self,
        text: &str,
        _status: u16,
    ) -> Result<T, ValidationError> {
        quick_xml::de::from_str(text).map_err(ValidationError::XmlParse)
    }
}

/// Parses every response as YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Deserializer for YamlCodec {
    fn deserialize<T: DeserializeOwned>(
        &self,
        text: &str,
        _status: u16,
    ) -> Result<T, ValidationError> {
        serde_yaml::from_str(text).map_err(ValidationError::YamlParse)
    }
}

/// Adapts a closure that turns `(text, status)` into a JSON value.
///
/// The value is then converted into whatever body type the status declares.
///
/// ## Examples
///
/// ```rust
/// use oapy::codec::{DeserializeFn, Deserializer};
/// use oapy::ValidationError;
///
/// let upper = DeserializeFn::new(
///     |text: &str, _status: u16| -> Result<serde_json::Value, ValidationError> {
///         Ok(serde_json::Value::String(text.to_uppercase()))
///     },
/// );
/// let body: String = upper.deserialize("skippy", 200).unwrap();
/// assert_eq!(body, "SKIPPY");
/// ```
pub struct DeserializeFn<F>(F);

impl<F> DeserializeFn<F>
where
    F: Fn(&str, u16) -> Result<serde_json::Value, ValidationError> + Send + Sync,
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for DeserializeFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeserializeFn(..)")
    }
}

impl<F> Deserializer for DeserializeFn<F>
where
    F: Fn(&str, u16) -> Result<serde_json::Value, ValidationError> + Send + Sync,
{
    fn deserialize<T: DeserializeOwned>(
        &self,
        text: &str,
        status: u16,
    ) -> Result<T, ValidationError> {
        let value = (self.0)(text, status)?;
        serde_json::from_value(value).map_err(ValidationError::JsonParse)
    }
}
