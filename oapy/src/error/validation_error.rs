//! Body serialization and response decoding errors.

use thiserror::Error;

/// Errors while serializing a request body or decoding a response.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// JSON serialization of a request body failed.
    #[error("JSON serialize error: {0}")]
    JsonSerialize(serde_json::Error),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// XML parsing failed.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::DeError),

    /// XML serialization of a request body failed.
    #[error("XML serialize error: {0}")]
    XmlSerialize(String),

    /// The transport returned a status the response union does not declare.
    #[error("Status {status} is not declared for this operation")]
    UndeclaredStatus {
        /// The status code received.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The passthrough deserializer was asked for a non-text body type.
    #[error("Unexpected content type: expected {expected}, got {actual}")]
    ContentTypeMismatch {
        /// The expected content type.
        expected: String,
        /// What was actually available.
        actual: String,
    },
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::JsonParse(_) | Self::YamlParse(_) | Self::XmlParse(_)
        )
    }

    /// Returns `true` if the body could not be produced for the request.
    pub fn is_serialize_error(&self) -> bool {
        matches!(self, Self::JsonSerialize(_) | Self::XmlSerialize(_))
    }
}
