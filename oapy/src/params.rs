//! Flattening of path parameters and query objects into name/value pairs.

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Serializes `value` into name/value pairs.
///
/// `value` must serialize to an object (a struct or a map). Member values are
/// rendered as follows:
///
/// - strings verbatim
/// - numbers and booleans in their JSON form
/// - `null` members are skipped
/// - arrays as their elements joined with `,`
/// - nested objects as JSON text
///
/// ## Errors
///
/// Returns [`ConfigError::InvalidParams`] if `value` is not an object.
pub fn to_pairs<T: Serialize + ?Sized>(
    kind: &'static str,
    value: &T,
) -> Result<Vec<(String, String)>, ConfigError> {
    let value = serde_json::to_value(value).map_err(|e| ConfigError::InvalidParams {
        kind,
        message: e.to_string(),
    })?;

    let members = match value {
        Value::Object(members) => members,
        other => {
            return Err(ConfigError::InvalidParams {
                kind,
                message: format!("expected an object, got {}", type_name(&other)),
            })
        }
    };

    Ok(members
        .into_iter()
        .filter_map(|(name, value)| render(value).map(|text| (name, text)))
        .collect())
}

fn render(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(render)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
