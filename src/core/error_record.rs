use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::core::error::ServiceObjectError;

/// One structured failure reported by a service object.
///
/// Serializes to a flat JSON object: `message` always, `code` and `field`
/// when present, followed by any free-form `details` keys. `details` never
/// holds one of the [`RESERVED_KEYS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(flatten)]
    details: Map<String, Value>,
}

/// Keys owned by the named fields of [`ErrorRecord`]
pub const RESERVED_KEYS: [&str; 3] = ["message", "code", "field"];

impl ErrorRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            field: None,
            details: Map::new(),
        }
    }

    /// Attach a machine-readable error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the input field the error refers to
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach an extra key to the serialized record.
    ///
    /// Reserved keys are ignored; use `with_code` / `with_field` for those.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !RESERVED_KEYS.contains(&key.as_str()) {
            self.details.insert(key, value.into());
        }
        self
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<&str> for ErrorRecord {
    fn from(message: &str) -> Self {
        ErrorRecord::new(message)
    }
}

impl From<String> for ErrorRecord {
    fn from(message: String) -> Self {
        ErrorRecord::new(message)
    }
}

impl TryFrom<Value> for ErrorRecord {
    type Error = ServiceObjectError;

    /// Accepts only JSON objects carrying a string `message`, with `code`
    /// and `field` either strings, null or absent
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let map = match &value {
            Value::Object(map) => map,
            other => return Err(ServiceObjectError::invalid_error_type(json_type_name(other))),
        };

        if !map.get("message").is_some_and(Value::is_string) {
            return Err(ServiceObjectError::invalid_error_type(
                "object without a string 'message'",
            ));
        }

        for key in ["code", "field"] {
            match map.get(key) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(ServiceObjectError::invalid_error_type(format!(
                        "object with a non-string '{}' of type '{}'",
                        key,
                        json_type_name(other)
                    )))
                }
            }
        }

        Ok(serde_json::from_value(value)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
