use crate::types::{CustomProperties, Timestamp, UnknownToken};
use thiserror::Error as ThisError;

///
/// Value
///
/// Field-level value exchanged between payloads, the policy-driven engine,
/// and records.
///
/// Null        → the field is explicitly present but carries no value.
/// Enum        → a raw wire token; membership is checked against the policy table.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Enum(String),
    Timestamp(Timestamp),
    Properties(CustomProperties),
}

impl Value {
    /// Short label used in shape-mismatch diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Enum(_) => "enum",
            Self::Timestamp(_) => "timestamp",
            Self::Properties(_) => "properties",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Token carried by an enum value (text is accepted for dynamic payloads).
    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Enum(token) | Self::Text(token) => Some(token.as_str()),
            _ => None,
        }
    }

    /// Build an enum value from a typed wire enum.
    #[must_use]
    pub fn from_enum<E: crate::traits::WireEnum>(value: E) -> Self {
        Self::Enum(value.as_token().to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<CustomProperties> for Value {
    fn from(value: CustomProperties) -> Self {
        Self::Properties(value)
    }
}

///
/// ValueError
///
/// Leaf failure raised while reading a `Value` into a record field.
/// The engine attaches entity kind and field name before surfacing it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("expected {expected} value, found {actual}")]
    Shape {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unknown {enum_name} value '{value}'")]
    UnknownEnum {
        enum_name: &'static str,
        value: String,
    },

    #[error("malformed value: {detail}")]
    Malformed { detail: String },

    #[error("record has no field '{field}'")]
    UnknownField { field: String },
}

impl ValueError {
    pub(crate) const fn shape(expected: &'static str, actual: &Value) -> Self {
        Self::Shape {
            expected,
            actual: actual.label(),
        }
    }

    pub(crate) fn unknown_field(field: &str) -> Self {
        Self::UnknownField {
            field: field.to_string(),
        }
    }
}

impl From<UnknownToken> for ValueError {
    fn from(err: UnknownToken) -> Self {
        Self::UnknownEnum {
            enum_name: err.enum_name,
            value: err.value,
        }
    }
}

impl crate::traits::FieldValue for Option<String> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, |text| Value::Text(text.clone()))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Text(text) => Ok(Some(text)),
            other => Err(ValueError::shape("text", &other)),
        }
    }
}
