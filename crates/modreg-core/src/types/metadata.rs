use crate::{
    traits::FieldValue,
    types::Timestamp,
    value::{Value, ValueError},
};
use candid::CandidType;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// MetadataValue
///
/// Typed value stored under a custom property key.
/// The wire form is internally tagged by `metadataType`.
///

#[derive(CandidType, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "metadataType")]
pub enum MetadataValue {
    #[serde(rename = "MetadataStringValue")]
    String {
        #[serde(rename = "string_value")]
        value: String,
    },

    #[serde(rename = "MetadataIntValue")]
    Int {
        #[serde(rename = "int_value", with = "int_string")]
        value: i64,
    },

    #[serde(rename = "MetadataDoubleValue")]
    Double {
        #[serde(rename = "double_value")]
        value: f64,
    },

    #[serde(rename = "MetadataBoolValue")]
    Bool {
        #[serde(rename = "bool_value")]
        value: bool,
    },

    #[serde(rename = "MetadataStructValue")]
    Struct {
        #[serde(rename = "struct_value", with = "serde_bytes")]
        value: Vec<u8>,
    },

    #[serde(rename = "MetadataProtoValue")]
    Proto {
        #[serde(rename = "type")]
        type_name: String,
        #[serde(rename = "proto_value", with = "serde_bytes")]
        value: Vec<u8>,
    },

    #[serde(rename = "MetadataTimestampValue")]
    Timestamp {
        #[serde(rename = "timestamp_value", with = "timestamp_string")]
        value: Timestamp,
    },
}

impl MetadataValue {
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Int { value }
    }

    #[must_use]
    pub const fn double(value: f64) -> Self {
        Self::Double { value }
    }

    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::Bool { value }
    }

    #[must_use]
    pub const fn timestamp(value: Timestamp) -> Self {
        Self::Timestamp { value }
    }

    /// Wire tag for this variant.
    #[must_use]
    pub const fn metadata_type(&self) -> &'static str {
        match self {
            Self::String { .. } => "MetadataStringValue",
            Self::Int { .. } => "MetadataIntValue",
            Self::Double { .. } => "MetadataDoubleValue",
            Self::Bool { .. } => "MetadataBoolValue",
            Self::Struct { .. } => "MetadataStructValue",
            Self::Proto { .. } => "MetadataProtoValue",
            Self::Timestamp { .. } => "MetadataTimestampValue",
        }
    }
}

///
/// CustomProperties
///
/// Client-defined metadata attached to an entity.
/// Keys are kept in sorted order so equal maps compare and serialize equally.
///

#[derive(
    CandidType, Clone, Debug, Default, Deref, Deserialize, IntoIterator, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct CustomProperties(BTreeMap<String, MetadataValue>);

impl CustomProperties {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a value, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) -> Option<MetadataValue> {
        self.0.insert(key.into(), value)
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: MetadataValue) -> Self {
        self.insert(key, value);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, MetadataValue)> for CustomProperties {
    fn from_iter<I: IntoIterator<Item = (K, MetadataValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FieldValue for Option<CustomProperties> {
    fn to_value(&self) -> Value {
        self.as_ref()
            .map_or(Value::Null, |props| Value::Properties(props.clone()))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Properties(props) => Ok(Some(props)),
            other => Err(ValueError::shape("properties", &other)),
        }
    }
}

// Integers travel as decimal strings; plain JSON numbers are accepted on input.
mod int_string {
    use serde::{Deserializer, Serializer, de};
    use std::fmt;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        struct IntVisitor;

        impl de::Visitor<'_> for IntVisitor {
            type Value = i64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a decimal integer string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
                i64::try_from(v).map_err(|_| E::custom(format!("integer out of range: {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
                v.trim()
                    .parse::<i64>()
                    .map_err(|err| E::custom(format!("invalid integer '{v}': {err}")))
            }
        }

        deserializer.deserialize_any(IntVisitor)
    }
}

// Timestamps travel as millisecond strings; RFC 3339 and plain numbers are accepted on input.
mod timestamp_string {
    use crate::types::Timestamp;
    use serde::{Deserializer, Serializer, de};
    use std::fmt;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(
        value: &Timestamp,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Timestamp, D::Error> {
        struct TimestampVisitor;

        impl de::Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("milliseconds since epoch or an RFC 3339 timestamp")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
                Ok(Timestamp::from_millis(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
                u64::try_from(v)
                    .map(Timestamp::from_millis)
                    .map_err(|_| E::custom(format!("timestamp before epoch: {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
                Timestamp::parse_flexible(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(TimestampVisitor)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_form_is_tagged_by_metadata_type() {
        let props = CustomProperties::new()
            .with("owner", MetadataValue::string("team-a"))
            .with("epochs", MetadataValue::int(12));

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            json!({
                "epochs": { "metadataType": "MetadataIntValue", "int_value": "12" },
                "owner": { "metadataType": "MetadataStringValue", "string_value": "team-a" },
            })
        );
    }

    #[test]
    fn int_and_timestamp_accept_string_or_number() {
        let parsed: MetadataValue = serde_json::from_value(json!({
            "metadataType": "MetadataIntValue",
            "int_value": 7,
        }))
        .unwrap();
        assert_eq!(parsed, MetadataValue::int(7));

        let parsed: MetadataValue = serde_json::from_value(json!({
            "metadataType": "MetadataTimestampValue",
            "timestamp_value": "1970-01-01T00:00:02Z",
        }))
        .unwrap();
        assert_eq!(parsed, MetadataValue::timestamp(Timestamp::from_millis(2_000)));
    }

    #[test]
    fn unknown_metadata_type_is_rejected() {
        let parsed = serde_json::from_value::<MetadataValue>(json!({
            "metadataType": "MetadataFloatValue",
            "float_value": 1.0,
        }));
        assert!(parsed.is_err());
    }
}
