//! Custom-property rules.
//!
//! The `customProperties` field is overlaid like every other editable field:
//! when present in an update payload the whole map replaces the stored map,
//! with no per-key merge. A present empty map clears the stored map.
//! Incoming maps are validated here before they reach a record.

use crate::types::{CustomProperties, MetadataValue};
use thiserror::Error as ThisError;

///
/// PropertyError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PropertyError {
    #[error("custom property key must not be blank")]
    BlankKey,

    #[error("custom property '{key}' holds a non-finite double")]
    NonFiniteDouble { key: String },

    #[error("custom property '{key}' has a proto value without a type name")]
    UntypedProto { key: String },
}

/// Validate an incoming custom-property map.
pub fn validate(props: &CustomProperties) -> Result<(), PropertyError> {
    for (key, value) in props.iter() {
        if key.trim().is_empty() {
            return Err(PropertyError::BlankKey);
        }

        match value {
            MetadataValue::Double { value } if !value.is_finite() => {
                return Err(PropertyError::NonFiniteDouble { key: key.clone() });
            }
            MetadataValue::Proto { type_name, .. } if type_name.trim().is_empty() => {
                return Err(PropertyError::UntypedProto { key: key.clone() });
            }
            _ => {}
        }
    }

    Ok(())
}

/// Next value of a `customProperties` field.
///
/// Absent `incoming` keeps `current`; present `incoming` is validated and
/// replaces it wholesale.
pub fn overlay_properties(
    current: Option<&CustomProperties>,
    incoming: Option<CustomProperties>,
) -> Result<Option<CustomProperties>, PropertyError> {
    match incoming {
        None => Ok(current.cloned()),
        Some(props) => {
            validate(&props)?;
            Ok(Some(props))
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_value_type() {
        let props = CustomProperties::new()
            .with("s", MetadataValue::string("x"))
            .with("i", MetadataValue::int(-4))
            .with("d", MetadataValue::double(0.5))
            .with("b", MetadataValue::bool(true))
            .with("blob", MetadataValue::Struct { value: vec![1, 2] })
            .with(
                "p",
                MetadataValue::Proto {
                    type_name: "google.protobuf.Any".into(),
                    value: vec![],
                },
            );

        assert_eq!(validate(&props), Ok(()));
        assert_eq!(validate(&CustomProperties::new()), Ok(()));
    }

    #[test]
    fn rejects_blank_keys() {
        let props = CustomProperties::new().with("  ", MetadataValue::bool(false));
        assert_eq!(validate(&props), Err(PropertyError::BlankKey));
    }

    #[test]
    fn rejects_nan_and_infinite_doubles() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let props = CustomProperties::new().with("accuracy", MetadataValue::double(bad));
            assert_eq!(
                validate(&props),
                Err(PropertyError::NonFiniteDouble {
                    key: "accuracy".into()
                })
            );
        }
    }

    #[test]
    fn rejects_untyped_proto() {
        let props = CustomProperties::new().with(
            "raw",
            MetadataValue::Proto {
                type_name: String::new(),
                value: vec![0],
            },
        );
        assert_eq!(
            validate(&props),
            Err(PropertyError::UntypedProto { key: "raw".into() })
        );
    }

    #[test]
    fn overlay_replaces_whole_map_when_present() {
        let current = CustomProperties::new()
            .with("owner", MetadataValue::string("ml-team"))
            .with("accuracy", MetadataValue::double(0.9));
        let incoming = CustomProperties::new().with("accuracy", MetadataValue::double(0.95));

        let next = overlay_properties(Some(&current), Some(incoming.clone())).unwrap();

        assert_eq!(next, Some(incoming));
    }

    #[test]
    fn overlay_keeps_current_when_absent() {
        let current = CustomProperties::new().with("owner", MetadataValue::string("ml-team"));

        assert_eq!(
            overlay_properties(Some(&current), None).unwrap(),
            Some(current)
        );
        assert_eq!(overlay_properties(None, None).unwrap(), None);
    }

    #[test]
    fn overlay_with_empty_map_clears_entries() {
        let current = CustomProperties::new().with("owner", MetadataValue::string("ml-team"));
        let next = overlay_properties(Some(&current), Some(CustomProperties::new())).unwrap();

        assert_eq!(next.map(|props| props.len()), Some(0));
    }

    #[test]
    fn overlay_rejects_invalid_incoming_map() {
        let incoming = CustomProperties::new().with("", MetadataValue::int(1));

        assert_eq!(
            overlay_properties(None, Some(incoming)),
            Err(PropertyError::BlankKey)
        );
    }
}
