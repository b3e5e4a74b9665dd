use crate::{
    model::{EntityKind, FieldModel, FieldShape},
    properties::PropertyError,
    value::ValueError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// ConvertError
///
/// Failure of a create or overlay operation. Every variant names the entity
/// kind and, where one is involved, the field, so callers can build a precise
/// client-facing message. Operations are deterministic: retrying with the
/// same input reproduces the same error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConvertError {
    #[error("invalid {kind}.{field}: {reason}")]
    Validation {
        kind: EntityKind,
        field: &'static str,
        reason: ValidationReason,
    },

    #[error(
        "unknown enum value '{value}' for {kind}.{field}: expected one of {}",
        .expected.join(", ")
    )]
    Enum {
        kind: EntityKind,
        field: &'static str,
        enum_name: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl ConvertError {
    pub(crate) const fn validation(
        kind: EntityKind,
        field: &FieldModel,
        reason: ValidationReason,
    ) -> Self {
        Self::Validation {
            kind,
            field: field.name,
            reason,
        }
    }

    /// Attach entity and field context to a leaf value failure.
    pub(crate) fn from_value(kind: EntityKind, field: &FieldModel, err: ValueError) -> Self {
        match err {
            ValueError::UnknownEnum { enum_name, value } => Self::Enum {
                kind,
                field: field.name,
                enum_name,
                value,
                expected: match field.shape {
                    FieldShape::Enum(model) => model.tokens,
                    _ => &[],
                },
            },
            ValueError::Malformed { detail } => {
                Self::validation(kind, field, ValidationReason::Malformed { detail })
            }
            ValueError::Shape { expected, actual } => Self::Mapping(MappingError::ShapeMismatch {
                kind,
                field: field.name,
                expected,
                actual,
            }),
            ValueError::UnknownField { field } => {
                Self::Mapping(MappingError::UnmappedField { kind, field })
            }
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation { .. } => ErrorClass::Validation,
            Self::Enum { .. } => ErrorClass::Enum,
            Self::Mapping(_) => ErrorClass::Mapping,
        }
    }

    /// Entity kind the failure relates to, when known.
    #[must_use]
    pub const fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::Validation { kind, .. } | Self::Enum { kind, .. } => Some(*kind),
            Self::Mapping(err) => err.kind(),
        }
    }

    /// Field the failure relates to, when known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::Enum { field, .. } => Some(*field),
            Self::Mapping(err) => err.field(),
        }
    }

    /// Mapping failures point at the calling code, not at client input.
    #[must_use]
    pub const fn is_caller_bug(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    Validation,
    Enum,
    Mapping,
}

impl ErrorClass {
    pub const ALL: [Self; 3] = [Self::Validation, Self::Enum, Self::Mapping];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Enum => "enum",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ValidationReason
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidationReason {
    #[error("required field is missing")]
    Missing,

    #[error("required field is blank")]
    Blank,

    #[error("field is {role} and cannot be set by an update")]
    NotEditable { role: crate::model::FieldRole },

    #[error("{0}")]
    Property(#[from] PropertyError),

    #[error("{detail}")]
    Malformed { detail: String },
}

///
/// MappingError
///
/// Schema mismatch between a payload and the policy table. Indicates a bug
/// in the calling code rather than bad client input.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MappingError {
    #[error("unknown entity kind '{name}'")]
    UnknownKind { name: String },

    #[error("{kind} has no field '{field}'")]
    UnknownField { kind: EntityKind, field: String },

    #[error("{kind} record does not expose policy field '{field}'")]
    UnmappedField { kind: EntityKind, field: String },

    #[error("payload for {actual} passed where {expected} was expected")]
    KindMismatch {
        expected: EntityKind,
        actual: EntityKind,
    },

    #[error("{kind}.{field} expects a {expected} value, found {actual}")]
    ShapeMismatch {
        kind: EntityKind,
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl MappingError {
    #[must_use]
    pub const fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::UnknownKind { .. } => None,
            Self::UnknownField { kind, .. }
            | Self::UnmappedField { kind, .. }
            | Self::ShapeMismatch { kind, .. } => Some(*kind),
            Self::KindMismatch { expected, .. } => Some(*expected),
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownField { field, .. } | Self::UnmappedField { field, .. } => {
                Some(field.as_str())
            }
            Self::ShapeMismatch { field, .. } => Some(*field),
            Self::UnknownKind { .. } | Self::KindMismatch { .. } => None,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy;

    #[test]
    fn unknown_enum_leaf_becomes_enum_error_with_expected_tokens() {
        let model = policy::model(EntityKind::ServeModel);
        let field = model.field("lastKnownState").unwrap();
        let err = ConvertError::from_value(
            EntityKind::ServeModel,
            field,
            ValueError::UnknownEnum {
                enum_name: "ExecutionState",
                value: "PAUSED".into(),
            },
        );

        assert_eq!(err.class(), ErrorClass::Enum);
        assert_eq!(err.kind(), Some(EntityKind::ServeModel));
        assert_eq!(err.field(), Some("lastKnownState"));
        assert!(err.to_string().contains("RUNNING"));
        assert!(!err.is_caller_bug());
    }

    #[test]
    fn shape_mismatch_is_a_caller_bug() {
        let model = policy::model(EntityKind::RegisteredModel);
        let field = model.field("description").unwrap();
        let err = ConvertError::from_value(
            EntityKind::RegisteredModel,
            field,
            ValueError::Shape {
                expected: "text",
                actual: "timestamp",
            },
        );

        assert_eq!(err.class(), ErrorClass::Mapping);
        assert!(err.is_caller_bug());
        assert_eq!(
            err.to_string(),
            "RegisteredModel.description expects a text value, found timestamp"
        );
    }

    #[test]
    fn validation_message_names_kind_and_field() {
        let err = ConvertError::Validation {
            kind: EntityKind::RegisteredModel,
            field: "name",
            reason: ValidationReason::Missing,
        };

        assert_eq!(
            err.to_string(),
            "invalid RegisteredModel.name: required field is missing"
        );
    }
}
