//! Creation mapper and update overlay engine.
//!
//! Both operations are pure: they read the policy table, never touch shared
//! state, and either return a complete record or an error.

mod create;
mod overlay;

pub use create::{create, create_from, create_record};
pub use overlay::{
    NonEditablePolicy, OverlayOptions, OverlayOutcome, overlay, overlay_from, overlay_update,
    overlay_update_with, overlay_with,
};

use crate::{
    error::{ConvertError, MappingError, ValidationReason},
    model::{EntityKind, EntityModel, FieldModel, FieldShape},
    properties,
    traits::{FieldValues, FieldWrite},
    value::Value,
};

/// Resolve a payload field name against the policy table.
fn resolve(model: &EntityModel, name: &str) -> Result<&'static FieldModel, ConvertError> {
    model.field(name).ok_or_else(|| {
        MappingError::UnknownField {
            kind: model.kind,
            field: name.to_string(),
        }
        .into()
    })
}

/// Check a present value against the field's policy row and write it.
fn apply_field<R>(
    record: &mut R,
    kind: EntityKind,
    field: &'static FieldModel,
    value: Value,
) -> Result<(), ConvertError>
where
    R: FieldValues + FieldWrite,
{
    let value = match (field.shape, value) {
        (_, Value::Null) => Value::Null,

        (FieldShape::Enum(model), value) => {
            if let Some(token) = value.as_token()
                && !model.contains(token)
            {
                return Err(ConvertError::Enum {
                    kind,
                    field: field.name,
                    enum_name: model.name,
                    value: token.to_string(),
                    expected: model.tokens,
                });
            }
            value
        }

        (FieldShape::Properties, Value::Properties(incoming)) => {
            let current = match record.get_value(field.name) {
                Some(Value::Properties(props)) => Some(props),
                _ => None,
            };

            properties::overlay_properties(current.as_ref(), Some(incoming))
                .map_err(|err| {
                    ConvertError::validation(kind, field, ValidationReason::Property(err))
                })?
                .map_or(Value::Null, Value::Properties)
        }

        (_, value) => value,
    };

    record
        .set_value(field.name, value)
        .map_err(|err| ConvertError::from_value(kind, field, err))
}

/// Every required field of `model` must hold a non-blank value.
fn check_required<R: FieldValues>(record: &R, model: &EntityModel) -> Result<(), ConvertError> {
    for field in model.required_fields() {
        let reason = match record.get_value(field.name) {
            None => {
                return Err(MappingError::UnmappedField {
                    kind: model.kind,
                    field: field.name.to_string(),
                }
                .into());
            }
            Some(Value::Null) => ValidationReason::Missing,
            Some(Value::Text(text)) if text.trim().is_empty() => ValidationReason::Blank,
            Some(_) => continue,
        };

        return Err(ConvertError::validation(model.kind, field, reason));
    }

    Ok(())
}
