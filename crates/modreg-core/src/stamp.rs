//! Storage-side stamping of server-generated fields.
//!
//! The creation mapper and the overlay engine never write these fields; the
//! storage collaborator calls in here when it persists a record.

use crate::{
    error::{ConvertError, MappingError},
    traits::Entity,
    types::Timestamp,
    value::Value,
};

/// Assign `id`, both timestamps and, for artifact kinds, `artifactType`.
pub fn assign_identity<E: Entity>(
    record: &mut E,
    id: impl Into<String>,
    now: Timestamp,
) -> Result<(), ConvertError> {
    write::<E>(record, "id", Value::Text(id.into()))?;
    write::<E>(record, "createTimeSinceEpoch", Value::Timestamp(now))?;
    write::<E>(record, "lastUpdateTimeSinceEpoch", Value::Timestamp(now))?;

    if let Some(artifact_type) = E::ARTIFACT_TYPE {
        write::<E>(record, "artifactType", Value::from(artifact_type))?;
    }

    Ok(())
}

/// Set `lastUpdateTimeSinceEpoch` after a successful overlay.
pub fn touch<E: Entity>(record: &mut E, now: Timestamp) -> Result<(), ConvertError> {
    write::<E>(record, "lastUpdateTimeSinceEpoch", Value::Timestamp(now))
}

fn write<E: Entity>(record: &mut E, name: &'static str, value: Value) -> Result<(), ConvertError> {
    let field = E::model()
        .field(name)
        .ok_or_else(|| MappingError::UnknownField {
            kind: E::KIND,
            field: name.to_string(),
        })?;

    record
        .set_value(field.name, value)
        .map_err(|err| ConvertError::from_value(E::KIND, field, err))
}

///
/// TESTS
///
