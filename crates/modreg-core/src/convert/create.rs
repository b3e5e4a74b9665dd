use crate::{
    convert::{apply_field, check_required, resolve},
    error::ConvertError,
    model::EntityKind,
    payload::FieldSet,
    record::{CreatePayload, Record},
    traits::{Entity, FieldSource},
};

/// Build a new record of `E` from its create payload.
///
/// Server-generated fields stay unset; the storage side stamps them later.
pub fn create<E: Entity>(payload: E::Create) -> Result<E, ConvertError> {
    create_from::<E>(payload)
}

/// Build a new record of `E` from any field source, including a dynamic
/// `FieldSet` whose names are resolved case-insensitively.
pub fn create_from<E: Entity>(source: impl FieldSource) -> Result<E, ConvertError> {
    let model = E::model();
    let mut record = E::default();

    for (name, value) in source.into_field_set() {
        let field = resolve(model, &name)?;

        if !field.role.accepts_create() {
            tracing::debug!(
                kind = %E::KIND,
                field = field.name,
                role = %field.role,
                "ignoring field on create"
            );
            continue;
        }

        apply_field(&mut record, E::KIND, field, value)?;
        tracing::trace!(kind = %E::KIND, field = field.name, "field copied");
    }

    check_required(&record, model)?;

    Ok(record)
}

/// Kind-tagged variant of [`create`].
pub fn create_record(kind: EntityKind, payload: CreatePayload) -> Result<Record, ConvertError> {
    let fields: FieldSet = payload.into_fields_for(kind)?;

    Record::create_from(kind, fields)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entity::{
            InferenceService, InferenceServiceCreate, ModelArtifact, ModelArtifactCreate,
            ModelVersionCreate, RegisteredModel, RegisteredModelCreate, ServeModel,
            ServeModelCreate,
        },
        error::{ErrorClass, MappingError, ValidationReason},
        properties::PropertyError,
        traits::FieldValues,
        types::{
            ArtifactState, CustomProperties, ExecutionState, InferenceServiceState,
            MetadataValue, RegisteredModelState, Timestamp,
        },
        value::Value,
    };

    #[test]
    fn copies_payload_fields_and_leaves_server_fields_unset() {
        let payload = RegisteredModelCreate {
            description: Some("fraud detector".into()),
            external_id: Some("ext-1".into()),
            ..RegisteredModelCreate::new("fraud")
        };

        let record = create::<RegisteredModel>(payload).unwrap();

        assert_eq!(record.name.as_deref(), Some("fraud"));
        assert_eq!(record.description.as_deref(), Some("fraud detector"));
        assert_eq!(record.external_id.as_deref(), Some("ext-1"));
        assert_eq!(record.state, Some(RegisteredModelState::Live));
        assert_eq!(record.id, None);
        assert_eq!(record.create_time_since_epoch, None);
        assert_eq!(record.last_update_time_since_epoch, None);
    }

    #[test]
    fn missing_name_is_a_validation_error() {
        let err = create::<RegisteredModel>(RegisteredModelCreate::default()).unwrap_err();

        assert_eq!(
            err,
            ConvertError::Validation {
                kind: EntityKind::RegisteredModel,
                field: "name",
                reason: ValidationReason::Missing,
            }
        );
    }

    #[test]
    fn blank_name_is_a_validation_error() {
        let err = create::<RegisteredModel>(RegisteredModelCreate::new("   ")).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::Validation {
                reason: ValidationReason::Blank,
                ..
            }
        ));
    }

    #[test]
    fn absent_enum_stays_unset() {
        let payload = ServeModelCreate {
            model_version_id: Some("mv-7".into()),
            ..ServeModelCreate::default()
        };

        let record = create::<ServeModel>(payload).unwrap();
        assert_eq!(record.last_known_state, None);
    }

    #[test]
    fn constructors_fill_api_defaults() {
        let serve = create::<ServeModel>(ServeModelCreate::new("mv-7")).unwrap();
        assert_eq!(serve.last_known_state, Some(ExecutionState::Unknown));

        let artifact = create::<ModelArtifact>(ModelArtifactCreate::new("s3://m")).unwrap();
        assert_eq!(artifact.state, Some(ArtifactState::Unknown));
        assert_eq!(artifact.artifact_type, None);

        let isvc = create::<InferenceService>(InferenceServiceCreate::new("rm-1", "env-1")).unwrap();
        assert_eq!(isvc.desired_state, Some(InferenceServiceState::Deployed));
    }

    #[test]
    fn unknown_enum_token_is_rejected() {
        let payload = ServeModelCreate {
            last_known_state: Some("PAUSED".into()),
            ..ServeModelCreate::new("mv-7")
        };

        let err = create::<ServeModel>(payload).unwrap_err();

        assert_eq!(err.class(), ErrorClass::Enum);
        assert_eq!(err.field(), Some("lastKnownState"));
    }

    #[test]
    fn enum_tokens_are_case_sensitive() {
        let payload = ServeModelCreate {
            last_known_state: Some("running".into()),
            ..ServeModelCreate::new("mv-7")
        };

        assert_eq!(
            create::<ServeModel>(payload).unwrap_err().class(),
            ErrorClass::Enum
        );
    }

    #[test]
    fn dynamic_server_fields_are_ignored() {
        let fields = FieldSet::new()
            .with("id", "forged")
            .with("createTimeSinceEpoch", Timestamp::from_millis(5))
            .with("name", "fraud");

        let record = create_from::<RegisteredModel>(fields).unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.create_time_since_epoch, None);
        assert_eq!(record.name.as_deref(), Some("fraud"));
    }

    #[test]
    fn dynamic_names_resolve_case_insensitively() {
        let fields = FieldSet::new()
            .with("ModelVersionId", "mv-7")
            .with("LASTKNOWNSTATE", Value::Enum("RUNNING".into()));

        let record = create_from::<ServeModel>(fields).unwrap();

        assert_eq!(record.model_version_id.as_deref(), Some("mv-7"));
        assert_eq!(record.last_known_state, Some(ExecutionState::Running));
    }

    #[test]
    fn unknown_dynamic_field_is_a_mapping_error() {
        let fields = FieldSet::new().with("name", "fraud").with("owner", "me");
        let err = create_from::<RegisteredModel>(fields).unwrap_err();

        assert_eq!(
            err,
            ConvertError::Mapping(MappingError::UnknownField {
                kind: EntityKind::RegisteredModel,
                field: "owner".into(),
            })
        );
    }

    #[test]
    fn wrong_value_shape_is_a_mapping_error() {
        let fields = FieldSet::new()
            .with("name", "fraud")
            .with("description", Timestamp::from_millis(1));

        let err = create_from::<RegisteredModel>(fields).unwrap_err();
        assert!(err.is_caller_bug());
    }

    #[test]
    fn invalid_custom_properties_are_rejected() {
        let payload = RegisteredModelCreate {
            custom_properties: Some(
                CustomProperties::new().with("score", MetadataValue::double(f64::NAN)),
            ),
            ..RegisteredModelCreate::new("fraud")
        };

        let err = create::<RegisteredModel>(payload).unwrap_err();

        assert_eq!(
            err,
            ConvertError::Validation {
                kind: EntityKind::RegisteredModel,
                field: "customProperties",
                reason: ValidationReason::Property(PropertyError::NonFiniteDouble {
                    key: "score".into()
                }),
            }
        );
    }

    #[test]
    fn create_record_dispatches_on_kind() {
        let record = create_record(
            EntityKind::ModelVersion,
            ModelVersionCreate::new("v1", "rm-1").into(),
        )
        .unwrap();

        assert_eq!(record.kind(), EntityKind::ModelVersion);
        assert_eq!(
            record.get_value("registeredModelId"),
            Some(Value::Text("rm-1".into()))
        );
    }

    #[test]
    fn create_record_rejects_mismatched_payload() {
        let err = create_record(
            EntityKind::ServingEnvironment,
            ServeModelCreate::new("mv-7").into(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::Mapping(MappingError::KindMismatch {
                expected: EntityKind::ServingEnvironment,
                actual: EntityKind::ServeModel,
            })
        );
    }

    #[test]
    fn create_record_accepts_dynamic_payload() {
        let fields = FieldSet::new().with("name", "kserve-ns");
        let record = create_record(EntityKind::ServingEnvironment, fields.into()).unwrap();

        assert_eq!(record.get_value("name"), Some(Value::Text("kserve-ns".into())));
    }
}
