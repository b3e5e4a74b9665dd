use crate::{
    convert::{apply_field, resolve},
    error::{ConvertError, MappingError, ValidationReason},
    model::EntityKind,
    record::{Record, UpdatePayload},
    traits::{Entity, FieldSource},
};

///
/// NonEditablePolicy
///
/// What the overlay engine does with a present field that is not editable.
/// Typed update payloads never carry such fields; only dynamic payloads can.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NonEditablePolicy {
    #[default]
    Ignore,
    Reject,
}

///
/// OverlayOptions
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OverlayOptions {
    pub non_editable: NonEditablePolicy,
}

impl OverlayOptions {
    #[must_use]
    pub const fn rejecting() -> Self {
        Self {
            non_editable: NonEditablePolicy::Reject,
        }
    }
}

///
/// OverlayOutcome
/// The merged record plus how many payload fields were applied or ignored.
///

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayOutcome<R> {
    pub record: R,
    pub applied: usize,
    pub ignored: usize,
}

impl<R> OverlayOutcome<R> {
    #[must_use]
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> OverlayOutcome<T> {
        OverlayOutcome {
            record: f(self.record),
            applied: self.applied,
            ignored: self.ignored,
        }
    }
}

/// Merge a sparse update payload onto `current`, returning a new record.
///
/// Present editable fields replace the current value in full. Absent fields
/// keep the current value. `current` is never modified.
pub fn overlay<E: Entity>(payload: E::Update, current: &E) -> Result<E, ConvertError> {
    overlay_from(payload, current, OverlayOptions::default()).map(|outcome| outcome.record)
}

/// [`overlay`] with explicit options and field counts.
pub fn overlay_with<E: Entity>(
    payload: E::Update,
    current: &E,
    options: OverlayOptions,
) -> Result<OverlayOutcome<E>, ConvertError> {
    overlay_from(payload, current, options)
}

/// Merge any field source onto `current`.
pub fn overlay_from<E: Entity>(
    source: impl FieldSource,
    current: &E,
    options: OverlayOptions,
) -> Result<OverlayOutcome<E>, ConvertError> {
    let model = E::model();
    let mut next = current.clone();
    let mut applied = 0;
    let mut ignored = 0;

    for (name, value) in source.into_field_set() {
        let field = resolve(model, &name)?;

        if !field.role.accepts_update() {
            match options.non_editable {
                NonEditablePolicy::Ignore => {
                    tracing::debug!(
                        kind = %E::KIND,
                        field = field.name,
                        role = %field.role,
                        "ignoring non-editable field on update"
                    );
                    ignored += 1;
                    continue;
                }
                NonEditablePolicy::Reject => {
                    return Err(ConvertError::validation(
                        E::KIND,
                        field,
                        ValidationReason::NotEditable { role: field.role },
                    ));
                }
            }
        }

        apply_field(&mut next, E::KIND, field, value)?;
        tracing::trace!(kind = %E::KIND, field = field.name, "field replaced");
        applied += 1;
    }

    Ok(OverlayOutcome {
        record: next,
        applied,
        ignored,
    })
}

/// Kind-tagged variant of [`overlay`].
pub fn overlay_update(
    kind: EntityKind,
    payload: UpdatePayload,
    current: &Record,
) -> Result<Record, ConvertError> {
    overlay_update_with(kind, payload, current, OverlayOptions::default())
        .map(|outcome| outcome.record)
}

/// Kind-tagged variant of [`overlay_with`].
///
/// `kind`, the payload's kind and `current`'s kind must all agree.
pub fn overlay_update_with(
    kind: EntityKind,
    payload: UpdatePayload,
    current: &Record,
    options: OverlayOptions,
) -> Result<OverlayOutcome<Record>, ConvertError> {
    if current.kind() != kind {
        return Err(MappingError::KindMismatch {
            expected: kind,
            actual: current.kind(),
        }
        .into());
    }

    let fields = payload.into_fields_for(kind)?;

    current.overlay_from(fields, options)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        convert::create,
        entity::{
            InferenceService, InferenceServiceCreate, InferenceServiceUpdate, ModelVersion,
            ModelVersionCreate, ModelVersionUpdate, RegisteredModel, RegisteredModelCreate,
            RegisteredModelUpdate, ServeModel, ServeModelUpdate,
        },
        error::ErrorClass,
        model::FieldRole,
        payload::FieldSet,
        types::{
            CustomProperties, ExecutionState, InferenceServiceState, MetadataValue,
            ModelVersionState, Timestamp,
        },
        value::Value,
    };

    fn serve_model() -> ServeModel {
        ServeModel {
            id: Some("7".into()),
            create_time_since_epoch: Some(Timestamp::from_millis(1_000)),
            last_update_time_since_epoch: Some(Timestamp::from_millis(2_000)),
            name: Some("svc-1".into()),
            model_version_id: Some("mv-7".into()),
            description: Some("old".into()),
            last_known_state: Some(ExecutionState::Running),
            ..ServeModel::default()
        }
    }

    #[test]
    fn replaces_only_present_fields() {
        let current = serve_model();
        let payload = ServeModelUpdate {
            description: Some("new".into()),
            ..ServeModelUpdate::default()
        };

        let next = overlay(payload, &current).unwrap();

        assert_eq!(next.description.as_deref(), Some("new"));
        assert_eq!(next.name.as_deref(), Some("svc-1"));
        assert_eq!(next.model_version_id.as_deref(), Some("mv-7"));
        assert_eq!(next.last_known_state, Some(ExecutionState::Running));
        assert_eq!(next.id, current.id);
        assert_eq!(current.description.as_deref(), Some("old"));
    }

    #[test]
    fn empty_payload_returns_equal_record() {
        let current = serve_model();
        let outcome =
            overlay_with(ServeModelUpdate::default(), &current, OverlayOptions::default())
                .unwrap();

        assert_eq!(outcome.record, current);
        assert_eq!((outcome.applied, outcome.ignored), (0, 0));
    }

    #[test]
    fn present_empty_string_is_written() {
        let payload = ServeModelUpdate {
            description: Some(String::new()),
            ..ServeModelUpdate::default()
        };

        let next = overlay(payload, &serve_model()).unwrap();
        assert_eq!(next.description.as_deref(), Some(""));
    }

    #[test]
    fn null_clears_an_optional_field() {
        let fields = FieldSet::new().with("description", Value::Null);
        let outcome = overlay_from(fields, &serve_model(), OverlayOptions::default()).unwrap();

        assert_eq!(outcome.record.description, None);
        assert_eq!(outcome.applied, 1);
    }

    #[test]
    fn immutable_and_server_fields_are_ignored_by_default() {
        let current = serve_model();
        let fields = FieldSet::new()
            .with("name", "svc-2")
            .with("modelVersionId", "mv-9")
            .with("id", "99")
            .with("lastKnownState", Value::Enum("COMPLETE".into()));

        let outcome = overlay_from(fields, &current, OverlayOptions::default()).unwrap();

        assert_eq!(outcome.record.name, current.name);
        assert_eq!(outcome.record.model_version_id, current.model_version_id);
        assert_eq!(outcome.record.id, current.id);
        assert_eq!(
            outcome.record.last_known_state,
            Some(ExecutionState::Complete)
        );
        assert_eq!((outcome.applied, outcome.ignored), (1, 3));
    }

    #[test]
    fn reject_policy_turns_non_editable_into_validation_error() {
        let fields = FieldSet::new().with("modelVersionId", "mv-9");
        let err = overlay_from(fields, &serve_model(), OverlayOptions::rejecting()).unwrap_err();

        assert_eq!(
            err,
            ConvertError::Validation {
                kind: EntityKind::ServeModel,
                field: "modelVersionId",
                reason: ValidationReason::NotEditable {
                    role: FieldRole::ImmutableAfterCreate
                },
            }
        );
    }

    #[test]
    fn unknown_enum_returns_no_record() {
        let payload = ServeModelUpdate {
            description: Some("new".into()),
            last_known_state: Some("PAUSED".into()),
            ..ServeModelUpdate::default()
        };

        let err = overlay(payload, &serve_model()).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Enum);
    }

    #[test]
    fn custom_properties_are_replaced_wholesale() {
        let current = RegisteredModel {
            custom_properties: Some(
                CustomProperties::new()
                    .with("owner", MetadataValue::string("ml"))
                    .with("tier", MetadataValue::int(1)),
            ),
            ..create::<RegisteredModel>(RegisteredModelCreate::new("fraud")).unwrap()
        };
        let incoming = CustomProperties::new().with("tier", MetadataValue::int(2));
        let payload = RegisteredModelUpdate {
            custom_properties: Some(incoming.clone()),
            ..RegisteredModelUpdate::default()
        };

        let next = overlay(payload, &current).unwrap();
        assert_eq!(next.custom_properties, Some(incoming));
    }

    #[test]
    fn model_version_state_and_author_are_editable() {
        let current = create::<ModelVersion>(ModelVersionCreate::new("v1", "rm-1")).unwrap();
        let payload = ModelVersionUpdate {
            state: Some("ARCHIVED".into()),
            author: Some("alice".into()),
            ..ModelVersionUpdate::default()
        };

        let next = overlay(payload, &current).unwrap();

        assert_eq!(next.state, Some(ModelVersionState::Archived));
        assert_eq!(next.author.as_deref(), Some("alice"));
        assert_eq!(next.registered_model_id.as_deref(), Some("rm-1"));
    }

    #[test]
    fn inference_service_can_be_repointed() {
        let current = create::<InferenceService>(InferenceServiceCreate {
            model_version_id: Some("mv-1".into()),
            ..InferenceServiceCreate::new("rm-1", "env-1")
        })
        .unwrap();
        let payload = InferenceServiceUpdate {
            model_version_id: Some("mv-2".into()),
            desired_state: Some("UNDEPLOYED".into()),
            ..InferenceServiceUpdate::default()
        };

        let next = overlay(payload, &current).unwrap();

        assert_eq!(next.model_version_id.as_deref(), Some("mv-2"));
        assert_eq!(next.desired_state, Some(InferenceServiceState::Undeployed));
        assert_eq!(next.serving_environment_id.as_deref(), Some("env-1"));
    }

    #[test]
    fn overlay_update_rejects_kind_mismatch() {
        let current = Record::from(serve_model());
        let err = overlay_update(
            EntityKind::RegisteredModel,
            RegisteredModelUpdate::default().into(),
            &current,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::Mapping(MappingError::KindMismatch {
                expected: EntityKind::RegisteredModel,
                actual: EntityKind::ServeModel,
            })
        );
    }

    #[test]
    fn overlay_update_rejects_payload_for_other_kind() {
        let current = Record::from(serve_model());
        let err = overlay_update(
            EntityKind::ServeModel,
            RegisteredModelUpdate::default().into(),
            &current,
        )
        .unwrap_err();

        assert!(err.is_caller_bug());
    }

    #[test]
    fn overlay_update_dispatches_on_kind() {
        let current = Record::from(serve_model());
        let payload = ServeModelUpdate {
            description: Some("new".into()),
            ..ServeModelUpdate::default()
        };

        let next = overlay_update(EntityKind::ServeModel, payload.into(), &current).unwrap();

        let mut expected = serve_model();
        expected.description = Some("new".into());
        assert_eq!(next, Record::from(expected));
    }
}
