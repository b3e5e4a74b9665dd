use modreg_core::{
    convert::{create, create_record, overlay, overlay_update},
    entity::{
        DocArtifactCreate, ModelArtifact, ModelArtifactCreate, ModelArtifactUpdate,
        RegisteredModel, RegisteredModelCreate, ServeModel, ServeModelCreate, ServeModelUpdate,
    },
    error::{ConvertError, ErrorClass, ValidationReason},
    model::EntityKind,
    payload::FieldSet,
    record::Record,
    stamp,
    traits::FieldValues,
    types::{ArtifactState, ExecutionState, Timestamp},
    value::Value,
};

#[test]
fn serve_model_description_update_keeps_other_fields() {
    let current = create::<ServeModel>(ServeModelCreate {
        name: Some("svc-1".into()),
        description: Some("old".into()),
        last_known_state: Some("RUNNING".into()),
        ..ServeModelCreate::new("mv-7")
    })
    .unwrap();

    let next = overlay(
        ServeModelUpdate {
            description: Some("new".into()),
            ..ServeModelUpdate::default()
        },
        &current,
    )
    .unwrap();

    assert_eq!(next.name.as_deref(), Some("svc-1"));
    assert_eq!(next.model_version_id.as_deref(), Some("mv-7"));
    assert_eq!(next.description.as_deref(), Some("new"));
    assert_eq!(next.last_known_state, Some(ExecutionState::Running));
}

#[test]
fn registered_model_without_name_is_rejected() {
    let err = create_record(
        EntityKind::RegisteredModel,
        RegisteredModelCreate {
            description: Some("no name".into()),
            ..RegisteredModelCreate::default()
        }
        .into(),
    )
    .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Validation);
    assert_eq!(err.kind(), Some(EntityKind::RegisteredModel));
    assert_eq!(err.field(), Some("name"));
    assert!(matches!(
        err,
        ConvertError::Validation {
            reason: ValidationReason::Missing,
            ..
        }
    ));
}

#[test]
fn create_then_stamp_then_update_lifecycle() {
    let mut artifact = create::<ModelArtifact>(ModelArtifactCreate {
        name: Some("weights".into()),
        model_format_name: Some("onnx".into()),
        ..ModelArtifactCreate::new("s3://bucket/model.onnx")
    })
    .unwrap();

    let created = Timestamp::from_millis(1_000);
    stamp::assign_identity(&mut artifact, "42", created).unwrap();

    let mut next = overlay(
        ModelArtifactUpdate {
            state: Some("LIVE".into()),
            model_format_version: Some("1".into()),
            ..ModelArtifactUpdate::default()
        },
        &artifact,
    )
    .unwrap();
    stamp::touch(&mut next, Timestamp::from_millis(2_000)).unwrap();

    assert_eq!(next.id.as_deref(), Some("42"));
    assert_eq!(next.artifact_type.as_deref(), Some("model-artifact"));
    assert_eq!(next.create_time_since_epoch, Some(created));
    assert_eq!(
        next.last_update_time_since_epoch,
        Some(Timestamp::from_millis(2_000))
    );
    assert_eq!(next.state, Some(ArtifactState::Live));
    assert_eq!(next.model_format_name.as_deref(), Some("onnx"));
    assert_eq!(next.model_format_version.as_deref(), Some("1"));
}

#[test]
fn doc_artifact_create_needs_no_fields() {
    let record =
        create_record(EntityKind::DocArtifact, DocArtifactCreate::default().into()).unwrap();

    assert_eq!(record, Record::empty(EntityKind::DocArtifact));
}

#[test]
fn unknown_enum_on_update_leaves_current_untouched() {
    let current = Record::from(
        create::<RegisteredModel>(RegisteredModelCreate::new("fraud")).unwrap(),
    );
    let before = current.clone();

    let fields = FieldSet::new()
        .with("description", "changed")
        .with("state", Value::Enum("DELETED".into()));
    let err = overlay_update(EntityKind::RegisteredModel, fields.into(), &current).unwrap_err();

    assert_eq!(err.class(), ErrorClass::Enum);
    assert_eq!(current, before);
}

#[test]
fn json_payloads_keep_absent_and_empty_apart() {
    let payload: ServeModelUpdate =
        serde_json::from_str(r#"{"description": "", "lastKnownState": "FAILED"}"#).unwrap();
    let current = create::<ServeModel>(ServeModelCreate {
        description: Some("old".into()),
        external_id: Some("ext".into()),
        ..ServeModelCreate::new("mv-7")
    })
    .unwrap();

    let next = overlay(payload, &current).unwrap();

    assert_eq!(next.description.as_deref(), Some(""));
    assert_eq!(next.external_id.as_deref(), Some("ext"));
    assert_eq!(
        next.get_value("lastKnownState"),
        Some(Value::Enum("FAILED".into()))
    );
}

#[test]
fn record_json_uses_wire_field_names() {
    let record = create::<ServeModel>(ServeModelCreate::new("mv-7")).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "modelVersionId": "mv-7",
            "lastKnownState": "UNKNOWN",
        })
    );
}
