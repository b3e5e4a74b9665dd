//! Policy table: the role of every field of every entity kind.
//!
//! Built entirely from `const` data, so it exists before any caller runs and
//! can never change afterwards. Both the creation mapper and the overlay
//! engine consult it purely as a lookup.

use crate::{
    model::{EntityKind, EntityModel, FieldModel, FieldShape},
    traits::WireEnum,
    types::{
        ArtifactState, ExecutionState, InferenceServiceState, ModelVersionState,
        RegisteredModelState,
    },
};

//
// Shared rows
//

const ID: FieldModel = FieldModel::server("id", FieldShape::Text);
const CREATE_TIME: FieldModel = FieldModel::server("createTimeSinceEpoch", FieldShape::Timestamp);
const LAST_UPDATE_TIME: FieldModel =
    FieldModel::server("lastUpdateTimeSinceEpoch", FieldShape::Timestamp);
const ARTIFACT_TYPE: FieldModel = FieldModel::server("artifactType", FieldShape::Text);

const NAME: FieldModel = FieldModel::immutable("name");

const DESCRIPTION: FieldModel = FieldModel::editable("description", FieldShape::Text);
const EXTERNAL_ID: FieldModel = FieldModel::editable("externalId", FieldShape::Text);
const CUSTOM_PROPERTIES: FieldModel =
    FieldModel::editable("customProperties", FieldShape::Properties);
const URI: FieldModel = FieldModel::editable("uri", FieldShape::Text);
const ARTIFACT_STATE: FieldModel =
    FieldModel::editable("state", FieldShape::Enum(ArtifactState::MODEL));

//
// Entity models
//

static REGISTERED_MODEL: EntityModel = EntityModel {
    kind: EntityKind::RegisteredModel,
    fields: &[
        ID,
        CREATE_TIME,
        LAST_UPDATE_TIME,
        NAME.required(),
        DESCRIPTION,
        EXTERNAL_ID,
        CUSTOM_PROPERTIES,
        FieldModel::editable("state", FieldShape::Enum(RegisteredModelState::MODEL)),
    ],
};

static MODEL_VERSION: EntityModel = EntityModel {
    kind: EntityKind::ModelVersion,
    fields: &[
        ID,
        CREATE_TIME,
        LAST_UPDATE_TIME,
        NAME.required(),
        FieldModel::immutable("registeredModelId").required(),
        DESCRIPTION,
        EXTERNAL_ID,
        CUSTOM_PROPERTIES,
        FieldModel::editable("state", FieldShape::Enum(ModelVersionState::MODEL)),
        FieldModel::editable("author", FieldShape::Text),
    ],
};

static MODEL_ARTIFACT: EntityModel = EntityModel {
    kind: EntityKind::ModelArtifact,
    fields: &[
        ID,
        CREATE_TIME,
        LAST_UPDATE_TIME,
        ARTIFACT_TYPE,
        NAME,
        DESCRIPTION,
        EXTERNAL_ID,
        CUSTOM_PROPERTIES,
        URI,
        ARTIFACT_STATE,
        FieldModel::editable("modelFormatName", FieldShape::Text),
        FieldModel::editable("modelFormatVersion", FieldShape::Text),
        FieldModel::editable("storageKey", FieldShape::Text),
        FieldModel::editable("storagePath", FieldShape::Text),
        FieldModel::editable("serviceAccountName", FieldShape::Text),
    ],
};

static DOC_ARTIFACT: EntityModel = EntityModel {
    kind: EntityKind::DocArtifact,
    fields: &[
        ID,
        CREATE_TIME,
        LAST_UPDATE_TIME,
        ARTIFACT_TYPE,
        NAME,
        DESCRIPTION,
        EXTERNAL_ID,
        CUSTOM_PROPERTIES,
        URI,
        ARTIFACT_STATE,
    ],
};

static SERVING_ENVIRONMENT: EntityModel = EntityModel {
    kind: EntityKind::ServingEnvironment,
    fields: &[
        ID,
        CREATE_TIME,
        LAST_UPDATE_TIME,
        NAME.required(),
        DESCRIPTION,
        EXTERNAL_ID,
        CUSTOM_PROPERTIES,
    ],
};

static INFERENCE_SERVICE: EntityModel = EntityModel {
    kind: EntityKind::InferenceService,
    fields: &[
        ID,
        CREATE_TIME,
        LAST_UPDATE_TIME,
        NAME,
        FieldModel::immutable("registeredModelId").required(),
        FieldModel::immutable("servingEnvironmentId").required(),
        DESCRIPTION,
        EXTERNAL_ID,
        CUSTOM_PROPERTIES,
        FieldModel::editable("modelVersionId", FieldShape::Text),
        FieldModel::editable("runtime", FieldShape::Text),
        FieldModel::editable(
            "desiredState",
            FieldShape::Enum(InferenceServiceState::MODEL),
        ),
    ],
};

static SERVE_MODEL: EntityModel = EntityModel {
    kind: EntityKind::ServeModel,
    fields: &[
        ID,
        CREATE_TIME,
        LAST_UPDATE_TIME,
        NAME,
        FieldModel::immutable("modelVersionId").required(),
        DESCRIPTION,
        EXTERNAL_ID,
        CUSTOM_PROPERTIES,
        FieldModel::editable("lastKnownState", FieldShape::Enum(ExecutionState::MODEL)),
    ],
};

/// Policy-table entry for a kind.
#[must_use]
pub const fn model(kind: EntityKind) -> &'static EntityModel {
    match kind {
        EntityKind::RegisteredModel => &REGISTERED_MODEL,
        EntityKind::ModelVersion => &MODEL_VERSION,
        EntityKind::ModelArtifact => &MODEL_ARTIFACT,
        EntityKind::DocArtifact => &DOC_ARTIFACT,
        EntityKind::ServingEnvironment => &SERVING_ENVIRONMENT,
        EntityKind::InferenceService => &INFERENCE_SERVICE,
        EntityKind::ServeModel => &SERVE_MODEL,
    }
}

/// Every policy-table entry, in `EntityKind::ALL` order.
pub fn models() -> impl Iterator<Item = &'static EntityModel> {
    EntityKind::ALL.into_iter().map(model)
}

///
/// TESTS
///
