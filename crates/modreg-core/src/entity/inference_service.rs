use crate::{
    entity::impl_field_access,
    model::EntityKind,
    payload::FieldSet,
    traits::{Entity, FieldSource},
    types::{CustomProperties, InferenceServiceState, Timestamp},
    value::Value,
};
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// InferenceService
///
/// Deployment of a registered model into a serving environment.
/// `modelVersionId` is editable so a service can be re-pointed at another
/// version; the model and environment it belongs to are fixed at creation.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InferenceService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_environment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_state: Option<InferenceServiceState>,
}

impl_field_access!(InferenceService {
    "id" => id,
    "createTimeSinceEpoch" => create_time_since_epoch,
    "lastUpdateTimeSinceEpoch" => last_update_time_since_epoch,
    "name" => name,
    "registeredModelId" => registered_model_id,
    "servingEnvironmentId" => serving_environment_id,
    "description" => description,
    "externalId" => external_id,
    "customProperties" => custom_properties,
    "modelVersionId" => model_version_id,
    "runtime" => runtime,
    "desiredState" => desired_state,
});

impl Entity for InferenceService {
    const KIND: EntityKind = EntityKind::InferenceService;

    type Create = InferenceServiceCreate;
    type Update = InferenceServiceUpdate;
}

///
/// InferenceServiceCreate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InferenceServiceCreate {
    pub name: Option<String>,
    pub registered_model_id: Option<String>,
    pub serving_environment_id: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub model_version_id: Option<String>,
    pub runtime: Option<String>,
    pub desired_state: Option<String>,
}

impl InferenceServiceCreate {
    /// Payload with the API default desired state (`DEPLOYED`).
    #[must_use]
    pub fn new(
        registered_model_id: impl Into<String>,
        serving_environment_id: impl Into<String>,
    ) -> Self {
        Self {
            registered_model_id: Some(registered_model_id.into()),
            serving_environment_id: Some(serving_environment_id.into()),
            desired_state: Some(InferenceServiceState::Deployed.as_str().to_string()),
            ..Self::default()
        }
    }
}

impl FieldSource for InferenceServiceCreate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("name", self.name)
            .with_present("registeredModelId", self.registered_model_id)
            .with_present("servingEnvironmentId", self.serving_environment_id)
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("modelVersionId", self.model_version_id)
            .with_present("runtime", self.runtime)
            .with_present("desiredState", self.desired_state.map(Value::Enum))
    }
}

///
/// InferenceServiceUpdate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InferenceServiceUpdate {
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub model_version_id: Option<String>,
    pub runtime: Option<String>,
    pub desired_state: Option<String>,
}

impl FieldSource for InferenceServiceUpdate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("modelVersionId", self.model_version_id)
            .with_present("runtime", self.runtime)
            .with_present("desiredState", self.desired_state.map(Value::Enum))
    }
}
