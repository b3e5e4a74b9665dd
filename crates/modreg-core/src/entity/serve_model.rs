use crate::{
    entity::impl_field_access,
    model::EntityKind,
    payload::FieldSet,
    traits::{Entity, FieldSource},
    types::{CustomProperties, ExecutionState, Timestamp},
    value::Value,
};
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// ServeModel
/// A serving action: one model version served by an inference service.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServeModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_known_state: Option<ExecutionState>,
}

impl_field_access!(ServeModel {
    "id" => id,
    "createTimeSinceEpoch" => create_time_since_epoch,
    "lastUpdateTimeSinceEpoch" => last_update_time_since_epoch,
    "name" => name,
    "modelVersionId" => model_version_id,
    "description" => description,
    "externalId" => external_id,
    "customProperties" => custom_properties,
    "lastKnownState" => last_known_state,
});

impl Entity for ServeModel {
    const KIND: EntityKind = EntityKind::ServeModel;

    type Create = ServeModelCreate;
    type Update = ServeModelUpdate;
}

///
/// ServeModelCreate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServeModelCreate {
    pub name: Option<String>,
    pub model_version_id: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub last_known_state: Option<String>,
}

impl ServeModelCreate {
    /// Payload with the API default state (`UNKNOWN`).
    #[must_use]
    pub fn new(model_version_id: impl Into<String>) -> Self {
        Self {
            model_version_id: Some(model_version_id.into()),
            last_known_state: Some(ExecutionState::Unknown.as_str().to_string()),
            ..Self::default()
        }
    }
}

impl FieldSource for ServeModelCreate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("name", self.name)
            .with_present("modelVersionId", self.model_version_id)
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("lastKnownState", self.last_known_state.map(Value::Enum))
    }
}

///
/// ServeModelUpdate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServeModelUpdate {
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub last_known_state: Option<String>,
}

impl FieldSource for ServeModelUpdate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("lastKnownState", self.last_known_state.map(Value::Enum))
    }
}
