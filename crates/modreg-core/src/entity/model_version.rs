use crate::{
    entity::impl_field_access,
    model::EntityKind,
    payload::FieldSet,
    traits::{Entity, FieldSource},
    types::{CustomProperties, ModelVersionState, Timestamp},
    value::Value,
};
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// ModelVersion
/// One version of a registered model.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelVersion {
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
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ModelVersionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl_field_access!(ModelVersion {
    "id" => id,
    "createTimeSinceEpoch" => create_time_since_epoch,
    "lastUpdateTimeSinceEpoch" => last_update_time_since_epoch,
    "name" => name,
    "registeredModelId" => registered_model_id,
    "description" => description,
    "externalId" => external_id,
    "customProperties" => custom_properties,
    "state" => state,
    "author" => author,
});

impl Entity for ModelVersion {
    const KIND: EntityKind = EntityKind::ModelVersion;

    type Create = ModelVersionCreate;
    type Update = ModelVersionUpdate;
}

///
/// ModelVersionCreate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelVersionCreate {
    pub name: Option<String>,
    pub registered_model_id: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub state: Option<String>,
    pub author: Option<String>,
}

impl ModelVersionCreate {
    /// Payload with the API default state (`LIVE`).
    #[must_use]
    pub fn new(name: impl Into<String>, registered_model_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            registered_model_id: Some(registered_model_id.into()),
            state: Some(ModelVersionState::Live.as_str().to_string()),
            ..Self::default()
        }
    }
}

impl FieldSource for ModelVersionCreate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("name", self.name)
            .with_present("registeredModelId", self.registered_model_id)
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("state", self.state.map(Value::Enum))
            .with_present("author", self.author)
    }
}

///
/// ModelVersionUpdate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelVersionUpdate {
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub state: Option<String>,
    pub author: Option<String>,
}

impl FieldSource for ModelVersionUpdate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("state", self.state.map(Value::Enum))
            .with_present("author", self.author)
    }
}
