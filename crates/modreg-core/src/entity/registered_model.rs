use crate::{
    entity::impl_field_access,
    model::EntityKind,
    payload::FieldSet,
    traits::{Entity, FieldSource},
    types::{CustomProperties, RegisteredModelState, Timestamp},
    value::Value,
};
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// RegisteredModel
/// A logical model that groups its versions.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisteredModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<RegisteredModelState>,
}

impl_field_access!(RegisteredModel {
    "id" => id,
    "createTimeSinceEpoch" => create_time_since_epoch,
    "lastUpdateTimeSinceEpoch" => last_update_time_since_epoch,
    "name" => name,
    "description" => description,
    "externalId" => external_id,
    "customProperties" => custom_properties,
    "state" => state,
});

impl Entity for RegisteredModel {
    const KIND: EntityKind = EntityKind::RegisteredModel;

    type Create = RegisteredModelCreate;
    type Update = RegisteredModelUpdate;
}

///
/// RegisteredModelCreate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisteredModelCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    /// Raw wire token; checked against `RegisteredModelState`.
    pub state: Option<String>,
}

impl RegisteredModelCreate {
    /// Payload with the API default state (`LIVE`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            state: Some(RegisteredModelState::Live.as_str().to_string()),
            ..Self::default()
        }
    }
}

impl FieldSource for RegisteredModelCreate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("name", self.name)
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("state", self.state.map(Value::Enum))
    }
}

///
/// RegisteredModelUpdate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisteredModelUpdate {
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub state: Option<String>,
}

impl FieldSource for RegisteredModelUpdate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("state", self.state.map(Value::Enum))
    }
}
