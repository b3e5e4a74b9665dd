use crate::{
    entity::impl_field_access,
    model::EntityKind,
    payload::FieldSet,
    traits::{Entity, FieldSource},
    types::{ArtifactState, CustomProperties, Timestamp},
    value::Value,
};
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// DocArtifact
/// Document attached to a model version (model card, report, licence).
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocArtifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time_since_epoch: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ArtifactState>,
}

impl_field_access!(DocArtifact {
    "id" => id,
    "createTimeSinceEpoch" => create_time_since_epoch,
    "lastUpdateTimeSinceEpoch" => last_update_time_since_epoch,
    "artifactType" => artifact_type,
    "name" => name,
    "description" => description,
    "externalId" => external_id,
    "customProperties" => custom_properties,
    "uri" => uri,
    "state" => state,
});

impl Entity for DocArtifact {
    const KIND: EntityKind = EntityKind::DocArtifact;
    const ARTIFACT_TYPE: Option<&'static str> = Some("doc-artifact");

    type Create = DocArtifactCreate;
    type Update = DocArtifactUpdate;
}

///
/// DocArtifactCreate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocArtifactCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub uri: Option<String>,
    pub state: Option<String>,
}

impl DocArtifactCreate {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            state: Some(ArtifactState::Unknown.as_str().to_string()),
            ..Self::default()
        }
    }
}

impl FieldSource for DocArtifactCreate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("name", self.name)
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("uri", self.uri)
            .with_present("state", self.state.map(Value::Enum))
    }
}

///
/// DocArtifactUpdate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocArtifactUpdate {
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub uri: Option<String>,
    pub state: Option<String>,
}

impl FieldSource for DocArtifactUpdate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("uri", self.uri)
            .with_present("state", self.state.map(Value::Enum))
    }
}
