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
/// ModelArtifact
/// Stored model binary plus the format and storage coordinates needed to serve it.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelArtifact {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_format_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_format_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

impl_field_access!(ModelArtifact {
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
    "modelFormatName" => model_format_name,
    "modelFormatVersion" => model_format_version,
    "storageKey" => storage_key,
    "storagePath" => storage_path,
    "serviceAccountName" => service_account_name,
});

impl Entity for ModelArtifact {
    const KIND: EntityKind = EntityKind::ModelArtifact;
    const ARTIFACT_TYPE: Option<&'static str> = Some("model-artifact");

    type Create = ModelArtifactCreate;
    type Update = ModelArtifactUpdate;
}

///
/// ModelArtifactCreate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelArtifactCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub uri: Option<String>,
    pub state: Option<String>,
    pub model_format_name: Option<String>,
    pub model_format_version: Option<String>,
    pub storage_key: Option<String>,
    pub storage_path: Option<String>,
    pub service_account_name: Option<String>,
}

impl ModelArtifactCreate {
    /// Payload with the API default state (`UNKNOWN`).
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            state: Some(ArtifactState::Unknown.as_str().to_string()),
            ..Self::default()
        }
    }
}

impl FieldSource for ModelArtifactCreate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("name", self.name)
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("uri", self.uri)
            .with_present("state", self.state.map(Value::Enum))
            .with_present("modelFormatName", self.model_format_name)
            .with_present("modelFormatVersion", self.model_format_version)
            .with_present("storageKey", self.storage_key)
            .with_present("storagePath", self.storage_path)
            .with_present("serviceAccountName", self.service_account_name)
    }
}

///
/// ModelArtifactUpdate
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelArtifactUpdate {
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub custom_properties: Option<CustomProperties>,
    pub uri: Option<String>,
    pub state: Option<String>,
    pub model_format_name: Option<String>,
    pub model_format_version: Option<String>,
    pub storage_key: Option<String>,
    pub storage_path: Option<String>,
    pub service_account_name: Option<String>,
}

impl FieldSource for ModelArtifactUpdate {
    fn into_field_set(self) -> FieldSet {
        FieldSet::new()
            .with_present("description", self.description)
            .with_present("externalId", self.external_id)
            .with_present("customProperties", self.custom_properties)
            .with_present("uri", self.uri)
            .with_present("state", self.state.map(Value::Enum))
            .with_present("modelFormatName", self.model_format_name)
            .with_present("modelFormatVersion", self.model_format_version)
            .with_present("storageKey", self.storage_key)
            .with_present("storagePath", self.storage_path)
            .with_present("serviceAccountName", self.service_account_name)
    }
}
