//! Kind-tagged records and payloads.
//!
//! `Record`, `CreatePayload` and `UpdatePayload` let a request layer hold any
//! entity kind behind one type and dispatch to the typed engine.

use crate::{
    convert::{self, OverlayOptions, OverlayOutcome},
    entity::{
        DocArtifact, DocArtifactCreate, DocArtifactUpdate, InferenceService,
        InferenceServiceCreate, InferenceServiceUpdate, ModelArtifact, ModelArtifactCreate,
        ModelArtifactUpdate, ModelVersion, ModelVersionCreate, ModelVersionUpdate,
        RegisteredModel, RegisteredModelCreate, RegisteredModelUpdate, ServeModel,
        ServeModelCreate, ServeModelUpdate, ServingEnvironment, ServingEnvironmentCreate,
        ServingEnvironmentUpdate,
    },
    error::{ConvertError, MappingError},
    model::EntityKind,
    payload::FieldSet,
    stamp,
    traits::{FieldSource, FieldValues, FieldWrite},
    types::Timestamp,
    value::{Value, ValueError},
};
use candid::CandidType;
use serde::{Deserialize, Serialize};

macro_rules! records {
    ( $( $kind:ident => $create:ident, $update:ident ),+ $(,)? ) => {
        ///
        /// Record
        /// Any entity record, tagged by kind.
        ///

        #[derive(CandidType, Clone, Debug, Deserialize, PartialEq, Serialize)]
        pub enum Record {
            $( $kind($kind), )+
        }

        impl Record {
            /// Empty record of the given kind.
            #[must_use]
            pub fn empty(kind: EntityKind) -> Self {
                match kind {
                    $( EntityKind::$kind => Self::$kind($kind::default()), )+
                }
            }

            #[must_use]
            pub const fn kind(&self) -> EntityKind {
                match self {
                    $( Self::$kind(_) => EntityKind::$kind, )+
                }
            }

            pub(crate) fn create_from(
                kind: EntityKind,
                fields: FieldSet,
            ) -> Result<Self, ConvertError> {
                match kind {
                    $( EntityKind::$kind => convert::create_from::<$kind>(fields).map(Self::$kind), )+
                }
            }

            pub(crate) fn overlay_from(
                &self,
                fields: FieldSet,
                options: OverlayOptions,
            ) -> Result<OverlayOutcome<Self>, ConvertError> {
                match self {
                    $(
                        Self::$kind(current) => convert::overlay_from(fields, current, options)
                            .map(|outcome| outcome.map(Self::$kind)),
                    )+
                }
            }

            /// Stamp storage-assigned identity and creation time.
            pub fn assign_identity(
                &mut self,
                id: impl Into<String>,
                now: Timestamp,
            ) -> Result<(), ConvertError> {
                match self {
                    $( Self::$kind(record) => stamp::assign_identity(record, id, now), )+
                }
            }

            /// Stamp the last-update time.
            pub fn touch(&mut self, now: Timestamp) -> Result<(), ConvertError> {
                match self {
                    $( Self::$kind(record) => stamp::touch(record, now), )+
                }
            }
        }

        impl FieldValues for Record {
            fn get_value(&self, field: &str) -> Option<Value> {
                match self {
                    $( Self::$kind(record) => record.get_value(field), )+
                }
            }
        }

        impl FieldWrite for Record {
            fn set_value(&mut self, field: &str, value: Value) -> Result<(), ValueError> {
                match self {
                    $( Self::$kind(record) => record.set_value(field, value), )+
                }
            }
        }

        $(
            impl From<$kind> for Record {
                fn from(record: $kind) -> Self {
                    Self::$kind(record)
                }
            }
        )+

        ///
        /// CreatePayload
        ///
        /// Typed create payload for one kind, or a dynamic `FieldSet` whose
        /// field names are resolved against the kind at conversion time.
        ///

        #[derive(Clone, Debug, PartialEq)]
        pub enum CreatePayload {
            $( $kind($create), )+
            Fields(FieldSet),
        }

        impl CreatePayload {
            /// Kind carried by a typed payload; `None` for `Fields`.
            #[must_use]
            pub const fn kind(&self) -> Option<EntityKind> {
                match self {
                    $( Self::$kind(_) => Some(EntityKind::$kind), )+
                    Self::Fields(_) => None,
                }
            }

            pub(crate) fn into_fields_for(self, expected: EntityKind) -> Result<FieldSet, MappingError> {
                check_kind(expected, self.kind())?;

                Ok(match self {
                    $( Self::$kind(payload) => payload.into_field_set(), )+
                    Self::Fields(fields) => fields,
                })
            }
        }

        $(
            impl From<$create> for CreatePayload {
                fn from(payload: $create) -> Self {
                    Self::$kind(payload)
                }
            }
        )+

        ///
        /// UpdatePayload
        ///

        #[derive(Clone, Debug, PartialEq)]
        pub enum UpdatePayload {
            $( $kind($update), )+
            Fields(FieldSet),
        }

        impl UpdatePayload {
            #[must_use]
            pub const fn kind(&self) -> Option<EntityKind> {
                match self {
                    $( Self::$kind(_) => Some(EntityKind::$kind), )+
                    Self::Fields(_) => None,
                }
            }

            pub(crate) fn into_fields_for(self, expected: EntityKind) -> Result<FieldSet, MappingError> {
                check_kind(expected, self.kind())?;

                Ok(match self {
                    $( Self::$kind(payload) => payload.into_field_set(), )+
                    Self::Fields(fields) => fields,
                })
            }
        }

        $(
            impl From<$update> for UpdatePayload {
                fn from(payload: $update) -> Self {
                    Self::$kind(payload)
                }
            }
        )+
    };
}

records! {
    RegisteredModel => RegisteredModelCreate, RegisteredModelUpdate,
    ModelVersion => ModelVersionCreate, ModelVersionUpdate,
    ModelArtifact => ModelArtifactCreate, ModelArtifactUpdate,
    DocArtifact => DocArtifactCreate, DocArtifactUpdate,
    ServingEnvironment => ServingEnvironmentCreate, ServingEnvironmentUpdate,
    InferenceService => InferenceServiceCreate, InferenceServiceUpdate,
    ServeModel => ServeModelCreate, ServeModelUpdate,
}

impl From<FieldSet> for CreatePayload {
    fn from(fields: FieldSet) -> Self {
        Self::Fields(fields)
    }
}

impl From<FieldSet> for UpdatePayload {
    fn from(fields: FieldSet) -> Self {
        Self::Fields(fields)
    }
}

fn check_kind(expected: EntityKind, actual: Option<EntityKind>) -> Result<(), MappingError> {
    match actual {
        Some(actual) if actual != expected => Err(MappingError::KindMismatch { expected, actual }),
        _ => Ok(()),
    }
}

///
/// TESTS
///
