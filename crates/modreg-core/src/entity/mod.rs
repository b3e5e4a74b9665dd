//! Entity records and their create/update payloads.
//!
//! Records are what the storage side persists. Create payloads carry the
//! immutable and editable fields of a kind; update payloads carry only the
//! editable ones, each independently present or absent.

/// Wire field name → record field for `FieldValues` / `FieldWrite`.
macro_rules! impl_field_access {
    ($ty:ty { $( $name:literal => $field:ident ),+ $(,)? }) => {
        impl $crate::traits::FieldValues for $ty {
            fn get_value(&self, field: &str) -> Option<$crate::value::Value> {
                match field {
                    $( $name => Some($crate::traits::FieldValue::to_value(&self.$field)), )+
                    _ => None,
                }
            }
        }

        impl $crate::traits::FieldWrite for $ty {
            fn set_value(
                &mut self,
                field: &str,
                value: $crate::value::Value,
            ) -> Result<(), $crate::value::ValueError> {
                match field {
                    $( $name => self.$field = $crate::traits::FieldValue::from_value(value)?, )+
                    _ => return Err($crate::value::ValueError::unknown_field(field)),
                }

                Ok(())
            }
        }
    };
}

pub(crate) use impl_field_access;

mod doc_artifact;
mod inference_service;
mod model_artifact;
mod model_version;
mod registered_model;
mod serve_model;
mod serving_environment;

pub use doc_artifact::{DocArtifact, DocArtifactCreate, DocArtifactUpdate};
pub use inference_service::{InferenceService, InferenceServiceCreate, InferenceServiceUpdate};
pub use model_artifact::{ModelArtifact, ModelArtifactCreate, ModelArtifactUpdate};
pub use model_version::{ModelVersion, ModelVersionCreate, ModelVersionUpdate};
pub use registered_model::{RegisteredModel, RegisteredModelCreate, RegisteredModelUpdate};
pub use serve_model::{ServeModel, ServeModelCreate, ServeModelUpdate};
pub use serving_environment::{
    ServingEnvironment, ServingEnvironmentCreate, ServingEnvironmentUpdate,
};

///
/// TESTS
///
