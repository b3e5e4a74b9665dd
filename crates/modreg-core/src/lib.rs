//! Core of the model-registry converter: entity records and payloads, the
//! static field-policy table, the creation mapper and the update overlay
//! engine.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod convert;
pub mod entity;
pub mod error;
pub mod model;
pub mod obs;
pub mod payload;
pub mod policy;
pub mod properties;
pub mod record;
pub mod stamp;
pub mod traits;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Domain vocabulary plus the two engine entry points.
///

pub mod prelude {
    pub use crate::{
        convert::{create, create_record, overlay, overlay_update},
        entity::*,
        error::ConvertError,
        model::{EntityKind, FieldRole},
        payload::FieldSet,
        record::{CreatePayload, Record, UpdatePayload},
        traits::{Entity, FieldValues},
        types::{CustomProperties, MetadataValue, Timestamp},
        value::Value,
    };
}
