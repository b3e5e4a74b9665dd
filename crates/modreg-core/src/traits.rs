use crate::{
    model::{EntityKind, EntityModel, EnumModel},
    payload::FieldSet,
    policy,
    value::{Value, ValueError},
};
use std::fmt::Debug;

///
/// WireEnum
///
/// Enumeration with a closed set of wire tokens.
///

pub trait WireEnum: Copy + Sized + 'static {
    const MODEL: EnumModel;

    fn as_token(self) -> &'static str;

    fn from_token(token: &str) -> Option<Self>;
}

///
/// FieldValue
///
/// Conversion between a record field's Rust type and a `Value`.
///

pub trait FieldValue: Sized {
    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self, ValueError>;
}

///
/// FieldValues
///
/// Read access to a record's fields by canonical name.
/// Returns `None` when the record has no such field.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// FieldWrite
///
/// Write access to a record's fields by canonical name.
/// Callers are expected to have resolved the field through the policy table.
///

pub trait FieldWrite {
    fn set_value(&mut self, field: &str, value: Value) -> Result<(), ValueError>;
}

///
/// FieldSource
///
/// A payload that can enumerate the fields it actually carries.
/// Absent fields are simply not yielded; presence is the signal.
///

pub trait FieldSource {
    fn into_field_set(self) -> FieldSet;
}

///
/// Entity
///
/// A persisted record kind with its create and update payload types.
///

pub trait Entity: Clone + Debug + Default + PartialEq + FieldValues + FieldWrite {
    const KIND: EntityKind;

    /// Token the storage side stamps into `artifactType`, for artifact kinds.
    const ARTIFACT_TYPE: Option<&'static str> = None;

    /// Payload accepted when creating this record.
    type Create: FieldSource;

    /// Sparse payload accepted when updating this record.
    type Update: FieldSource + Default;

    #[must_use]
    fn model() -> &'static EntityModel {
        policy::model(Self::KIND)
    }
}
