pub mod entity;
pub mod field;
pub mod kind;

pub use entity::EntityModel;
pub use field::{EnumModel, FieldModel, FieldRole, FieldShape};
pub use kind::EntityKind;
