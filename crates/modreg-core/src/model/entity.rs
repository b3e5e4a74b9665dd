use crate::model::{
    field::{FieldModel, FieldRole},
    kind::EntityKind,
};

///
/// EntityModel
/// Static field schema and role assignment for one entity kind.
///

#[derive(Debug)]
pub struct EntityModel {
    pub kind: EntityKind,
    /// Ordered field list; every field of the record appears exactly once.
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    /// Resolve a field by name, ASCII case-insensitively.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.matches(name))
    }

    #[must_use]
    pub fn role_of(&self, name: &str) -> Option<FieldRole> {
        self.field(name).map(|field| field.role)
    }

    pub fn fields_with_role(&self, role: FieldRole) -> impl Iterator<Item = &'static FieldModel> {
        self.fields.iter().filter(move |field| field.role == role)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldModel> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}
