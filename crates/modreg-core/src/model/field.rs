use std::fmt;

///
/// FieldRole
///
/// Who may write a field, and when.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldRole {
    /// Assigned by the storage side only; never accepted from a client.
    ServerGenerated,
    /// Settable in a create payload; never changed afterwards.
    ImmutableAfterCreate,
    /// Replaced by an update payload whenever present.
    Editable,
}

impl FieldRole {
    pub const ALL: [Self; 3] = [
        Self::ServerGenerated,
        Self::ImmutableAfterCreate,
        Self::Editable,
    ];

    /// Whether a create payload may carry this field.
    #[must_use]
    pub const fn accepts_create(self) -> bool {
        matches!(self, Self::ImmutableAfterCreate | Self::Editable)
    }

    /// Whether an update payload may carry this field.
    #[must_use]
    pub const fn accepts_update(self) -> bool {
        matches!(self, Self::Editable)
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ServerGenerated => "server-generated",
            Self::ImmutableAfterCreate => "immutable",
            Self::Editable => "editable",
        };

        f.write_str(label)
    }
}

///
/// EnumModel
/// Closed set of wire tokens for an enumerated field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnumModel {
    pub name: &'static str,
    pub tokens: &'static [&'static str],
}

impl EnumModel {
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token)
    }
}

///
/// FieldShape
///
/// Value shape a field accepts.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldShape {
    Text,
    Timestamp,
    Enum(EnumModel),
    Properties,
}

impl FieldShape {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Enum(_) => "enum",
            Self::Properties => "properties",
        }
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(model) => write!(f, "enum {}", model.name),
            other => f.write_str(other.label()),
        }
    }
}

///
/// FieldModel
/// Policy-table row for one field of one entity kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Canonical (wire) field name.
    pub name: &'static str,
    pub role: FieldRole,
    pub shape: FieldShape,
    /// Must be present and non-blank in a create payload.
    pub required: bool,
}

impl FieldModel {
    #[must_use]
    pub const fn server(name: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            role: FieldRole::ServerGenerated,
            shape,
            required: false,
        }
    }

    #[must_use]
    pub const fn immutable(name: &'static str) -> Self {
        Self {
            name,
            role: FieldRole::ImmutableAfterCreate,
            shape: FieldShape::Text,
            required: false,
        }
    }

    #[must_use]
    pub const fn editable(name: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            role: FieldRole::Editable,
            shape,
            required: false,
        }
    }

    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Canonical name comparison, ASCII case-insensitive.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
