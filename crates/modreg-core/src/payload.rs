use crate::{traits::FieldSource, value::Value};
use std::borrow::Cow;

///
/// FieldSet
///
/// Ordered list of fields that are *present* in a payload.
///
/// Typed payloads lower themselves into a `FieldSet`; dynamically
/// constructed payloads build one directly. A field that is not in the set
/// is absent. `Value::Null` is present-and-empty, which clears an optional
/// field on overlay.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSet {
    entries: Vec<(Cow<'static, str>, Value)>,
}

impl FieldSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a present field.
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Add a field only when the payload carries it.
    #[must_use]
    pub fn with_present<V: Into<Value>>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a field with this exact name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), v))
    }
}

impl IntoIterator for FieldSet {
    type Item = (Cow<'static, str>, Value);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N, V> FromIterator<(N, V)> for FieldSet
where
    N: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl FieldSource for FieldSet {
    fn into_field_set(self) -> FieldSet {
        self
    }
}

///
/// TESTS
///
