//! Snapshots of what the user has typed and which inputs they have left.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Current value of every field on a form.
///
/// Owned and mutated by the consumer; the engine only reads it. A missing
/// field reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<FieldName, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set the value of a field, replacing any previous value.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Value of a field, or `""` when it was never set.
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Fields the user has blurred at least once.
///
/// Grows monotonically for the life of a form session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchedSet {
    fields: BTreeSet<FieldName>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a field as touched.
    pub fn touch(&mut self, field: FieldName) {
        self.fields.insert(field);
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Forget every touched field. Only a form reset should call this.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().copied()
    }
}

impl FromIterator<FieldName> for TouchedSet {
    fn from_iter<I: IntoIterator<Item = FieldName>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
