use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Which kind of rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The field was empty (or blank, for trimmed fields).
    Required,
    /// The value has the wrong shape or length.
    FormatInvalid,
    /// The value disagrees with the field it must match.
    Mismatch,
}

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    /// Message shown next to the input.
    pub message: String,
}

/// Field name to error. A field absent from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of checking one field: `Some` sets, `None` removes.
    pub(crate) fn apply(&mut self, field: FieldName, outcome: Option<FieldError>) {
        match outcome {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message for a field, if it currently fails.
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The earliest failing field in form order (for focusing).
    pub fn first_error(&self) -> Option<(FieldName, &FieldError)> {
        self.errors.iter().next().map(|(field, error)| (*field, error))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

/// Result of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub errors: ErrorMap,
}

impl FormReport {
    /// Submit gate: true when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}
