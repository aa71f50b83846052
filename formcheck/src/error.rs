//! Error types

use crate::field::FieldName;

/// Errors raised while building or addressing a form.
///
/// Validation outcomes are never reported through this type; they are data in
/// an [`ErrorMap`](crate::validation::ErrorMap).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A field name that is not part of any known form.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A configured pattern failed to compile.
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: FieldName,
        #[source]
        source: regex::Error,
    },
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
