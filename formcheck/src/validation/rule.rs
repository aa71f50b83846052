//! Single-field rules.

use std::fmt;

use regex::Regex;

use super::result::{ErrorKind, FieldError};
use crate::field::FieldName;
use crate::values::FormValues;

/// Type alias for custom predicate closures.
type Predicate = Box<dyn Fn(&FormValues) -> bool + Send + Sync>;

/// What a rule checks.
pub enum Check {
    /// Value must be non-empty; with `trim`, whitespace-only also fails.
    Required { trim: bool },
    /// Value must match the pattern, optionally after trimming.
    Pattern { regex: Regex, trim: bool },
    /// Value must have at least this many characters.
    MinLength(usize),
    /// Value must equal another field's value exactly.
    Matches(FieldName),
    /// Arbitrary predicate over the whole form.
    Custom(Predicate),
}

impl Check {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Required { .. } => ErrorKind::Required,
            Self::Pattern { .. } | Self::MinLength(_) | Self::Custom(_) => {
                ErrorKind::FormatInvalid
            }
            Self::Matches(_) => ErrorKind::Mismatch,
        }
    }

    /// The other field this check reads, if any.
    pub fn dependency(&self) -> Option<FieldName> {
        match self {
            Self::Matches(other) => Some(*other),
            _ => None,
        }
    }

    fn passes(&self, value: &str, values: &FormValues) -> bool {
        match self {
            Self::Required { trim: true } => !value.trim().is_empty(),
            Self::Required { trim: false } => !value.is_empty(),
            Self::Pattern { regex, trim } => {
                regex.is_match(if *trim { value.trim() } else { value })
            }
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::Matches(other) => value == values.get(*other),
            Self::Custom(f) => f(values),
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { trim } => f.debug_struct("Required").field("trim", trim).finish(),
            Self::Pattern { regex, trim } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("trim", trim)
                .finish(),
            Self::MinLength(min) => f.debug_tuple("MinLength").field(min).finish(),
            Self::Matches(other) => f.debug_tuple("Matches").field(other).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A check paired with the message shown when it fails.
#[derive(Debug)]
pub struct Rule {
    check: Check,
    message: String,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    /// Evaluate against `field`'s value in `values`.
    pub fn evaluate(&self, field: FieldName, values: &FormValues) -> Result<(), FieldError> {
        if self.check.passes(values.get(field), values) {
            Ok(())
        } else {
            Err(FieldError {
                kind: self.check.kind(),
                message: self.message.clone(),
            })
        }
    }
}
