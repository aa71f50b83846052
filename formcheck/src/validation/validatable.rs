//! Validatable trait for typed form payloads.

use super::engine::FormValidationEngine;
use super::result::FormReport;
use crate::forms::FormKind;
use crate::values::FormValues;

/// Trait for payloads that can be validated as one of the account forms.
///
/// This trait provides a common interface for turning a typed struct into the
/// field/value snapshot the engine reads.
pub trait Validatable {
    /// The form this payload belongs to.
    fn kind(&self) -> FormKind;

    /// Extract the current values for validation.
    fn form_values(&self) -> FormValues;

    /// Run a full-form pass.
    fn validate(&self, engine: &FormValidationEngine) -> FormReport {
        engine.validate_form(&self.form_values())
    }
}
