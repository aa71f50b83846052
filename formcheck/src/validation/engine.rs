//! Pure validation passes over form snapshots.

use log::debug;

use super::result::{ErrorMap, FormReport};
use super::validator::Schema;
use crate::config::ValidationConfig;
use crate::error::FormError;
use crate::field::FieldName;
use crate::forms::FormKind;
use crate::values::{FormValues, TouchedSet};

/// Computes field errors from the current values of a form.
///
/// The engine holds only its schema. Every pass reads an immutable snapshot
/// and returns a new [`ErrorMap`]; nothing is mutated in place.
#[derive(Debug)]
pub struct FormValidationEngine {
    schema: Schema,
}

impl FormValidationEngine {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Engine for one of the built-in account forms.
    pub fn for_kind(kind: FormKind, config: &ValidationConfig) -> Result<Self, FormError> {
        Ok(Self::new(kind.schema(config)?))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fields this engine validates, in form order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.schema.fields()
    }

    /// Revalidate one field after an edit or blur.
    ///
    /// Starts from `prior` and replaces only the entries this pass decides:
    /// the field itself, plus every field that depends on it and has been
    /// touched and is non-empty. A field with no rules ends up without an
    /// entry.
    pub fn validate_field(
        &self,
        field: FieldName,
        values: &FormValues,
        touched: &TouchedSet,
        prior: &ErrorMap,
    ) -> ErrorMap {
        let mut errors = prior.clone();
        errors.apply(field, self.schema.check(field, values));

        for &dependent in self.schema.dependents(field) {
            if dependent == field {
                continue;
            }
            if touched.contains(dependent) && !values.get(dependent).is_empty() {
                errors.apply(dependent, self.schema.check(dependent, values));
                debug!("Rechecked {} after change to {}", dependent, field);
            }
        }

        debug!(
            "Validated field {}: {}",
            field,
            if errors.contains(field) { "invalid" } else { "ok" }
        );
        errors
    }

    /// Validate every field, ignoring touched state.
    pub fn validate_form(&self, values: &FormValues) -> FormReport {
        let mut errors = ErrorMap::new();
        for field in self.schema.fields() {
            errors.apply(field, self.schema.check(field, values));
        }

        debug!(
            "Validated form: {} field(s), {} error(s)",
            self.schema.fields().count(),
            errors.len()
        );
        FormReport { errors }
    }
}
