//! Mutable state for one form while the user fills it in.

use log::debug;

use crate::field::FieldName;
use crate::validation::{ErrorMap, FormValidationEngine};
use crate::values::{FormValues, TouchedSet};

/// One logical form session: values, touched fields, current errors and
/// whether a submit was attempted.
///
/// Errors are always computed, but only surfaced through
/// [`visible_error`](Self::visible_error) once the field has been blurred or
/// the form has been submitted.
#[derive(Debug)]
pub struct FormSession<'a> {
    engine: &'a FormValidationEngine,
    values: FormValues,
    touched: TouchedSet,
    errors: ErrorMap,
    submitted: bool,
}

impl<'a> FormSession<'a> {
    pub fn new(engine: &'a FormValidationEngine) -> Self {
        Self::with_values(engine, FormValues::new())
    }

    /// Start a session from previously saved values (e.g. a restored draft).
    pub fn with_values(engine: &'a FormValidationEngine, values: FormValues) -> Self {
        Self {
            engine,
            values,
            touched: TouchedSet::new(),
            errors: ErrorMap::new(),
            submitted: false,
        }
    }

    /// Store a keystroke's result and revalidate that field.
    pub fn change(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
        self.revalidate(field);
    }

    /// Mark a field as touched and revalidate it.
    pub fn blur(&mut self, field: FieldName) {
        self.touched.touch(field);
        self.revalidate(field);
    }

    /// Validate every field. Returns true when the form may be submitted.
    pub fn submit(&mut self) -> bool {
        self.submitted = true;
        let report = self.engine.validate_form(&self.values);
        let valid = report.is_valid();
        self.errors = report.into_errors();
        debug!("Form submit: {}", if valid { "accepted" } else { "blocked" });
        valid
    }

    /// Clear values, touched fields, errors and the submit flag.
    pub fn reset(&mut self) {
        self.values.clear();
        self.touched.clear();
        self.errors = ErrorMap::new();
        self.submitted = false;
    }

    /// Message to display for a field, if any.
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.submitted || self.touched.contains(field) {
            self.errors.message(field)
        } else {
            None
        }
    }

    /// Every message that should currently be displayed, in form order.
    pub fn visible_errors(&self) -> Vec<(FieldName, &str)> {
        self.errors
            .iter()
            .filter(|(field, _)| self.submitted || self.touched.contains(*field))
            .map(|(field, error)| (field, error.message.as_str()))
            .collect()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    /// All computed errors, including ones not yet visible.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// True when nothing has been touched and no submit was attempted.
    pub fn is_pristine(&self) -> bool {
        self.touched.is_empty() && !self.submitted
    }

    fn revalidate(&mut self, field: FieldName) {
        self.errors = self
            .engine
            .validate_field(field, &self.values, &self.touched, &self.errors);
    }
}
