//! Schema builder for the fluent validation API.

use std::collections::BTreeMap;

use regex::Regex;

use super::result::FieldError;
use super::rule::{Check, Rule};
use crate::error::FormError;
use crate::field::FieldName;
use crate::values::FormValues;

/// Internal representation of a field and its ordered rules.
#[derive(Debug)]
struct FieldEntry {
    name: FieldName,
    rules: Vec<Rule>,
}

/// The fields of one form and the rules registered for each.
///
/// Rules run in registration order and the first failure wins. Cross-field
/// rules ([`Check::Matches`]) are indexed in reverse so that validating the
/// referenced field can re-check its dependents.
///
/// # Example
///
/// ```
/// use formcheck::{FieldName, Schema};
///
/// let schema = Schema::builder()
///     .field(FieldName::Password)
///         .non_empty("Password is required")
///         .min_length(8, "Password must be at least 8 characters")
///     .field(FieldName::ConfirmPassword)
///         .non_empty("Please confirm your password")
///         .matches(FieldName::Password, "Passwords do not match")
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.dependents(FieldName::Password), &[FieldName::ConfirmPassword]);
/// ```
#[derive(Debug)]
pub struct Schema {
    fields: Vec<FieldEntry>,
    dependents: BTreeMap<FieldName, Vec<FieldName>>,
}

impl Schema {
    /// Start building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder {
            fields: Vec::new(),
            error: None,
        }
    }

    /// Fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().map(|entry| entry.name)
    }

    /// Rules registered for a field; empty when the field is unknown.
    pub fn rules(&self, field: FieldName) -> &[Rule] {
        self.entry(field).map(|e| e.rules.as_slice()).unwrap_or(&[])
    }

    /// Fields whose rules read `field`.
    pub fn dependents(&self, field: FieldName) -> &[FieldName] {
        self.dependents.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Run a field's rule chain, returning the first failure.
    pub fn check(&self, field: FieldName, values: &FormValues) -> Option<FieldError> {
        self.rules(field)
            .iter()
            .find_map(|rule| rule.evaluate(field, values).err())
    }

    fn entry(&self, field: FieldName) -> Option<&FieldEntry> {
        self.fields.iter().find(|entry| entry.name == field)
    }
}

/// Builder for a [`Schema`].
pub struct SchemaBuilder {
    fields: Vec<FieldEntry>,
    error: Option<FormError>,
}

impl SchemaBuilder {
    /// Add a field to validate.
    pub fn field(self, name: FieldName) -> FieldBuilder {
        FieldBuilder {
            builder: self,
            name,
            rules: Vec::new(),
        }
    }

    /// Finish the schema, reporting the first pattern that failed to compile.
    pub fn build(self) -> Result<Schema, FormError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut dependents: BTreeMap<FieldName, Vec<FieldName>> = BTreeMap::new();
        for entry in &self.fields {
            for rule in &entry.rules {
                if let Some(other) = rule.check().dependency() {
                    let list = dependents.entry(other).or_default();
                    if !list.contains(&entry.name) {
                        list.push(entry.name);
                    }
                }
            }
        }

        Ok(Schema {
            fields: self.fields,
            dependents,
        })
    }

    fn push(&mut self, name: FieldName, rules: Vec<Rule>) {
        match self.fields.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.rules.extend(rules),
            None => self.fields.push(FieldEntry { name, rules }),
        }
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    builder: SchemaBuilder,
    name: FieldName,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom rule over the whole form.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(Check::Custom(Box::new(f)), msg));
        self
    }

    /// Require the field to be non-blank after trimming.
    pub fn required(mut self, msg: impl Into<String>) -> Self {
        self.rules.push(Rule::new(Check::Required { trim: true }, msg));
        self
    }

    /// Require the field to be non-empty. Whitespace counts as content.
    pub fn non_empty(mut self, msg: impl Into<String>) -> Self {
        self.rules.push(Rule::new(Check::Required { trim: false }, msg));
        self
    }

    /// Require the raw value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        self.push_pattern(pattern, false, msg)
    }

    /// Require the trimmed value to match a regex pattern.
    pub fn trimmed_pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        self.push_pattern(pattern, true, msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(mut self, min: usize, msg: impl Into<String>) -> Self {
        self.rules.push(Rule::new(Check::MinLength(min), msg));
        self
    }

    /// Require the value to equal another field's value.
    pub fn matches(mut self, other: FieldName, msg: impl Into<String>) -> Self {
        self.rules.push(Rule::new(Check::Matches(other), msg));
        self
    }

    /// Continue to the next field.
    pub fn field(self, name: FieldName) -> FieldBuilder {
        self.finalize().field(name)
    }

    /// Finalize and build the schema.
    pub fn build(self) -> Result<Schema, FormError> {
        self.finalize().build()
    }

    fn push_pattern(mut self, pattern: &str, trim: bool, msg: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => self.rules.push(Rule::new(Check::Pattern { regex, trim }, msg)),
            Err(source) => {
                if self.builder.error.is_none() {
                    self.builder.error = Some(FormError::InvalidPattern {
                        field: self.name,
                        source,
                    });
                }
            }
        }
        self
    }

    fn finalize(self) -> SchemaBuilder {
        let mut builder = self.builder;
        builder.push(self.name, self.rules);
        builder
    }
}
