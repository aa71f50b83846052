//! Form validation system.
//!
//! A [`Schema`] lists the fields of a form and the rules for each. The
//! [`FormValidationEngine`] runs single-field passes while the user edits and
//! a full pass on submit.
//!
//! # Example
//!
//! ```
//! use formcheck::validation::{FormValidationEngine, Schema};
//! use formcheck::{FieldName, FormValues};
//!
//! let schema = Schema::builder()
//!     .field(FieldName::Email)
//!         .required("Email is required")
//!         .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", "Email is not valid")
//!     .build()
//!     .unwrap();
//! let engine = FormValidationEngine::new(schema);
//!
//! let report = engine.validate_form(&FormValues::new().with(FieldName::Email, "nope"));
//! assert_eq!(report.errors.message(FieldName::Email), Some("Email is not valid"));
//! ```

mod engine;
mod result;
mod rule;
mod validatable;
mod validator;

pub use engine::FormValidationEngine;
pub use result::{ErrorKind, ErrorMap, FieldError, FormReport};
pub use rule::{Check, Rule};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Schema, SchemaBuilder};
