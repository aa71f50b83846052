//! Prelude module for convenient imports.
//!
//! ```ignore
//! use formcheck::prelude::*;
//! ```

// Forms and their state
pub use crate::field::FieldName;
pub use crate::forms::{FormKind, LoginForm, SignupForm};
pub use crate::session::FormSession;
pub use crate::values::{FormValues, TouchedSet};

// Validation
pub use crate::config::ValidationConfig;
pub use crate::error::FormError;
pub use crate::validation::{
    ErrorKind, ErrorMap, FieldError, FormReport, FormValidationEngine, Validatable,
};
