//! Field-level validation for the account signup and login forms.
//!
//! Values and touched state are immutable snapshots owned by the caller; the
//! [`FormValidationEngine`] turns them into an [`ErrorMap`] on every pass.
//! [`FormSession`] bundles that state for consumers that want it managed.

pub mod config;
pub mod error;
pub mod field;
pub mod forms;
pub mod prelude;
pub mod session;
pub mod validation;
pub mod values;

pub use config::ValidationConfig;
pub use error::FormError;
pub use field::FieldName;
pub use forms::{FormKind, LoginForm, SignupForm};
pub use session::FormSession;
pub use validation::{ErrorKind, ErrorMap, FieldError, FormReport, FormValidationEngine, Schema};
pub use values::{FormValues, TouchedSet};
