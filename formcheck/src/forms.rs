//! The signup and login forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::error::FormError;
use crate::field::FieldName;
use crate::validation::{Schema, Validatable};
use crate::values::FormValues;

pub const MSG_PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const MSG_CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const MSG_EMAIL_INVALID: &str = "Email is not valid";

/// Which account form is being filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Signup,
    Login,
}

impl FormKind {
    /// Fields shown on this form, in order.
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            Self::Signup => &FieldName::ALL,
            Self::Login => &[FieldName::Email, FieldName::Password],
        }
    }

    /// Build the rule schema for this form.
    pub fn schema(&self, config: &ValidationConfig) -> Result<Schema, FormError> {
        match self {
            Self::Signup => signup_schema(config),
            Self::Login => login_schema(config),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signup => f.write_str("signup"),
            Self::Login => f.write_str("login"),
        }
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signup" => Ok(Self::Signup),
            "login" => Ok(Self::Login),
            other => Err(format!("unknown form '{other}' (expected signup or login)")),
        }
    }
}

fn required_message(field: FieldName) -> String {
    match field {
        FieldName::ConfirmPassword => MSG_CONFIRM_PASSWORD_REQUIRED.to_string(),
        other => format!("{} is required", other.label()),
    }
}

fn letters_message(field: FieldName) -> String {
    format!("{} must contain only letters", field.label())
}

fn password_length_message(min: usize) -> String {
    format!("Password must be at least {min} characters")
}

/// firstName, lastName, email, password, confirmPassword.
pub fn signup_schema(config: &ValidationConfig) -> Result<Schema, FormError> {
    Schema::builder()
        .field(FieldName::FirstName)
        .required(required_message(FieldName::FirstName))
        .trimmed_pattern(&config.name_pattern, letters_message(FieldName::FirstName))
        .field(FieldName::LastName)
        .required(required_message(FieldName::LastName))
        .trimmed_pattern(&config.name_pattern, letters_message(FieldName::LastName))
        .field(FieldName::Email)
        .required(required_message(FieldName::Email))
        .pattern(&config.email_pattern, MSG_EMAIL_INVALID)
        .field(FieldName::Password)
        .non_empty(required_message(FieldName::Password))
        .min_length(
            config.min_password_length,
            password_length_message(config.min_password_length),
        )
        .field(FieldName::ConfirmPassword)
        .non_empty(required_message(FieldName::ConfirmPassword))
        .matches(FieldName::Password, MSG_PASSWORDS_DO_NOT_MATCH)
        .build()
}

/// email and password, with the same rules as signup.
pub fn login_schema(config: &ValidationConfig) -> Result<Schema, FormError> {
    Schema::builder()
        .field(FieldName::Email)
        .required(required_message(FieldName::Email))
        .pattern(&config.email_pattern, MSG_EMAIL_INVALID)
        .field(FieldName::Password)
        .non_empty(required_message(FieldName::Password))
        .min_length(
            config.min_password_length,
            password_length_message(config.min_password_length),
        )
        .build()
}

/// Typed signup payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Validatable for SignupForm {
    fn kind(&self) -> FormKind {
        FormKind::Signup
    }

    fn form_values(&self) -> FormValues {
        FormValues::new()
            .with(FieldName::FirstName, self.first_name.as_str())
            .with(FieldName::LastName, self.last_name.as_str())
            .with(FieldName::Email, self.email.as_str())
            .with(FieldName::Password, self.password.as_str())
            .with(FieldName::ConfirmPassword, self.confirm_password.as_str())
    }
}

/// Typed login payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validatable for LoginForm {
    fn kind(&self) -> FormKind {
        FormKind::Login
    }

    fn form_values(&self) -> FormValues {
        FormValues::new()
            .with(FieldName::Email, self.email.as_str())
            .with(FieldName::Password, self.password.as_str())
    }
}
