//! Subcommand implementations.

use formcheck::{ErrorMap, FormValidationEngine, TouchedSet, ValidationConfig};
use log::info;

use crate::cli::{FieldArgs, ValidateArgs};
use crate::error::CliError;
use crate::settings::load_values;

/// Full-form pass. Returns whether the payload may be submitted.
pub fn run_validate(args: &ValidateArgs, config: &ValidationConfig) -> Result<bool, CliError> {
    let engine = FormValidationEngine::for_kind(args.form, config)?;
    let values = load_values(&args.payload)?;
    let report = engine.validate_form(&values);
    info!("{} form: {} error(s)", args.form, report.errors.len());

    print_errors(&report.errors, args.json)?;
    Ok(report.is_valid())
}

/// Single-field pass with the given touched fields.
pub fn run_field(args: &FieldArgs, config: &ValidationConfig) -> Result<bool, CliError> {
    let engine = FormValidationEngine::for_kind(args.form, config)?;
    let values = load_values(&args.payload)?;
    let mut touched: TouchedSet = args.touched.iter().copied().collect();
    touched.touch(args.field);

    let errors = engine.validate_field(args.field, &values, &touched, &ErrorMap::new());
    print_errors(&errors, args.json)?;
    Ok(errors.is_empty())
}

pub fn run_config(config: &ValidationConfig) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn print_errors(errors: &ErrorMap, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(errors)?);
    } else if errors.is_empty() {
        println!("valid");
    } else {
        for (field, error) in errors.iter() {
            println!("{field}: {}", error.message);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use formcheck::{FieldName, FormKind};

    use super::*;

    fn payload(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("payload.json");
        fs::write(&path, contents).unwrap();
        path
    }

    fn validate_args(form: FormKind, payload: PathBuf) -> ValidateArgs {
        ValidateArgs {
            form,
            json: true,
            payload,
        }
    }

    #[test]
    fn test_validate_accepts_valid_login() {
        let dir = tempfile::tempdir().unwrap();
        let path = payload(&dir, r#"{"email":"a@b.c","password":"abcdefgh"}"#);
        let args = validate_args(FormKind::Login, path);
        assert!(run_validate(&args, &ValidationConfig::default()).unwrap());
    }

    #[test]
    fn test_validate_rejects_invalid_signup() {
        let dir = tempfile::tempdir().unwrap();
        let path = payload(&dir, r#"{"firstName":"J0hn","email":"a@b.c"}"#);
        let args = validate_args(FormKind::Signup, path);
        assert!(!run_validate(&args, &ValidationConfig::default()).unwrap());
    }

    #[test]
    fn test_field_rejects_short_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = payload(&dir, r#"{"password":"short"}"#);
        let args = FieldArgs {
            form: FormKind::Login,
            field: FieldName::Password,
            touched: Vec::new(),
            json: false,
            payload: path,
        };
        assert!(!run_field(&args, &ValidationConfig::default()).unwrap());
    }

    #[test]
    fn test_field_rechecks_touched_confirm() {
        let dir = tempfile::tempdir().unwrap();
        let path = payload(
            &dir,
            r#"{"password":"abcdefghi","confirmPassword":"abcdefgh"}"#,
        );
        let args = FieldArgs {
            form: FormKind::Signup,
            field: FieldName::Password,
            touched: vec![FieldName::ConfirmPassword],
            json: true,
            payload: path,
        };
        assert!(!run_field(&args, &ValidationConfig::default()).unwrap());

        let args = FieldArgs {
            touched: Vec::new(),
            ..args
        };
        assert!(run_field(&args, &ValidationConfig::default()).unwrap());
    }

    #[test]
    fn test_missing_payload_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = validate_args(FormKind::Login, dir.path().join("nope.json"));
        assert!(matches!(
            run_validate(&args, &ValidationConfig::default()),
            Err(CliError::Read { .. })
        ));
    }
}
