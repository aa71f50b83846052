//! Tests for the built-in form schemas, typed payloads and configuration.

use formcheck::prelude::*;
use formcheck::validation::Schema;

#[test]
fn test_form_kind_fields() {
    assert_eq!(FormKind::Signup.fields().len(), 5);
    assert_eq!(
        FormKind::Login.fields(),
        &[FieldName::Email, FieldName::Password]
    );
    assert_eq!("login".parse::<FormKind>().unwrap(), FormKind::Login);
    assert!("register".parse::<FormKind>().is_err());
}

#[test]
fn test_engine_fields_match_kind() {
    let config = ValidationConfig::default();
    for kind in [FormKind::Signup, FormKind::Login] {
        let engine = FormValidationEngine::for_kind(kind, &config).unwrap();
        let fields: Vec<FieldName> = engine.fields().collect();
        assert_eq!(fields, kind.fields());
    }
}

#[test]
fn test_signup_dependency_is_declared() {
    let engine =
        FormValidationEngine::for_kind(FormKind::Signup, &ValidationConfig::default()).unwrap();
    assert_eq!(
        engine.schema().dependents(FieldName::Password),
        &[FieldName::ConfirmPassword]
    );
    assert!(engine.schema().dependents(FieldName::ConfirmPassword).is_empty());
}

#[test]
fn test_typed_signup_payload() {
    let form: SignupForm = serde_json::from_str(
        r#"{
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@x.com",
            "password": "abcdefgh",
            "confirmPassword": "abcdefgh"
        }"#,
    )
    .unwrap();
    let engine = FormValidationEngine::for_kind(form.kind(), &ValidationConfig::default()).unwrap();
    assert!(form.validate(&engine).is_valid());
}

#[test]
fn test_typed_login_payload_missing_keys() {
    let form: LoginForm = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
    let engine = FormValidationEngine::for_kind(form.kind(), &ValidationConfig::default()).unwrap();
    let report = form.validate(&engine);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors.message(FieldName::Password),
        Some("Password is required")
    );
}

#[test]
fn test_config_changes_password_length() {
    let config = ValidationConfig {
        min_password_length: 12,
        ..ValidationConfig::default()
    };
    let engine = FormValidationEngine::for_kind(FormKind::Login, &config).unwrap();
    let values = FormValues::new()
        .with(FieldName::Email, "a@b.c")
        .with(FieldName::Password, "abcdefghijk");
    let report = engine.validate_form(&values);
    assert_eq!(
        report.errors.message(FieldName::Password),
        Some("Password must be at least 12 characters")
    );
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let config = ValidationConfig {
        email_pattern: "([unclosed".to_string(),
        ..ValidationConfig::default()
    };
    let err = FormValidationEngine::for_kind(FormKind::Login, &config).unwrap_err();
    assert!(matches!(
        err,
        FormError::InvalidPattern {
            field: FieldName::Email,
            ..
        }
    ));
}

#[test]
fn test_custom_rule_reads_whole_form() {
    let schema = Schema::builder()
        .field(FieldName::Password)
        .non_empty("Password is required")
        .rule(
            |values| {
                let password = values.get(FieldName::Password).to_lowercase();
                let email = values.get(FieldName::Email).to_lowercase();
                email.is_empty() || !password.contains(&email)
            },
            "Password must not contain your email",
        )
        .build()
        .unwrap();
    let engine = FormValidationEngine::new(schema);
    let values = FormValues::new()
        .with(FieldName::Email, "a@b.c")
        .with(FieldName::Password, "xxA@B.Cxx");
    let report = engine.validate_form(&values);
    assert_eq!(
        report.errors.get(FieldName::Password).map(|e| e.kind),
        Some(ErrorKind::FormatInvalid)
    );
}

#[test]
fn test_error_map_serializes_by_wire_name() {
    let engine =
        FormValidationEngine::for_kind(FormKind::Login, &ValidationConfig::default()).unwrap();
    let report = engine.validate_form(&FormValues::new().with(FieldName::Email, "a@b.c"));
    let json = serde_json::to_value(&report.errors).unwrap();
    assert_eq!(json["password"]["kind"], "required");
    assert_eq!(json["password"]["message"], "Password is required");
    assert!(json.get("email").is_none());
}
