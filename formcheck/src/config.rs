//! Tunable parameters for the built-in form schemas.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_NAME_PATTERN: &str = r"^[a-zA-Z]+$";
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Validation settings. Every key is optional when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum password length, in characters.
    pub min_password_length: usize,
    /// Pattern the trimmed first and last name must match.
    pub name_pattern: String,
    /// Pattern the raw email value must match.
    pub email_pattern: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"min_password_length": 12}"#).unwrap();
        assert_eq!(config.min_password_length, 12);
        assert_eq!(config.name_pattern, DEFAULT_NAME_PATTERN);
        assert_eq!(config.email_pattern, DEFAULT_EMAIL_PATTERN);
    }
}
