//! Loading validation settings and payloads from disk.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use formcheck::{FormValues, ValidationConfig};
use log::{debug, info};

use crate::error::CliError;
use crate::paths;

/// Resolve the settings: an explicit path must exist, the default path may not.
pub fn load_config(explicit: Option<&Path>) -> Result<ValidationConfig, CliError> {
    resolve_config(explicit, paths::config_file())
}

fn resolve_config(
    explicit: Option<&Path>,
    default: Option<PathBuf>,
) -> Result<ValidationConfig, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config file, using defaults");
                return Ok(ValidationConfig::default());
            }
        },
    };

    let text = read_source(&path)?;
    let config = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.clone(),
        source,
    })?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Read a JSON object of field values from a file or stdin (`-`).
pub fn load_values(path: &Path) -> Result<FormValues, CliError> {
    let text = read_source(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: PathBuf::from(path),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(read_err)?;
        Ok(text)
    } else {
        fs::read_to_string(path).map_err(read_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use formcheck::FieldName;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_missing_default_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config(None, Some(dir.path().join("config.json"))).unwrap();
        assert_eq!(config, ValidationConfig::default());

        let config = resolve_config(None, None).unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_default_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "config.json", r#"{"min_password_length": 10}"#);
        let config = resolve_config(None, Some(path)).unwrap();
        assert_eq!(config.min_password_length, 10);
    }

    #[test]
    fn test_malformed_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "config.json", "{ not json");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[test]
    fn test_load_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "payload.json", r#"{"email":"a@b.c","password":"x"}"#);
        let values = load_values(&path).unwrap();
        assert_eq!(values.get(FieldName::Email), "a@b.c");
        assert_eq!(values.get(FieldName::Password), "x");
    }

    #[test]
    fn test_unknown_payload_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "payload.json", r#"{"username":"x"}"#);
        let err = load_values(&path).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[test]
    fn test_malformed_payload_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "payload.json", r#"{"email": "#);
        let err = load_values(&path).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
    }
}
