//! Runtime configuration for DHIS2 provisioning runs.
//!
//! Configuration is resolved once at process startup from a JSON file and
//! then passed into the client, rather than read from the environment during
//! a run. The file carries the DHIS2 base URL and the basic-auth credentials;
//! no defaults are substituted for missing fields.

use crate::constants::DEFAULT_CONFIG_PATH;
use crate::{ProvisionError, ProvisionResult};
use serde::Deserialize;
use std::path::Path;

/// Connection settings for a DHIS2 instance.
#[derive(Clone, Debug, Deserialize)]
pub struct Dhis2Config {
    /// Base URL of the instance, e.g. `https://dhis2.example.org`.
    pub dhis2_url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
}

impl Dhis2Config {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::ConfigRead`] if the file cannot be read and
    /// [`ProvisionError::ConfigParse`] if it is not valid JSON or is missing
    /// a required field.
    pub fn load(path: &Path) -> ProvisionResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(ProvisionError::ConfigRead)?;
        serde_json::from_str(&contents).map_err(ProvisionError::ConfigParse)
    }

    /// Load configuration from the default path (`config/config.json`).
    pub fn load_default() -> ProvisionResult<Self> {
        Self::load(Path::new(DEFAULT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_valid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{
  "dhis2_url": "https://dhis2.example.org/",
  "username": "admin",
  "password": "district"
}"#,
        )
        .unwrap();

        let config = Dhis2Config::load(&path).expect("valid config");
        assert_eq!(config.dhis2_url, "https://dhis2.example.org/");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "district");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("does-not-exist.json");

        let err = Dhis2Config::load(&path).expect_err("missing file");
        assert!(matches!(err, ProvisionError::ConfigRead(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Dhis2Config::load(&path).expect_err("malformed json");
        assert!(matches!(err, ProvisionError::ConfigParse(_)));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"dhis2_url": "https://dhis2.example.org"}"#).unwrap();

        let err = Dhis2Config::load(&path).expect_err("missing credentials");
        assert!(matches!(err, ProvisionError::ConfigParse(_)));
    }
}
