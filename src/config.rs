use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CompanionError;

/// Application configuration. Every field has a default, so a missing or
/// partial config file still yields a usable config. The identity/store
/// fields are only needed once a user signs in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the Codeforces REST API.
    pub codeforces_api_base: String,
    /// Base URL of the identity service (sign-up / sign-in).
    pub identity_api_base: String,
    /// Base URL of the document store.
    pub store_api_base: String,
    /// Hosted project id, used to address the per-user document collection.
    pub project_id: String,
    /// API key passed to the identity service.
    pub api_key: String,
    /// Per-request timeout in seconds for all HTTP clients.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            codeforces_api_base: "https://codeforces.com/api".to_string(),
            identity_api_base: "https://identitytoolkit.googleapis.com/v1".to_string(),
            store_api_base: "https://firestore.googleapis.com/v1".to_string(),
            project_id: String::new(),
            api_key: String::new(),
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Default location of the config file: `<config dir>/cf-companion/config.toml`.
    pub fn default_path() -> Result<PathBuf, CompanionError> {
        let base = dirs::config_dir()
            .ok_or_else(|| CompanionError::Config("No config directory on this platform".to_string()))?;
        Ok(base.join("cf-companion").join("config.toml"))
    }

    /// Load the config from the default location. A missing file is not an
    /// error: defaults apply.
    pub fn load() -> Result<Self, CompanionError> {
        let path = Self::default_path()?;
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| CompanionError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        let config = Self::from_toml(&raw)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, CompanionError> {
        toml::from_str(raw).map_err(|e| {
            warn!("Failed to parse config: {}", e);
            CompanionError::Config(format!("Invalid config file: {}", e))
        })
    }

    /// Check that every endpoint base is a parseable URL before any client
    /// is built from it.
    pub fn validate(&self) -> Result<(), CompanionError> {
        for (name, value) in [
            ("codeforces_api_base", &self.codeforces_api_base),
            ("identity_api_base", &self.identity_api_base),
            ("store_api_base", &self.store_api_base),
        ] {
            url::Url::parse(value)
                .map_err(|e| CompanionError::Config(format!("Invalid {}: {}", name, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_codeforces() {
        let config = AppConfig::default();
        assert_eq!(config.codeforces_api_base, "https://codeforces.com/api");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml(
            r#"
            project_id = "my-project"
            api_key = "k-123"
            "#,
        )
        .unwrap();
        assert_eq!(config.project_id, "my-project");
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.codeforces_api_base, "https://codeforces.com/api");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = AppConfig::from_toml("request_timeout_secs = \"fast\"");
        assert!(matches!(result, Err(CompanionError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());
        config.store_api_base = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(CompanionError::Config(_))
        ));
    }
}
