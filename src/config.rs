//! Configuration system for the Namaskar service
//!
//! Settings load from a TOML file. Secrets never live in the file itself:
//! the config names the environment variables that hold them, and the
//! values are read at the point of use.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Identity backends the service can authenticate against
pub const AUTH_PROVIDERS: [&str; 2] = ["local", "firebase"];

/// Generative-text backends the insight layer can call
pub const INSIGHT_PROVIDERS: [&str; 2] = ["gemini", "openai"];

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub auth: AuthSection,
    /// Optional generative-text annotation; absent means `report --annotate`
    /// is unavailable
    pub insight: Option<InsightSection>,
}

/// Local persistence settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreSection {
    /// Data directory override; platform default when unset
    pub data_dir: Option<PathBuf>,
}

/// Identity provider settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSection {
    /// Provider name ("local" or "firebase")
    #[serde(default = "default_auth_provider")]
    pub provider: String,
    /// Environment variable holding the identity API key (firebase only)
    pub api_key_env: Option<String>,
    /// Endpoint override, mainly for tests against a stub server
    pub endpoint: Option<String>,
    /// Lifetime of sessions issued by the local backend
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            provider: default_auth_provider(),
            api_key_env: None,
            endpoint: None,
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

fn default_auth_provider() -> String {
    "local".to_string()
}

fn default_session_ttl_secs() -> u64 {
    3600 // matches the hour-long tokens the hosted backend issues
}

/// Generative-text annotation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightSection {
    /// Provider name ("gemini" or "openai")
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Endpoint override, mainly for tests against a stub server
    pub endpoint: Option<String>,
    /// Optional sampling temperature (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Optional completion length cap
    pub max_tokens: Option<u32>,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Unknown provider '{name}' for {section}, expected one of {expected:?}")]
    UnknownProvider {
        section: &'static str,
        name: String,
        expected: &'static [&'static str],
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AppConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate provider names, required key envs, and value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !AUTH_PROVIDERS.contains(&self.auth.provider.as_str()) {
            return Err(ConfigError::UnknownProvider {
                section: "[auth]",
                name: self.auth.provider.clone(),
                expected: &AUTH_PROVIDERS,
            });
        }
        if self.auth.provider == "firebase" && self.auth.api_key_env.is_none() {
            return Err(ConfigError::InvalidConfig(
                "[auth] provider \"firebase\" requires api_key_env".to_string(),
            ));
        }
        validate_endpoint("[auth]", self.auth.endpoint.as_deref())?;

        if let Some(insight) = &self.insight {
            if !INSIGHT_PROVIDERS.contains(&insight.provider.as_str()) {
                return Err(ConfigError::UnknownProvider {
                    section: "[insight]",
                    name: insight.provider.clone(),
                    expected: &INSIGHT_PROVIDERS,
                });
            }
            if insight.model.is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "[insight] model must not be empty".to_string(),
                ));
            }
            if let Some(t) = insight.temperature {
                if !(0.0..=2.0).contains(&t) {
                    return Err(ConfigError::InvalidConfig(format!(
                        "[insight] temperature {t} outside 0.0..=2.0"
                    )));
                }
            }
            validate_endpoint("[insight]", insight.endpoint.as_deref())?;
        }
        Ok(())
    }

    /// Read the identity API key from the configured environment variable
    pub fn auth_api_key(&self) -> Result<String, ConfigError> {
        let env_name = self.auth.api_key_env.as_deref().ok_or_else(|| {
            ConfigError::InvalidConfig("[auth] api_key_env is not set".to_string())
        })?;
        get_env_var_required(env_name)
    }

    /// Read the insight API key from the configured environment variable
    pub fn insight_api_key(&self) -> Result<String, ConfigError> {
        let insight = self.insight.as_ref().ok_or_else(|| {
            ConfigError::InvalidConfig("[insight] section is not configured".to_string())
        })?;
        get_env_var_required(&insight.api_key_env)
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[store]
data_dir = "/tmp/namaskar-test"

[auth]
provider = "local"

[insight]
provider = "gemini"
model = "gemini-1.5-flash"
api_key_env = "GOOGLE_API_KEY"
temperature = 0.7
max_tokens = 512
"#;
        toml::from_str(toml_content).expect("Test config should parse")
    }
}

fn validate_endpoint(section: &str, endpoint: Option<&str>) -> Result<(), ConfigError> {
    if let Some(raw) = endpoint {
        Url::parse(raw).map_err(|e| {
            ConfigError::InvalidConfig(format!("{section} endpoint '{raw}' is not a URL: {e}"))
        })?;
    }
    Ok(())
}

fn get_env_var_required(env_var_name: &str) -> Result<String, ConfigError> {
    std::env::var(env_var_name).map_err(|_| ConfigError::EnvVarNotFound(env_var_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[store]
data_dir = "/var/lib/namaskar"

[auth]
provider = "firebase"
api_key_env = "FIREBASE_API_KEY"
session_ttl_secs = 7200

[insight]
provider = "gemini"
model = "gemini-1.5-flash"
api_key_env = "GOOGLE_API_KEY"
temperature = 0.7
"#;
        let config: AppConfig = toml::from_str(toml_content).unwrap();
        config.validate().unwrap();
        assert_eq!(
            config.store.data_dir,
            Some(PathBuf::from("/var/lib/namaskar"))
        );
        assert_eq!(config.auth.provider, "firebase");
        assert_eq!(config.auth.session_ttl_secs, 7200);
        let insight = config.insight.unwrap();
        assert_eq!(insight.provider, "gemini");
        assert_eq!(insight.temperature, Some(0.7));
        assert_eq!(insight.max_tokens, None);
    }

    #[test]
    fn test_empty_config_is_usable() {
        let config: AppConfig = toml::from_str("").unwrap();
        config.validate().unwrap();
        assert_eq!(config.auth.provider, "local");
        assert_eq!(config.auth.session_ttl_secs, 3600);
        assert!(config.insight.is_none());
        assert!(config.store.data_dir.is_none());
    }

    #[test]
    fn test_default_matches_empty_file() {
        let parsed: AppConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_unknown_auth_provider_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
[auth]
provider = "supabase"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownProvider {
                section: "[auth]",
                ..
            })
        ));
    }

    #[test]
    fn test_firebase_requires_api_key_env() {
        let config: AppConfig = toml::from_str(
            r#"
[auth]
provider = "firebase"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_insight_provider_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
[insight]
provider = "bard"
model = "bard-1"
api_key_env = "BARD_KEY"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownProvider {
                section: "[insight]",
                ..
            })
        ));
    }

    #[test]
    fn test_temperature_range_enforced() {
        let config: AppConfig = toml::from_str(
            r#"
[insight]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
temperature = 3.5
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
[auth]
provider = "local"
endpoint = "not a url"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_insight_api_key_env_resolution() {
        let config = AppConfig::test_config();
        std::env::set_var("GOOGLE_API_KEY", "test-key-123");
        assert_eq!(config.insight_api_key().unwrap(), "test-key-123");
        std::env::remove_var("GOOGLE_API_KEY");
        assert!(matches!(
            config.insight_api_key(),
            Err(ConfigError::EnvVarNotFound(_))
        ));
    }

    #[test]
    fn test_auth_api_key_requires_env_name() {
        let config = AppConfig::test_config();
        assert!(matches!(
            config.auth_api_key(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }
}
