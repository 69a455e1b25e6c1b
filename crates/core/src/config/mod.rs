//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SEOZOOM_*)
//! 2. TOML config file (if SEOZOOM_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Fields read verbatim from `SEOZOOM_*` variables.
///
/// The `Env` provider parses values, so a key like `0042` would otherwise
/// arrive as the integer 42.
const VERBATIM_ENV_FIELDS: [&str; 2] = ["api_key", "user_agent"];

/// Production endpoint of the SEOZoom v2 API.
pub const DEFAULT_BASE_URL: &str = "https://apiv2.seozoom.com/api/v2";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SEOZOOM_*)
/// 2. TOML config file (if SEOZOOM_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SEOZoom API key.
    ///
    /// Set via SEOZOOM_API_KEY environment variable.
    /// Required by the client; loading itself does not fail without it.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Country database used when a call does not name one.
    ///
    /// Set via SEOZOOM_DEFAULT_DB environment variable.
    #[serde(default = "default_db")]
    pub default_db: String,

    /// Base URL of the SEOZoom API, without trailing resource path.
    ///
    /// Set via SEOZOOM_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via SEOZOOM_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via SEOZOOM_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_db() -> String {
    "it".into()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    "seozoom-mcp/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_db: default_db(),
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `SEOZOOM_`
    /// 2. TOML file from `SEOZOOM_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("SEOZOOM_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("SEOZOOM_")
                .ignore(&["CONFIG_FILE", "API_KEY", "USER_AGENT"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        for field in VERBATIM_ENV_FIELDS {
            if let Ok(value) = std::env::var(format!("SEOZOOM_{}", field.to_uppercase())) {
                figment = figment.merge(Serialized::default(field, value));
            }
        }

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// The API key, treating an empty value as missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the API key is unset or empty.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "api_key".into(),
                hint: "Set SEOZOOM_API_KEY environment variable".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.default_db, "it");
        assert_eq!(config.base_url, "https://apiv2.seozoom.com/api/v2");
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.user_agent, "seozoom-mcp/0.1");
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = AppConfig::default();
        assert!(matches!(config.require_api_key(), Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_require_api_key_empty() {
        let config = AppConfig { api_key: Some(String::new()), ..Default::default() };
        assert!(matches!(config.require_api_key(), Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_require_api_key_present() {
        let config = AppConfig { api_key: Some("test-key".into()), ..Default::default() };
        assert_eq!(config.require_api_key().unwrap(), "test-key");
    }

    #[test]
    fn test_load_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("SEOZOOM_API_KEY", "env-key");
            jail.set_env("SEOZOOM_DEFAULT_DB", "fr");
            jail.set_env("SEOZOOM_TIMEOUT_MS", "5000");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.api_key.as_deref(), Some("env-key"));
            assert_eq!(config.default_db, "fr");
            assert_eq!(config.timeout_ms, 5000);
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "seozoom.toml",
                r#"
                    api_key = "file-key"
                    default_db = "de"
                    user_agent = "custom/1.0"
                "#,
            )?;
            jail.set_env("SEOZOOM_CONFIG_FILE", "seozoom.toml");
            jail.set_env("SEOZOOM_DEFAULT_DB", "es");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.api_key.as_deref(), Some("file-key"));
            assert_eq!(config.default_db, "es");
            assert_eq!(config.user_agent, "custom/1.0");
            Ok(())
        });
    }

    #[test]
    fn test_load_numeric_api_key_kept_verbatim() {
        Jail::expect_with(|jail| {
            jail.set_env("SEOZOOM_API_KEY", "1234567890");
            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.require_api_key().map_err(|e| e.to_string())?, "1234567890");

            jail.set_env("SEOZOOM_API_KEY", "007");
            jail.set_env("SEOZOOM_USER_AGENT", "true");
            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.api_key.as_deref(), Some("007"));
            assert_eq!(config.user_agent, "true");
            Ok(())
        });
    }

    #[test]
    fn test_load_empty_api_key_is_missing() {
        Jail::expect_with(|jail| {
            jail.set_env("SEOZOOM_API_KEY", "");
            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert!(matches!(config.require_api_key(), Err(ConfigError::Missing { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_env_key_overrides_toml_key() {
        Jail::expect_with(|jail| {
            jail.create_file("seozoom.toml", r#"api_key = "file-key""#)?;
            jail.set_env("SEOZOOM_CONFIG_FILE", "seozoom.toml");
            jail.set_env("SEOZOOM_API_KEY", "555");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.api_key.as_deref(), Some("555"));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_timeout() {
        Jail::expect_with(|jail| {
            jail.set_env("SEOZOOM_TIMEOUT_MS", "10");
            assert!(matches!(AppConfig::load(), Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
            Ok(())
        });
    }
}
