//! Client configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file plus an environment overlay. Each sub-module
//! represents a logical configuration section and every field has a default,
//! so an absent file yields a usable configuration.

pub mod api;
pub mod auth;
pub mod logging;
pub mod output;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::auth::AuthConfig;
use self::logging::LoggingConfig;
use self::output::OutputConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides, e.g. `RESERVAS__API__BASE_URL`.
pub const ENV_PREFIX: &str = "RESERVAS";

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// REST API connection settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Credential storage and refresh settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// CLI output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; environment variables prefixed with
    /// `RESERVAS__` override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<(), AppError> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::configuration(format!(
                "api.base_url must be an http(s) URL, got '{base}'"
            )));
        }
        if self.api.request_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "api.request_timeout_seconds must be greater than zero",
            ));
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(AppError::configuration(format!(
                "logging.format must be 'json' or 'pretty', got '{}'",
                self.logging.format
            )));
        }
        if !self.auth.refresh_path.starts_with('/') {
            return Err(AppError::configuration(
                "auth.refresh_path must start with '/'",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.request_timeout_seconds, 30);
        assert_eq!(config.auth.refresh_path, "/auth/refresh");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ClientConfig::load("does/not/exist/reservas").expect("defaults");
        assert_eq!(config.output.page_size, 20);
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let mut config = ClientConfig::default();
        config.logging.format = "json".to_string();
        assert!(config.validate().is_ok());

        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("logging.format"));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = ClientConfig::default();
        config.api.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());
    }
}
