//! Credential storage configuration.

use serde::{Deserialize, Serialize};

/// Where credentials live and how they are renewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the JSON file holding the access and refresh tokens.
    #[serde(default = "default_token_file")]
    pub token_file: String,
    /// Endpoint, relative to the base URL, that exchanges a refresh token.
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
            refresh_path: default_refresh_path(),
        }
    }
}

fn default_token_file() -> String {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => format!("{home}/.reservas/tokens.json"),
        _ => ".reservas/tokens.json".to_string(),
    }
}

fn default_refresh_path() -> String {
    "/auth/refresh".to_string()
}
