//! Token store trait for pluggable credential backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// The short-lived access token and the long-lived refresh token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Bearer credential attached to every request.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Credential exchanged at the refresh endpoint.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Trait for credential backends (in-memory, file).
///
/// Implementations must be safe to share between concurrent requests; the
/// transport reads the access token before every call and the refresh guard
/// writes it after a renewal.
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load both tokens.
    async fn load(&self) -> AppResult<TokenPair>;

    /// Replace only the access token.
    async fn set_access_token(&self, token: &str) -> AppResult<()>;

    /// Replace both tokens.
    async fn set_tokens(&self, access_token: &str, refresh_token: &str) -> AppResult<()>;

    /// Remove all stored credentials.
    async fn clear(&self) -> AppResult<()>;

    /// Current access token, if any.
    async fn access_token(&self) -> AppResult<Option<String>> {
        Ok(self.load().await?.access_token)
    }

    /// Current refresh token, if any.
    async fn refresh_token(&self) -> AppResult<Option<String>> {
        Ok(self.load().await?.refresh_token)
    }

    /// Whether both tokens are present.
    async fn has_tokens(&self) -> AppResult<bool> {
        let pair = self.load().await?;
        Ok(pair.access_token.is_some() && pair.refresh_token.is_some())
    }
}
