//! In-process token store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use reservas_core::result::AppResult;
use reservas_core::traits::{TokenPair, TokenStore};

/// Keeps credentials in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    pair: RwLock<TokenPair>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds both tokens.
    pub fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        Self {
            pair: RwLock::new(TokenPair {
                access_token: Some(access_token.to_string()),
                refresh_token: Some(refresh_token.to_string()),
            }),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> AppResult<TokenPair> {
        Ok(self.pair.read().await.clone())
    }

    async fn set_access_token(&self, token: &str) -> AppResult<()> {
        self.pair.write().await.access_token = Some(token.to_string());
        Ok(())
    }

    async fn set_tokens(&self, access_token: &str, refresh_token: &str) -> AppResult<()> {
        let mut pair = self.pair.write().await;
        pair.access_token = Some(access_token.to_string());
        pair.refresh_token = Some(refresh_token.to_string());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.pair.write().await = TokenPair::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_has_tokens_requires_both() {
        let store = MemoryTokenStore::new();
        assert!(!store.has_tokens().await.unwrap());

        store.set_access_token("a").await.unwrap();
        assert!(!store.has_tokens().await.unwrap());

        store.set_tokens("a", "r").await.unwrap();
        assert!(store.has_tokens().await.unwrap());

        store.clear().await.unwrap();
        assert_eq!(store.access_token().await.unwrap(), None);
        assert_eq!(store.refresh_token().await.unwrap(), None);
    }
}
