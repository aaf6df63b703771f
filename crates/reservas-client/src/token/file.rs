//! Token store persisted as a JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use reservas_core::error::{AppError, ErrorKind};
use reservas_core::result::AppResult;
use reservas_core::traits::{TokenPair, TokenStore};

/// Persists credentials in a JSON file so they survive between runs.
///
/// Writes are serialized through an internal lock so a refresh and a login
/// in the same process never interleave their read-modify-write cycles.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_pair(&self) -> AppResult<TokenPair> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TokenPair::default()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read token file: {}", self.path.display()),
                    e,
                ));
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(pair) => Ok(pair),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable token file");
                Ok(TokenPair::default())
            }
        }
    }

    async fn write_pair(&self, pair: &TokenPair) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create token directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let data = serde_json::to_vec_pretty(pair)?;
        fs::write(&self.path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write token file: {}", self.path.display()),
                e,
            )
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Storage, "Failed to restrict token file", e)
                })?;
        }

        debug!(path = %self.path.display(), "Stored credentials");
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> AppResult<TokenPair> {
        self.read_pair().await
    }

    async fn set_access_token(&self, token: &str) -> AppResult<()> {
        let _lock = self.write_lock.lock().await;
        let mut pair = self.read_pair().await?;
        pair.access_token = Some(token.to_string());
        self.write_pair(&pair).await
    }

    async fn set_tokens(&self, access_token: &str, refresh_token: &str) -> AppResult<()> {
        let _lock = self.write_lock.lock().await;
        let pair = TokenPair {
            access_token: Some(access_token.to_string()),
            refresh_token: Some(refresh_token.to_string()),
        };
        self.write_pair(&pair).await
    }

    async fn clear(&self) -> AppResult<()> {
        let _lock = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed credentials");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove token file: {}", self.path.display()),
                e,
            )),
        }
    }
}
