//! Login state on top of the token store.

use tracing::{info, warn};
use validator::Validate;

use reservas_core::events::SessionEvent;
use reservas_core::result::AppResult;
use reservas_entity::dto::{ChangeProfilePasswordDto, LoginDto};
use reservas_entity::user::User;

use crate::transport::ApiClient;

/// Whether credentials are held locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Both tokens are stored.
    Authenticated,
    /// At least one token is missing.
    Anonymous,
}

/// Login, logout and identity of the current user.
#[derive(Debug, Clone)]
pub struct AuthSession {
    client: ApiClient,
}

impl AuthSession {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Authenticate and persist both tokens.
    pub async fn login(&self, dto: &LoginDto) -> AppResult<User> {
        dto.validate()?;
        let auth = self.client.auth().login(dto).await?;
        self.client
            .tokens()
            .set_tokens(&auth.access_token, &auth.refresh_token)
            .await?;

        info!(user_id = %auth.user.id, "Logged in");
        self.client.emit(SessionEvent::LoggedIn {
            user_id: auth.user.id,
        });
        Ok(auth.user)
    }

    /// Revoke the session on the server and forget it locally.
    ///
    /// The server call is best-effort: local credentials are cleared even
    /// when it fails.
    pub async fn logout(&self) -> AppResult<()> {
        match self.client.tokens().refresh_token().await {
            Ok(Some(refresh_token)) => {
                if let Err(e) = self.client.auth().logout(&refresh_token).await {
                    warn!(error = %e, "Server logout failed, clearing local session anyway");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Could not read refresh token for logout"),
        }

        self.client.tokens().clear().await?;
        self.client.emit(SessionEvent::LoggedOut);
        info!("Logged out");
        Ok(())
    }

    /// Local authentication status.
    pub async fn status(&self) -> AppResult<SessionStatus> {
        Ok(if self.is_authenticated().await? {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        })
    }

    /// Whether both tokens are stored.
    pub async fn is_authenticated(&self) -> AppResult<bool> {
        self.client.tokens().has_tokens().await
    }

    /// Fetch the current user from the server.
    pub async fn current_user(&self) -> AppResult<User> {
        self.client.auth().me().await
    }

    /// Change the password through `/profile/password`.
    ///
    /// The server revokes every session afterwards, so local credentials are
    /// cleared and the user has to log in again.
    pub async fn change_profile_password(&self, dto: &ChangeProfilePasswordDto) -> AppResult<Option<String>> {
        let message = self.client.profile().change_password(dto).await?;
        self.client.tokens().clear().await?;
        self.client.emit(SessionEvent::LoginRequired {
            reason: "Contraseña cambiada".to_string(),
        });
        Ok(message)
    }
}
