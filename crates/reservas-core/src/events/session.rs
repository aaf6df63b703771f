//! Session lifecycle events.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Events related to the locally held session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Credentials were stored after a successful login.
    LoggedIn {
        /// The authenticated user.
        user_id: UserId,
    },
    /// A new access token was obtained with the refresh token.
    TokenRefreshed,
    /// The session could not be renewed and credentials were cleared.
    LoginRequired {
        /// Why the session ended.
        reason: String,
    },
    /// The user logged out and credentials were cleared.
    LoggedOut,
}

impl SessionEvent {
    /// Return the event type as a static string.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => "session.logged_in",
            Self::TokenRefreshed => "session.token_refreshed",
            Self::LoginRequired { .. } => "session.login_required",
            Self::LoggedOut => "session.logged_out",
        }
    }
}
