//! User, session and profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reservas_core::types::UserId;

use super::role::Role;

/// A registered user of the reservation system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Avatar URL, if one was uploaded.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Role governing permitted operations.
    pub role: Role,
    /// Whether the account may log in.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Related-record counters attached by some endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCount {
    /// Number of reservations.
    #[serde(default)]
    pub reservas: u64,
}

/// The current user's profile with its reservation count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    /// Base user fields.
    #[serde(flatten)]
    pub user: User,
    /// Related counters.
    #[serde(rename = "_count", default)]
    pub count: Option<RecordCount>,
}

/// An active login session of the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier.
    pub id: String,
    /// Client user agent at login.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Client IP at login.
    #[serde(default)]
    pub ip_address: Option<String>,
    /// When the session's refresh token expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is past its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Login result: the user and a fresh token pair.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: User,
    /// Short-lived bearer credential.
    pub access_token: String,
    /// Long-lived credential for the refresh endpoint.
    pub refresh_token: String,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("user", &self.user)
            .field("access_token", &"***")
            .field("refresh_token", &"***")
            .finish()
    }
}

/// Refresh endpoint result.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// New short-lived bearer credential.
    pub access_token: String,
}

impl std::fmt::Debug for RefreshResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshResponse")
            .field("access_token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "id": 3,
        "name": "Ana López",
        "email": "ana@example.com",
        "avatar": null,
        "role": "USUARIO",
        "isActive": true,
        "createdAt": "2025-01-10T12:00:00.000Z",
        "updatedAt": "2025-01-11T08:30:00.000Z"
    }"#;

    #[test]
    fn test_user_from_api() {
        let user: User = serde_json::from_str(USER_JSON).expect("parse");
        assert_eq!(user.id, UserId::new(3));
        assert!(!user.is_admin());
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_profile_with_count() {
        let json = USER_JSON.replacen('{', r#"{"_count": {"reservas": 12},"#, 1);
        let profile: ProfileData = serde_json::from_str(&json).expect("parse");
        assert_eq!(profile.count.map(|c| c.reservas), Some(12));
        assert_eq!(profile.user.email, "ana@example.com");
    }
}
