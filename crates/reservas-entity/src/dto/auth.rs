//! Authentication and profile request bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginDto {
    /// Account email.
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub password: String,
}

/// Self-registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDto {
    /// Display name.
    #[validate(length(min = 2, max = 100, message = "El nombre debe tener entre 2 y 100 caracteres"))]
    pub name: String,
    /// Account email.
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    /// Password.
    #[validate(
        length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"),
        custom(function = "super::rules::validate_password_strength")
    )]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Logout request body; the refresh token identifies the session to revoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    /// Refresh token of the session being closed.
    pub refresh_token: String,
}

/// Password change through `/auth/password`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    #[validate(length(min = 1, message = "La contraseña actual es requerida"))]
    pub current_password: String,
    #[validate(
        length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"),
        custom(function = "super::rules::validate_password_strength")
    )]
    pub new_password: String,
    /// Session to keep alive while the others are revoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Profile update through `/profile` or `/auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 2, max = 100, message = "El nombre debe tener entre 2 y 100 caracteres"))]
    pub name: String,
}

/// Password change through `/profile/password`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeProfilePasswordDto {
    #[validate(length(min = 1, message = "La contraseña actual es requerida"))]
    pub current_password: String,
    #[validate(
        length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"),
        custom(function = "super::rules::validate_password_strength")
    )]
    pub new_password: String,
}

impl ChangeProfilePasswordDto {
    /// The new password must differ from the current one.
    pub fn is_same_password(&self) -> bool {
        self.current_password == self.new_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_valid_email() {
        let dto = LoginDto {
            email: "no-es-email".into(),
            password: "Secreto#2025".into(),
        };
        let err = dto.validate().expect_err("invalid email");
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_password_complexity() {
        let weak = RegisterDto {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "solominusculas".into(),
        };
        assert!(weak.validate().is_err());

        let strong = RegisterDto {
            password: "Secreto#2025".into(),
            ..weak
        };
        assert!(strong.validate().is_ok());
    }

    #[test]
    fn test_change_password_serializes_camel_case() {
        let dto = ChangePasswordDto {
            current_password: "Viejo#2024".into(),
            new_password: "Nuevo#2025".into(),
            refresh_token: None,
        };
        let json = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(json["currentPassword"], "Viejo#2024");
        assert!(json.get("refreshToken").is_none());
    }
}
