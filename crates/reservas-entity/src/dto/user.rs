//! User administration request bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::user::Role;

/// Admin-side user creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 2, max = 100, message = "El nombre debe tener entre 2 y 100 caracteres"))]
    pub name: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(
        length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"),
        custom(function = "super::rules::validate_password_strength")
    )]
    pub password: String,
    /// Defaults to USUARIO on the server when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Partial user update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100, message = "El nombre debe tener entre 2 y 100 caracteres"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Email inválido"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"),
        custom(function = "super::rules::validate_password_strength")
    )]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserDto {
    /// Whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.role.is_none()
            && self.is_active.is_none()
    }
}

/// Body of `PATCH /users/{id}/role`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChangeRoleDto {
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_user_skips_absent_fields() {
        let dto = UpdateUserDto {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let json = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(json, serde_json::json!({ "isActive": false }));
    }

    #[test]
    fn test_update_user_validates_present_fields() {
        let dto = UpdateUserDto {
            name: Some("A".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        assert!(UpdateUserDto::default().is_empty());
    }

    #[test]
    fn test_create_user_role_wire_form() {
        let dto = CreateUserDto {
            name: "Admin".into(),
            email: "admin@example.com".into(),
            password: "Secreto#2025".into(),
            role: Some(Role::AdminPrincipal),
        };
        let json = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(json["role"], "ADMIN_PRINCIPAL");
    }
}
