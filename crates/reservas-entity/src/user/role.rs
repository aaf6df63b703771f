//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles known to the reservation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Main administrator: manages periods, users and every status change.
    AdminPrincipal,
    /// Regular operator: reserves libras and marks confirmed shipments as sent.
    Usuario,
}

impl Role {
    /// All roles, in privilege order.
    pub const ALL: [Role; 2] = [Role::AdminPrincipal, Role::Usuario];

    /// Check if this role is the main administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::AdminPrincipal)
    }

    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminPrincipal => "ADMIN_PRINCIPAL",
            Self::Usuario => "USUARIO",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AdminPrincipal => "Administrador",
            Self::Usuario => "Usuario",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = reservas_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "ADMIN_PRINCIPAL" | "ADMIN" => Ok(Self::AdminPrincipal),
            "USUARIO" | "USER" => Ok(Self::Usuario),
            _ => Err(reservas_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: ADMIN_PRINCIPAL, USUARIO"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&Role::AdminPrincipal).expect("serialize");
        assert_eq!(json, "\"ADMIN_PRINCIPAL\"");
        let role: Role = serde_json::from_str("\"USUARIO\"").expect("deserialize");
        assert_eq!(role, Role::Usuario);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin_principal".parse::<Role>().unwrap(), Role::AdminPrincipal);
        assert_eq!("usuario".parse::<Role>().unwrap(), Role::Usuario);
        assert!("viewer".parse::<Role>().is_err());
    }
}
