//! Reservation status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
///
/// Variants are declared in lifecycle order; `Entregada` and `Cancelada`
/// are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusReserva {
    /// Created, awaiting confirmation.
    Pendiente,
    /// Confirmed by the administrator.
    Confirmada,
    /// Shipped towards the central warehouse.
    Enviada,
    /// Delivered.
    Entregada,
    /// Cancelled.
    Cancelada,
}

impl StatusReserva {
    /// All statuses in lifecycle order.
    pub const ALL: [StatusReserva; 5] = [
        StatusReserva::Pendiente,
        StatusReserva::Confirmada,
        StatusReserva::Enviada,
        StatusReserva::Entregada,
        StatusReserva::Cancelada,
    ];

    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Entregada | Self::Cancelada)
    }

    /// Check if libras in this status are travelling to the central warehouse.
    pub fn is_in_transit(&self) -> bool {
        matches!(self, Self::Confirmada | Self::Enviada)
    }

    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Confirmada => "CONFIRMADA",
            Self::Enviada => "ENVIADA",
            Self::Entregada => "ENTREGADA",
            Self::Cancelada => "CANCELADA",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Confirmada => "Confirmada",
            Self::Enviada => "Enviada",
            Self::Entregada => "Entregada",
            Self::Cancelada => "Cancelada",
        }
    }
}

impl fmt::Display for StatusReserva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusReserva {
    type Err = reservas_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDIENTE" => Ok(Self::Pendiente),
            "CONFIRMADA" => Ok(Self::Confirmada),
            "ENVIADA" => Ok(Self::Enviada),
            "ENTREGADA" => Ok(Self::Entregada),
            "CANCELADA" => Ok(Self::Cancelada),
            _ => Err(reservas_core::AppError::validation(format!(
                "Invalid status: '{s}'. Expected one of: PENDIENTE, CONFIRMADA, ENVIADA, ENTREGADA, CANCELADA"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<_> = StatusReserva::ALL
            .iter()
            .filter(|s| s.is_terminal())
            .copied()
            .collect();
        assert_eq!(
            terminal,
            vec![StatusReserva::Entregada, StatusReserva::Cancelada]
        );
    }

    #[test]
    fn test_lifecycle_order() {
        assert!(StatusReserva::Pendiente < StatusReserva::Confirmada);
        assert!(StatusReserva::Enviada < StatusReserva::Entregada);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "enviada".parse::<StatusReserva>().unwrap(),
            StatusReserva::Enviada
        );
        assert!("PERDIDA".parse::<StatusReserva>().is_err());
    }
}
