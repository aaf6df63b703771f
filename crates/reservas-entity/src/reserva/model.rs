//! Reservation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reservas_core::types::{PeriodoId, ReservaId, UserId};

use super::policy;
use super::status::StatusReserva;
use crate::libras::Libras;
use crate::user::Role;

/// A reservation of libras within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserva {
    /// Unique reservation identifier.
    pub id: ReservaId,
    /// Reserved quantity.
    pub libras: Libras,
    /// Shipping date (ISO date or datetime).
    pub fecha: String,
    /// Origin region.
    pub estado: String,
    /// Free-form notes.
    #[serde(default)]
    pub observaciones: Option<String>,
    /// Lifecycle status.
    pub status: StatusReserva,
    /// When the reservation was confirmed.
    #[serde(default)]
    pub fecha_confirmacion: Option<DateTime<Utc>>,
    /// When the reservation was shipped.
    #[serde(default)]
    pub fecha_envio: Option<DateTime<Utc>>,
    /// When the reservation was delivered.
    #[serde(default)]
    pub fecha_entrega: Option<DateTime<Utc>>,
    /// Owner.
    pub user_id: UserId,
    /// Period the reservation draws capacity from.
    pub periodo_id: PeriodoId,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last updated.
    pub updated_at: DateTime<Utc>,
    /// Embedded owner summary.
    #[serde(default)]
    pub user: Option<ReservaUser>,
    /// Embedded period summary.
    #[serde(default)]
    pub periodo: Option<ReservaPeriodo>,
}

impl Reserva {
    /// Statuses `role` may pick for this reservation, current first.
    pub fn available_statuses(&self, role: Role) -> Vec<StatusReserva> {
        policy::available_statuses(self.status, role)
    }

    /// Whether the status can no longer change.
    pub fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Timeline of reached milestones, oldest first.
    pub fn timeline(&self) -> Vec<(StatusReserva, DateTime<Utc>)> {
        let mut events = vec![(StatusReserva::Pendiente, self.created_at)];
        if let Some(at) = self.fecha_confirmacion {
            events.push((StatusReserva::Confirmada, at));
        }
        if let Some(at) = self.fecha_envio {
            events.push((StatusReserva::Enviada, at));
        }
        if let Some(at) = self.fecha_entrega {
            events.push((StatusReserva::Entregada, at));
        }
        if self.status == StatusReserva::Cancelada {
            events.push((StatusReserva::Cancelada, self.updated_at));
        }
        events
    }
}

/// Owner summary embedded in a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservaUser {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
}

/// Period summary embedded in a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservaPeriodo {
    /// Period identifier.
    pub id: PeriodoId,
    /// Total capacity of the period.
    pub libras_totales: Libras,
    /// Shipping date of the period.
    pub fecha_envio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVA_JSON: &str = r#"{
        "id": 11,
        "libras": "250.50",
        "fecha": "2025-12-04",
        "estado": "Jalisco",
        "observaciones": null,
        "status": "ENVIADA",
        "fechaConfirmacion": "2025-11-20T10:00:00.000Z",
        "fechaEnvio": "2025-11-25T09:00:00.000Z",
        "fechaEntrega": null,
        "userId": 3,
        "periodoId": 2,
        "createdAt": "2025-11-18T16:00:00.000Z",
        "updatedAt": "2025-11-25T09:00:00.000Z",
        "user": {"id": 3, "name": "Ana", "email": "ana@example.com"},
        "periodo": {"id": 2, "librasTotales": 2000, "fechaEnvio": "2025-12-04"}
    }"#;

    #[test]
    fn test_reserva_from_api() {
        let reserva: Reserva = serde_json::from_str(RESERVA_JSON).expect("parse");
        assert_eq!(reserva.libras, Libras(250.5));
        assert_eq!(reserva.status, StatusReserva::Enviada);
        assert_eq!(
            reserva.periodo.as_ref().map(|p| p.libras_totales),
            Some(Libras(2000.0))
        );
    }

    #[test]
    fn test_timeline_follows_milestones() {
        let reserva: Reserva = serde_json::from_str(RESERVA_JSON).expect("parse");
        let steps: Vec<_> = reserva.timeline().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            steps,
            vec![
                StatusReserva::Pendiente,
                StatusReserva::Confirmada,
                StatusReserva::Enviada
            ]
        );
    }

    #[test]
    fn test_available_statuses_delegate_to_policy() {
        let reserva: Reserva = serde_json::from_str(RESERVA_JSON).expect("parse");
        assert_eq!(
            reserva.available_statuses(Role::Usuario),
            vec![StatusReserva::Enviada]
        );
        assert_eq!(
            reserva.available_statuses(Role::AdminPrincipal),
            vec![
                StatusReserva::Enviada,
                StatusReserva::Entregada,
                StatusReserva::Cancelada
            ]
        );
    }
}
