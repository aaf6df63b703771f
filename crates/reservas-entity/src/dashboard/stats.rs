//! Dashboard statistics across the open periods.

use serde::{Deserialize, Serialize};

use reservas_core::types::{PeriodoId, UserId};

use crate::libras::Libras;
use crate::reserva::StatusReserva;

/// Per-user reservation totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReservaSummary {
    /// User identifier.
    pub user_id: UserId,
    /// Display name.
    pub user_name: String,
    /// Email.
    pub user_email: String,
    /// Libras reserved by the user.
    pub total_libras: Libras,
    /// Number of reservations.
    pub total_reservas: u64,
}

/// Period header inside [`PeriodoStats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoHeader {
    /// Period identifier.
    pub id: PeriodoId,
    /// Total capacity.
    pub libras_totales: Libras,
    /// Shipping date.
    pub fecha_envio: String,
    /// Whether the period is active.
    pub is_active: bool,
}

/// Count of reservations in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The status.
    pub status: StatusReserva,
    /// Number of reservations in it.
    pub count: u64,
}

/// Occupancy statistics of a single period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoStats {
    /// The period.
    pub periodo: PeriodoHeader,
    /// Libras reserved.
    pub libras_reservadas: Libras,
    /// Libras still available.
    pub libras_disponibles: Libras,
    /// Libras delivered (ENTREGADA).
    pub libras_en_central: Libras,
    /// Libras confirmed or shipped (CONFIRMADA + ENVIADA).
    pub libras_en_transito: Libras,
    /// Libras awaiting confirmation (PENDIENTE).
    pub libras_pendientes: Libras,
    /// Reserved share of the total, in percent.
    pub porcentaje_ocupacion: f64,
    /// Number of reservations.
    pub total_reservas: u64,
    /// Number of distinct users with reservations.
    pub total_usuarios_con_reservas: u64,
    /// Reservation counts by status.
    #[serde(default)]
    pub reservas_por_status: Vec<StatusCount>,
    /// Per-user totals.
    #[serde(default)]
    pub usuarios_con_reservas: Vec<UserReservaSummary>,
}

impl PeriodoStats {
    /// Number of reservations in `status`; zero when the status is absent.
    pub fn count_for(&self, status: StatusReserva) -> u64 {
        self.reservas_por_status
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Dashboard statistics across every open period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Per-period statistics.
    #[serde(default)]
    pub periodos: Vec<PeriodoStats>,
    /// Libras reserved across periods.
    pub total_libras_reservadas: Libras,
    /// Libras available across periods.
    pub total_libras_disponibles: Libras,
    /// Reservations across periods.
    pub total_reservas: u64,
    /// Distinct users with reservations across periods.
    pub total_usuarios_con_reservas: u64,
    /// Per-user totals across periods.
    #[serde(default)]
    pub usuarios_con_reservas: Vec<UserReservaSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_for_missing_status_is_zero() {
        let json = r#"{
            "periodo": {"id": 1, "librasTotales": 2000, "fechaEnvio": "2025-12-04", "isActive": true},
            "librasReservadas": "300",
            "librasDisponibles": "1700",
            "librasEnCentral": "100",
            "librasEnTransito": "150",
            "librasPendientes": "50",
            "porcentajeOcupacion": 15,
            "totalReservas": 4,
            "totalUsuariosConReservas": 2,
            "reservasPorStatus": [{"status": "PENDIENTE", "count": 1}, {"status": "ENVIADA", "count": 3}],
            "usuariosConReservas": []
        }"#;
        let stats: PeriodoStats = serde_json::from_str(json).expect("parse");
        assert_eq!(stats.count_for(StatusReserva::Enviada), 3);
        assert_eq!(stats.count_for(StatusReserva::Cancelada), 0);
    }
}
