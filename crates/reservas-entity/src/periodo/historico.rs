//! Archived period records, produced when a period is closed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reservas_core::types::{HistoricoPeriodoId, ReservaId, UserId};

use crate::libras::Libras;
use crate::reserva::StatusReserva;

/// Immutable snapshot of a closed period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoPeriodo {
    /// Archive identifier.
    pub id: HistoricoPeriodoId,
    /// Total capacity the period had.
    pub libras_totales: Libras,
    /// Libras reserved at closure.
    pub libras_reservadas: Libras,
    /// Libras left unreserved at closure.
    pub libras_disponibles: Libras,
    /// Shipping date of the period.
    pub fecha_envio: String,
    /// Number of reservations archived.
    pub total_reservas: u64,
    /// Number of distinct users with reservations.
    pub total_usuarios: u64,
    /// When the period was archived.
    pub fecha_archivado: DateTime<Utc>,
}

impl HistoricoPeriodo {
    /// Occupancy at closure, in percent.
    pub fn porcentaje_ocupacion(&self) -> f64 {
        self.libras_reservadas.percent_of(self.libras_totales)
    }
}

/// Immutable snapshot of a reservation in a closed period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoReserva {
    /// Archive identifier.
    pub id: i64,
    /// Owner.
    pub user_id: UserId,
    /// Owner name at closure.
    pub user_name: String,
    /// Owner email at closure.
    pub user_email: String,
    /// Reserved quantity.
    pub libras: Libras,
    /// Shipping date.
    pub fecha: String,
    /// Origin region.
    pub estado: String,
    /// Free-form notes.
    #[serde(default)]
    pub observaciones: Option<String>,
    /// Final status.
    pub status: StatusReserva,
    /// Shipping date of the period.
    pub periodo_fecha_envio: String,
    /// Identifier of the live reservation that was archived.
    pub reserva_original_id: ReservaId,
    /// When the record was archived.
    pub fecha_archivado: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porcentaje_ocupacion() {
        let json = r#"{
            "id": 1,
            "librasTotales": 2000,
            "librasReservadas": "1500",
            "librasDisponibles": "500",
            "fechaEnvio": "2025-10-01",
            "totalReservas": 12,
            "totalUsuarios": 5,
            "fechaArchivado": "2025-10-02T00:00:00.000Z"
        }"#;
        let historico: HistoricoPeriodo = serde_json::from_str(json).expect("parse");
        assert_eq!(historico.porcentaje_ocupacion(), 75.0);
    }
}
