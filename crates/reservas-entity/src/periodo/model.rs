//! Capacity period models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reservas_core::types::PeriodoId;

use crate::libras::Libras;
use crate::user::RecordCount;

/// A capacity window that reservations draw libras from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Periodo {
    /// Unique period identifier.
    pub id: PeriodoId,
    /// Total capacity.
    pub libras_totales: Libras,
    /// Single shipping date of the period.
    pub fecha_envio: String,
    /// Whether reservations are still accepted.
    pub is_active: bool,
    /// When the period was created.
    pub created_at: DateTime<Utc>,
    /// When the period was last updated.
    pub updated_at: DateTime<Utc>,
    /// Related counters.
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<RecordCount>,
}

impl Periodo {
    /// Number of reservations, when the endpoint included counters.
    pub fn reservas_count(&self) -> Option<u64> {
        self.count.map(|c| c.reservas)
    }
}

/// The active period with its occupancy figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoActivo {
    /// Base period fields.
    #[serde(flatten)]
    pub periodo: Periodo,
    /// Libras already reserved.
    pub libras_reservadas: Libras,
    /// Libras still available.
    pub libras_disponibles: Libras,
    /// Reserved share of the total, in percent.
    pub porcentaje_ocupacion: f64,
}

impl PeriodoActivo {
    /// Whether a reservation of `libras` still fits.
    pub fn can_fit(&self, libras: Libras) -> bool {
        libras.value() <= self.libras_disponibles.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodo_activo_from_api() {
        let json = r#"{
            "id": 4,
            "librasTotales": 2000,
            "fechaEnvio": "2025-12-04T00:00:00.000Z",
            "isActive": true,
            "createdAt": "2025-11-01T00:00:00.000Z",
            "updatedAt": "2025-11-01T00:00:00.000Z",
            "_count": {"reservas": 9},
            "librasReservadas": "1500.00",
            "librasDisponibles": "500.00",
            "porcentajeOcupacion": 75
        }"#;
        let activo: PeriodoActivo = serde_json::from_str(json).expect("parse");
        assert_eq!(activo.periodo.reservas_count(), Some(9));
        assert!(activo.can_fit(Libras(500.0)));
        assert!(!activo.can_fit(Libras(500.01)));
    }
}
