//! Aggregated reports: by user, month, period and region.

use serde::{Deserialize, Serialize};

use reservas_core::types::{PeriodoId, UserId};

use crate::libras::Libras;

/// Totals for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteUsuario {
    pub user_id: UserId,
    pub user_name: String,
    pub user_email: String,
    pub total_libras: Libras,
    pub total_reservas: u64,
    pub periodo_count: u64,
    pub porcentaje_del_total: f64,
}

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteMensual {
    pub mes: String,
    pub year: i32,
    pub total_libras: Libras,
    pub total_reservas: u64,
    pub total_usuarios: u64,
    pub periodos: u64,
}

/// Totals for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportePeriodo {
    pub periodo_id: PeriodoId,
    pub fecha_envio: String,
    pub libras_totales: Libras,
    pub libras_reservadas: Libras,
    pub porcentaje_ocupacion: f64,
    pub total_reservas: u64,
    pub total_usuarios: u64,
}

/// Totals for one origin region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteEstado {
    pub estado: String,
    pub total_libras: Libras,
    pub total_reservas: u64,
    pub total_usuarios: u64,
    pub porcentaje_del_total: f64,
}

/// Global summary of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteResumen {
    pub total_libras_global: Libras,
    pub total_reservas_global: u64,
    pub total_usuarios_unicos: u64,
    pub total_periodos: u64,
    pub promedio_libras_por_usuario: Libras,
    pub promedio_libras_por_periodo: Libras,
}

/// Full report payload of `GET /dashboard/reportes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportesData {
    #[serde(default)]
    pub por_usuario: Vec<ReporteUsuario>,
    #[serde(default)]
    pub por_mes: Vec<ReporteMensual>,
    #[serde(default)]
    pub por_periodo: Vec<ReportePeriodo>,
    #[serde(default)]
    pub por_estado: Vec<ReporteEstado>,
    pub resumen: ReporteResumen,
}

impl ReportesData {
    /// The user with the most libras, if any.
    pub fn top_usuario(&self) -> Option<&ReporteUsuario> {
        self.por_usuario
            .iter()
            .max_by(|a, b| a.total_libras.value().total_cmp(&b.total_libras.value()))
    }
}
