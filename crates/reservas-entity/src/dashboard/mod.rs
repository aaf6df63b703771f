//! Dashboard statistics and report payloads.

pub mod reportes;
pub mod stats;

pub use reportes::{
    ReporteEstado, ReporteMensual, ReportePeriodo, ReporteResumen, ReporteUsuario, ReportesData,
};
pub use stats::{DashboardStats, PeriodoHeader, PeriodoStats, StatusCount, UserReservaSummary};
