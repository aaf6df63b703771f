//! `/dashboard` endpoints.

use reservas_core::result::AppResult;
use reservas_core::types::{HistoricoPeriodoId, Paginated};
use reservas_entity::dashboard::{DashboardStats, ReportesData};
use reservas_entity::filters::{HistoricoFilters, ReportesFilters};
use reservas_entity::periodo::{HistoricoPeriodo, HistoricoReserva};

use crate::transport::{ApiClient, ApiRequest};

#[derive(Debug, Clone, Copy)]
pub struct DashboardApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> AppResult<DashboardStats> {
        self.client.data(ApiRequest::get("/dashboard/stats")).await
    }

    /// Archived periods.
    pub async fn history(&self, filters: &HistoricoFilters) -> AppResult<Paginated<HistoricoPeriodo>> {
        self.client
            .paginated(ApiRequest::get("/dashboard/history").query(filters.query_pairs()))
            .await
    }

    /// Reservations archived with one period.
    pub async fn history_reservas(&self, id: HistoricoPeriodoId) -> AppResult<Vec<HistoricoReserva>> {
        self.client
            .data(ApiRequest::get(format!("/dashboard/history/{id}/reservas")))
            .await
    }

    pub async fn reportes(&self, filters: &ReportesFilters) -> AppResult<ReportesData> {
        self.client
            .data(ApiRequest::get("/dashboard/reportes").query(filters.query_pairs()))
            .await
    }
}
