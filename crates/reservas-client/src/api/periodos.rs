//! `/periodos` endpoints.

use validator::Validate;

use reservas_core::result::AppResult;
use reservas_core::types::{Paginated, PeriodoId};
use reservas_entity::dto::{CreatePeriodoDto, UpdatePeriodoDto};
use reservas_entity::filters::PeriodoFilters;
use reservas_entity::periodo::{HistoricoPeriodo, Periodo, PeriodoActivo};

use crate::transport::{ApiClient, ApiRequest};

/// Capacity period management.
#[derive(Debug, Clone, Copy)]
pub struct PeriodosApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PeriodosApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, dto: &CreatePeriodoDto) -> AppResult<Periodo> {
        dto.validate()?;
        self.client
            .data(ApiRequest::post("/periodos").json(dto)?)
            .await
    }

    pub async fn list(&self, filters: &PeriodoFilters) -> AppResult<Paginated<Periodo>> {
        self.client
            .paginated(ApiRequest::get("/periodos").query(filters.query_pairs()))
            .await
    }

    /// The open period with its occupancy.
    pub async fn active(&self) -> AppResult<PeriodoActivo> {
        self.client.data(ApiRequest::get("/periodos/active")).await
    }

    pub async fn get(&self, id: PeriodoId) -> AppResult<Periodo> {
        self.client
            .data(ApiRequest::get(format!("/periodos/{id}")))
            .await
    }

    pub async fn update(&self, id: PeriodoId, dto: &UpdatePeriodoDto) -> AppResult<Periodo> {
        dto.validate()?;
        self.client
            .data(ApiRequest::patch(format!("/periodos/{id}")).json(dto)?)
            .await
    }

    /// Close a period; the server archives it with its reservations.
    pub async fn close(&self, id: PeriodoId) -> AppResult<HistoricoPeriodo> {
        self.client
            .data(ApiRequest::post(format!("/periodos/{id}/close")))
            .await
    }
}
