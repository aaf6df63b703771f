//! `/reservas` endpoints.

use validator::Validate;

use reservas_core::result::AppResult;
use reservas_core::types::{Paginated, ReservaId};
use reservas_entity::dto::{CreateReservaDto, UpdateReservaDto, UpdateStatusDto};
use reservas_entity::filters::ReservaFilters;
use reservas_entity::reserva::{Reserva, StatusReserva};

use crate::transport::{ApiClient, ApiRequest};

/// Reservation management.
///
/// The server enforces the status policy; callers that know the actor's role
/// can check [`ensure_transition`](reservas_entity::reserva::ensure_transition)
/// first to fail without a round trip.
#[derive(Debug, Clone, Copy)]
pub struct ReservasApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReservasApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, dto: &CreateReservaDto) -> AppResult<Reserva> {
        dto.validate()?;
        self.client
            .data(ApiRequest::post("/reservas").json(dto)?)
            .await
    }

    pub async fn list(&self, filters: &ReservaFilters) -> AppResult<Paginated<Reserva>> {
        self.client
            .paginated(ApiRequest::get("/reservas").query(filters.query_pairs()))
            .await
    }

    pub async fn get(&self, id: ReservaId) -> AppResult<Reserva> {
        self.client
            .data(ApiRequest::get(format!("/reservas/{id}")))
            .await
    }

    pub async fn update(&self, id: ReservaId, dto: &UpdateReservaDto) -> AppResult<Reserva> {
        dto.validate()?;
        self.client
            .data(ApiRequest::patch(format!("/reservas/{id}")).json(dto)?)
            .await
    }

    /// `PATCH /reservas/{id}/status`.
    pub async fn update_status(&self, id: ReservaId, status: StatusReserva) -> AppResult<Reserva> {
        let request =
            ApiRequest::patch(format!("/reservas/{id}/status")).json(&UpdateStatusDto { status })?;
        self.client.data(request).await
    }

    pub async fn delete(&self, id: ReservaId) -> AppResult<Option<String>> {
        self.client
            .message(ApiRequest::delete(format!("/reservas/{id}")))
            .await
    }
}
