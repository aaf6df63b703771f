//! `/users` endpoints (admin).

use validator::Validate;

use reservas_core::error::AppError;
use reservas_core::result::AppResult;
use reservas_core::types::{Paginated, UserId};
use reservas_entity::dto::{ChangeRoleDto, CreateUserDto, UpdateUserDto};
use reservas_entity::filters::UserFilters;
use reservas_entity::user::{Role, User};

use crate::transport::{ApiClient, ApiRequest};

/// User administration.
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, dto: &CreateUserDto) -> AppResult<User> {
        dto.validate()?;
        self.client.data(ApiRequest::post("/users").json(dto)?).await
    }

    pub async fn list(&self, filters: &UserFilters) -> AppResult<Paginated<User>> {
        self.client
            .paginated(ApiRequest::get("/users").query(filters.query_pairs()))
            .await
    }

    pub async fn get(&self, id: UserId) -> AppResult<User> {
        self.client.data(ApiRequest::get(format!("/users/{id}"))).await
    }

    pub async fn update(&self, id: UserId, dto: &UpdateUserDto) -> AppResult<User> {
        if dto.is_empty() {
            return Err(AppError::validation("No hay cambios que guardar"));
        }
        dto.validate()?;
        self.client
            .data(ApiRequest::patch(format!("/users/{id}")).json(dto)?)
            .await
    }

    pub async fn delete(&self, id: UserId) -> AppResult<Option<String>> {
        self.client
            .message(ApiRequest::delete(format!("/users/{id}")))
            .await
    }

    pub async fn change_role(&self, id: UserId, role: Role) -> AppResult<User> {
        self.client
            .data(ApiRequest::patch(format!("/users/{id}/role")).json(&ChangeRoleDto { role })?)
            .await
    }
}
