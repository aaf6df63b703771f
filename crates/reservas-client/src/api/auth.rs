//! `/auth` endpoints.

use validator::Validate;

use reservas_core::result::AppResult;
use reservas_entity::dto::{
    ChangePasswordDto, LoginDto, LogoutRequest, RefreshRequest, RegisterDto, UpdateProfileDto,
};
use reservas_entity::user::{AuthResponse, RefreshResponse, Session, User};

use crate::transport::{ApiClient, ApiRequest};

/// Login, registration and session management.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`.
    pub async fn login(&self, dto: &LoginDto) -> AppResult<AuthResponse> {
        dto.validate()?;
        let request = ApiRequest::post("/auth/login").json(dto)?.without_refresh();
        self.client.data(request).await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, dto: &RegisterDto) -> AppResult<User> {
        dto.validate()?;
        let request = ApiRequest::post("/auth/register")
            .json(dto)?
            .without_refresh();
        self.client.data(request).await
    }

    /// `POST /auth/refresh`, outside the refresh guard.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<RefreshResponse> {
        let request = ApiRequest::post("/auth/refresh")
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            })?
            .without_refresh();
        self.client.data(request).await
    }

    /// `POST /auth/logout`, revoking the session of `refresh_token`.
    pub async fn logout(&self, refresh_token: &str) -> AppResult<Option<String>> {
        let request = ApiRequest::post("/auth/logout")
            .json(&LogoutRequest {
                refresh_token: refresh_token.to_string(),
            })?
            .without_refresh();
        self.client.message(request).await
    }

    /// `GET /auth/me`.
    pub async fn me(&self) -> AppResult<User> {
        self.client.data(ApiRequest::get("/auth/me")).await
    }

    /// `PATCH /auth/profile`.
    pub async fn update_profile(&self, dto: &UpdateProfileDto) -> AppResult<User> {
        dto.validate()?;
        self.client
            .data(ApiRequest::patch("/auth/profile").json(dto)?)
            .await
    }

    /// `PATCH /auth/password`.
    pub async fn change_password(&self, dto: &ChangePasswordDto) -> AppResult<Option<String>> {
        dto.validate()?;
        self.client
            .message(ApiRequest::patch("/auth/password").json(dto)?)
            .await
    }

    /// `GET /auth/sessions`.
    pub async fn sessions(&self) -> AppResult<Vec<Session>> {
        self.client.data(ApiRequest::get("/auth/sessions")).await
    }

    /// `DELETE /auth/sessions/{id}`.
    pub async fn delete_session(&self, session_id: &str) -> AppResult<Option<String>> {
        self.client
            .message(ApiRequest::delete(format!("/auth/sessions/{session_id}")))
            .await
    }
}
