//! HTTP transport with bearer injection and refresh-and-replay on `401`.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use reservas_core::config::ClientConfig;
use reservas_core::error::AppError;
use reservas_core::events::SessionEvent;
use reservas_core::result::AppResult;
use reservas_core::traits::TokenStore;
use reservas_core::types::{ApiErrorBody, ApiResponse, Paginated};
use reservas_entity::dto::RefreshRequest;
use reservas_entity::user::RefreshResponse;

use crate::error::{decode, from_reqwest};
use crate::refresh::RefreshGuard;

/// Capacity of the session event channel.
const EVENT_CAPACITY: usize = 16;

/// A file sent as a multipart form field.
#[derive(Clone)]
pub struct FileUpload {
    /// Form field name.
    pub field: String,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub mime: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Request payload.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON document.
    Json(serde_json::Value),
    /// Single-file multipart form.
    Multipart(FileUpload),
}

/// A replayable description of one API call.
///
/// Requests are kept as plain data so the transport can send the same call a
/// second time after the access token was renewed.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Query-string pairs.
    pub query: Vec<(String, String)>,
    /// Payload.
    pub body: RequestBody,
    refresh_on_unauthorized: bool,
}

impl ApiRequest {
    /// Create a request with no query and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            refresh_on_unauthorized: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append query-string pairs.
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> AppResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a single-file multipart body.
    pub fn multipart(mut self, upload: FileUpload) -> Self {
        self.body = RequestBody::Multipart(upload);
        self
    }

    /// Surface a `401` as an error instead of refreshing.
    ///
    /// Used for the credential endpoints, where a `401` means the submitted
    /// credentials are wrong rather than the session being stale.
    pub fn without_refresh(mut self) -> Self {
        self.refresh_on_unauthorized = false;
        self
    }

    /// Whether a `401` on this request goes through the refresh guard.
    pub fn refreshes_on_unauthorized(&self) -> bool {
        self.refresh_on_unauthorized
    }
}

/// Client for the reservation API.
///
/// Cloning is cheap; clones share the connection pool, the token store, the
/// refresh guard and the event channel.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    refresh_path: String,
    tokens: Arc<dyn TokenStore>,
    guard: Arc<RefreshGuard>,
    events: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    /// Build a client from configuration and a credential backend.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.api.connect_timeout())
            .timeout(config.api.request_timeout())
            .user_agent(config.api.user_agent.clone())
            .build()
            .map_err(from_reqwest)?;

        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            refresh_path: config.auth.refresh_path.clone(),
            tokens,
            guard: Arc::new(RefreshGuard::new()),
            events,
        })
    }

    /// Base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential backend.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// The refresh guard shared by all clones.
    pub fn refresh_guard(&self) -> &RefreshGuard {
        &self.guard
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        debug!(event = event.event_type(), "Session event");
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Send a request and return the raw body of a successful response.
    ///
    /// A `401` triggers the refresh protocol and a single replay with the new
    /// credential; a `401` on the replay is returned as an error.
    pub async fn execute(&self, request: &ApiRequest) -> AppResult<Vec<u8>> {
        let sent_with = self.tokens.access_token().await?;
        let response = self.dispatch(request, sent_with.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED
            || !request.refreshes_on_unauthorized()
            || request.path == self.refresh_path
        {
            return Self::read_body(response).await;
        }

        debug!(method = %request.method, path = %request.path, "Received 401, renewing session");
        let token = self.renew_after_unauthorized(sent_with.as_deref()).await?;
        let replay = self.dispatch(request, Some(&token)).await?;
        Self::read_body(replay).await
    }

    /// Send a request and unwrap the `data` of the standard envelope.
    pub async fn data<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        let body = self.execute(&request).await?;
        decode::<ApiResponse<T>>(&body)?.into_data()
    }

    /// Send a request whose envelope carries no payload worth decoding.
    pub async fn message(&self, request: ApiRequest) -> AppResult<Option<String>> {
        let body = self.execute(&request).await?;
        decode::<ApiResponse<serde_json::Value>>(&body)?.into_message()
    }

    /// Send a request answered with the paginated envelope.
    pub async fn paginated<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<Paginated<T>> {
        let body = self.execute(&request).await?;
        // A failed call carries no pagination block, so check the flag first.
        let envelope = decode::<ApiResponse<IgnoredAny>>(&body)?;
        if !envelope.success {
            let message = envelope
                .server_message()
                .unwrap_or_else(|| "La solicitud no se completó".to_string());
            return Err(AppError::validation(message));
        }
        decode::<Paginated<T>>(&body)
    }

    /// Resolve a fresh access token after the server rejected `stale`.
    async fn renew_after_unauthorized(&self, stale: Option<&str>) -> AppResult<String> {
        if !self.guard.is_refreshing() {
            if let Some(current) = self.tokens.access_token().await? {
                if Some(current.as_str()) != stale {
                    debug!("Credential already renewed, replaying");
                    return Ok(current);
                }
            }
        }
        self.guard.run(|| self.refresh_access_token()).await
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Any failure clears the stored credentials and emits
    /// [`SessionEvent::LoginRequired`].
    async fn refresh_access_token(&self) -> AppResult<String> {
        let Some(refresh_token) = self.tokens.refresh_token().await? else {
            return Err(self.force_login("No hay token de renovación").await);
        };

        let request = ApiRequest::post(self.refresh_path.clone())
            .json(&RefreshRequest { refresh_token })?
            .without_refresh();

        let outcome = match self.dispatch(&request, None).await {
            Ok(response) => match Self::read_body(response).await {
                Ok(body) => decode::<ApiResponse<RefreshResponse>>(&body)
                    .and_then(ApiResponse::into_data),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        match outcome {
            Ok(RefreshResponse { access_token }) => {
                self.tokens.set_access_token(&access_token).await?;
                info!("Access token renewed");
                self.emit(SessionEvent::TokenRefreshed);
                Ok(access_token)
            }
            Err(e) => {
                warn!(error = %e, "Refresh token rejected");
                Err(self.force_login(&e.message).await)
            }
        }
    }

    /// Drop local credentials and tell subscribers a login is required.
    async fn force_login(&self, reason: &str) -> AppError {
        if let Err(e) = self.tokens.clear().await {
            warn!(error = %e, "Failed to clear stored credentials");
        }
        self.emit(SessionEvent::LoginRequired {
            reason: reason.to_string(),
        });
        AppError::session_expired()
    }

    async fn dispatch(&self, request: &ApiRequest, bearer: Option<&str>) -> AppResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, "Sending request");

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(upload) => {
                let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
                    .file_name(upload.file_name.clone())
                    .mime_str(&upload.mime)
                    .map_err(|e| {
                        AppError::validation(format!("Tipo de archivo inválido '{}': {e}", upload.mime))
                    })?;
                builder.multipart(reqwest::multipart::Form::new().part(upload.field.clone(), part))
            }
        };

        builder.send().await.map_err(from_reqwest)
    }

    async fn read_body(response: reqwest::Response) -> AppResult<Vec<u8>> {
        let status = response.status();
        let body = response.bytes().await.map_err(from_reqwest)?.to_vec();
        if status.is_success() {
            Ok(body)
        } else {
            let message = ApiErrorBody::parse(&body).best_message();
            debug!(status = status.as_u16(), "Request failed");
            Err(AppError::from_status(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::patch("/reservas/3/status")
            .json(&serde_json::json!({ "status": "ENVIADA" }))
            .unwrap()
            .query(vec![("page".into(), "1".into())]);
        assert_eq!(request.method, Method::PATCH);
        assert!(matches!(request.body, RequestBody::Json(_)));
        assert!(request.refreshes_on_unauthorized());
        assert!(!request.clone().without_refresh().refreshes_on_unauthorized());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = ClientConfig::default();
        config.api.base_url = "http://localhost:5000/api/".into();
        let client = ApiClient::new(
            &config,
            Arc::new(crate::token::MemoryTokenStore::new()),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }
}
