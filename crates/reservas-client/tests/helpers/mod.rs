//! Shared helpers for the client integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

use reservas_client::ApiClient;
use reservas_client::token::MemoryTokenStore;
use reservas_core::config::ClientConfig;
use reservas_core::traits::TokenStore;

/// A client pointed at `server` with its own token store.
pub struct TestClient {
    pub client: ApiClient,
    pub tokens: Arc<MemoryTokenStore>,
}

impl TestClient {
    /// Client holding the access token `viejo` and refresh token `renovacion`.
    pub fn logged_in(server: &MockServer) -> Self {
        Self::with_store(server, MemoryTokenStore::with_tokens("viejo", "renovacion"))
    }

    /// Client without credentials.
    pub fn anonymous(server: &MockServer) -> Self {
        Self::with_store(server, MemoryTokenStore::new())
    }

    pub fn with_store(server: &MockServer, store: MemoryTokenStore) -> Self {
        let tokens = Arc::new(store);
        let client = client_for(server, tokens.clone());
        Self { client, tokens }
    }
}

/// Build a client whose base URL is `{server}/api`.
pub fn client_for(server: &MockServer, tokens: Arc<dyn TokenStore>) -> ApiClient {
    client_at(&format!("{}/api", server.uri()), tokens)
}

/// Build a client for an arbitrary base URL.
pub fn client_at(base_url: &str, tokens: Arc<dyn TokenStore>) -> ApiClient {
    let mut config = ClientConfig::default();
    config.api.base_url = base_url.to_string();
    ApiClient::new(&config, tokens).expect("Failed to build client")
}

/// Base URL of a local port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api")
}

/// Wrap `data` in the standard success envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn user_json(id: i64, role: &str) -> Value {
    json!({
        "id": id,
        "name": "Ana Torres",
        "email": "ana@example.com",
        "avatar": null,
        "role": role,
        "isActive": true,
        "createdAt": "2025-01-10T12:00:00.000Z",
        "updatedAt": "2025-01-10T12:00:00.000Z"
    })
}

pub fn reserva_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "libras": "150.50",
        "fecha": "2025-12-04",
        "estado": "Jalisco",
        "observaciones": null,
        "status": status,
        "fechaConfirmacion": null,
        "fechaEnvio": null,
        "fechaEntrega": null,
        "userId": 1,
        "periodoId": 3,
        "createdAt": "2025-11-01T09:00:00.000Z",
        "updatedAt": "2025-11-01T09:00:00.000Z"
    })
}

pub fn pagination_json(total: u64) -> Value {
    json!({ "page": 1, "limit": 20, "total": total, "totalPages": 1 })
}
