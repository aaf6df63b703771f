//! Integration tests for login, logout and credential persistence.

mod helpers;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reservas_client::token::FileTokenStore;
use reservas_client::{AuthSession, SessionStatus};
use reservas_core::events::SessionEvent;
use reservas_core::traits::TokenStore;
use reservas_core::types::UserId;
use reservas_entity::dto::{ChangeProfilePasswordDto, LoginDto};
use reservas_entity::user::Role;

use helpers::{TestClient, client_for, envelope, user_json};

fn login_dto() -> LoginDto {
    LoginDto {
        email: "ana@example.com".into(),
        password: "Secreto#2025".into(),
    }
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "ana@example.com", "password": "Secreto#2025" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "user": user_json(7, "ADMIN_PRINCIPAL"),
            "accessToken": "acceso",
            "refreshToken": "renovacion"
        }))))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_stores_tokens_and_emits_event() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let test = TestClient::anonymous(&server);
    let session = AuthSession::new(test.client.clone());
    let mut events = test.client.subscribe();

    assert_eq!(session.status().await.unwrap(), SessionStatus::Anonymous);
    let user = session.login(&login_dto()).await.unwrap();

    assert_eq!(user.role, Role::AdminPrincipal);
    assert_eq!(session.status().await.unwrap(), SessionStatus::Authenticated);
    assert_eq!(
        test.tokens.access_token().await.unwrap().as_deref(),
        Some("acceso")
    );
    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::LoggedIn {
            user_id: UserId::new(7)
        }
    );
}

#[tokio::test]
async fn test_logout_clears_even_when_server_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(body_json(json!({ "refreshToken": "renovacion" })))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let test = TestClient::logged_in(&server);
    let session = AuthSession::new(test.client.clone());
    let mut events = test.client.subscribe();

    session.logout().await.unwrap();

    assert!(!session.is_authenticated().await.unwrap());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::LoggedOut);
}

#[tokio::test]
async fn test_logout_without_tokens_skips_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let test = TestClient::anonymous(&server);
    AuthSession::new(test.client.clone()).logout().await.unwrap();
}

#[tokio::test]
async fn test_profile_password_change_forces_login() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/profile/password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Contraseña actualizada"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let test = TestClient::logged_in(&server);
    let session = AuthSession::new(test.client.clone());

    let dto = ChangeProfilePasswordDto {
        current_password: "Viejo#2024".into(),
        new_password: "Nuevo#2025".into(),
    };
    let message = session.change_profile_password(&dto).await.unwrap();

    assert_eq!(message.as_deref(), Some("Contraseña actualizada"));
    assert!(!session.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn test_login_persists_to_file_store() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("reservas/tokens.json");

    let store = Arc::new(FileTokenStore::new(&token_file));
    let session = AuthSession::new(client_for(&server, store));
    session.login(&login_dto()).await.unwrap();

    let reopened = FileTokenStore::new(&token_file);
    assert!(reopened.has_tokens().await.unwrap());
    assert_eq!(
        reopened.refresh_token().await.unwrap().as_deref(),
        Some("renovacion")
    );
}
