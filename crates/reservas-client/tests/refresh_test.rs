//! Integration tests for the refresh-and-replay protocol.

mod helpers;

use std::time::Duration;

use futures::future::join_all;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reservas_core::error::ErrorKind;
use reservas_core::events::SessionEvent;
use reservas_core::traits::TokenStore;

use helpers::{TestClient, envelope, user_json};

async fn mount_me_requiring(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json(1, "USUARIO"))))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "success": false, "message": "Token expirado" })),
        )
        .with_priority(10)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_concurrent_401s_trigger_single_refresh() {
    let server = MockServer::start().await;
    mount_me_requiring(&server, "nuevo").await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({ "refreshToken": "renovacion" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!({ "accessToken": "nuevo" })))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let test = TestClient::logged_in(&server);
    let mut events = test.client.subscribe();

    let auth = test.client.auth();
    let results = join_all((0..5).map(|_| auth.me())).await;

    for result in results {
        let user = result.expect("request should succeed after refresh");
        assert_eq!(user.email, "ana@example.com");
    }
    assert_eq!(
        test.tokens.access_token().await.unwrap().as_deref(),
        Some("nuevo")
    );
    assert_eq!(
        test.tokens.refresh_token().await.unwrap().as_deref(),
        Some("renovacion")
    );
    assert_eq!(events.try_recv().unwrap(), SessionEvent::TokenRefreshed);
    assert!(events.try_recv().is_err());
    assert!(!test.client.refresh_guard().is_refreshing());
}

#[tokio::test]
async fn test_refresh_failure_rejects_all_and_clears_tokens() {
    let server = MockServer::start().await;
    mount_me_requiring(&server, "nuevo").await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "success": false, "message": "Refresh token inválido" }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let test = TestClient::logged_in(&server);
    let mut events = test.client.subscribe();

    let auth = test.client.auth();
    let results = join_all((0..3).map(|_| auth.me())).await;

    for result in results {
        let err = result.expect_err("every queued request should fail");
        assert!(err.is_login_required());
    }
    assert!(!test.tokens.has_tokens().await.unwrap());
    assert!(matches!(
        events.try_recv().unwrap(),
        SessionEvent::LoginRequired { .. }
    ));
}

#[tokio::test]
async fn test_replay_happens_at_most_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expirado" })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "accessToken": "nuevo" }))))
        .expect(1)
        .mount(&server)
        .await;

    let test = TestClient::logged_in(&server);
    let err = test.client.auth().me().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Token expirado");
    // The renewed credential stays; only a failed refresh clears it.
    assert!(test.tokens.has_tokens().await.unwrap());
}

#[tokio::test]
async fn test_missing_refresh_token_requires_login() {
    let server = MockServer::start().await;
    mount_me_requiring(&server, "nuevo").await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let test = TestClient::anonymous(&server);
    test.tokens.set_access_token("viejo").await.unwrap();

    let err = test.client.auth().me().await.unwrap_err();
    assert!(err.is_login_required());
    assert_eq!(test.tokens.access_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_later_requests_use_renewed_credential() {
    let server = MockServer::start().await;
    mount_me_requiring(&server, "nuevo").await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "accessToken": "nuevo" }))))
        .expect(1)
        .mount(&server)
        .await;

    let test = TestClient::logged_in(&server);
    test.client.auth().me().await.expect("first call refreshes");
    test.client.auth().me().await.expect("second call uses the new token");
}

#[tokio::test]
async fn test_login_401_is_not_refreshed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "success": false, "message": "Credenciales inválidas" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let test = TestClient::logged_in(&server);
    let dto = reservas_entity::dto::LoginDto {
        email: "ana@example.com".into(),
        password: "Secreto#2025".into(),
    };
    let err = test.client.auth().login(&dto).await.unwrap_err();

    assert_eq!(err.message, "Credenciales inválidas");
    assert!(test.tokens.has_tokens().await.unwrap());
}
