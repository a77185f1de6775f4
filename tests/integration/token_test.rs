//! Token payload edge cases at the HTTP boundary.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use uuid::Uuid;

use authgate_auth::{Claims, JwtEncoder, TokenIdentity};
use authgate_core::config::AuthConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_token_without_user_id() {
    let app = TestApp::new();
    let encoder = JwtEncoder::new(&app.auth_config).unwrap();
    let now = Utc::now();
    let token = encoder
        .sign(&Claims {
            sub: "alice".into(),
            user_id: None,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            jti: Uuid::new_v4(),
        })
        .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "MALFORMED_PAYLOAD");
}

#[tokio::test]
async fn test_token_for_missing_user() {
    let app = TestApp::new();
    let encoder = JwtEncoder::new(&app.auth_config).unwrap();
    let token = encoder
        .issue(&TokenIdentity::new(Uuid::now_v7(), "ghost"))
        .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_token_signed_with_other_secret() {
    let app = TestApp::new();
    app.register_token("alice", "alice@x.com", "wonderland").await;
    let login = app.login("alice", "wonderland").await;
    let user_id = login.body["user"]["id"].as_str().unwrap().parse().unwrap();

    let forger = JwtEncoder::new(&AuthConfig::with_secret("not-the-secret")).unwrap();
    let forged = forger
        .issue(&TokenIdentity::new(user_id, "alice"))
        .unwrap();

    let response = app
        .request("GET", "/api/auth/verify-token", None, Some(&forged))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_OR_EXPIRED");

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&forged))
        .await;
    assert_eq!(logout.body["error"], "MALFORMED_TOKEN");
}
