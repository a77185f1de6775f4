//! Logout and revocation behavior.

use axum::http::StatusCode;
use chrono::Duration;

use authgate_auth::{JwtEncoder, TokenIdentity};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::new();
    let token = app.register_token("alice", "alice@x.com", "wonderland").await;

    let first = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["message"], "Successfully logged out");
    assert_eq!(first.body["logged_out"], true);

    let second = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["message"], "You are already logged out");
    assert_eq!(second.body["logged_out"], true);

    assert_eq!(app.blacklist_len().await, 1);
}

#[tokio::test]
async fn test_logout_malformed_token() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/auth/logout", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "MALFORMED_TOKEN");
    assert_eq!(response.body["message"], "Invalid token format");
    assert_eq!(app.blacklist_len().await, 0);
}

#[tokio::test]
async fn test_logout_without_header() {
    let app = TestApp::new();
    let response = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_logout_accepts_expired_token() {
    let app = TestApp::new();
    app.register_token("alice", "alice@x.com", "wonderland").await;
    let me = app.login("alice", "wonderland").await;
    let user_id = me.body["user"]["id"].as_str().unwrap().parse().unwrap();

    let encoder = JwtEncoder::new(&app.auth_config).unwrap();
    let expired = encoder
        .issue_with_ttl(
            &TokenIdentity::new(user_id, "alice"),
            Duration::seconds(-120),
        )
        .unwrap();

    let rejected = app
        .request("GET", "/api/auth/me", None, Some(&expired))
        .await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);
    assert_eq!(rejected.body["error"], "INVALID_OR_EXPIRED");

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&expired))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["logged_out"], true);
}

#[tokio::test]
async fn test_stale_entry_is_cleaned_on_lookup() {
    let app = TestApp::new();
    app.register_token("alice", "alice@x.com", "wonderland").await;
    let login = app.login("alice", "wonderland").await;
    let user_id = login.body["user"]["id"].as_str().unwrap().parse().unwrap();

    let encoder = JwtEncoder::new(&app.auth_config).unwrap();
    let expired = encoder
        .issue_with_ttl(
            &TokenIdentity::new(user_id, "alice"),
            Duration::seconds(-120),
        )
        .unwrap();

    app.request("POST", "/api/auth/logout", None, Some(&expired))
        .await;
    assert_eq!(app.blacklist_len().await, 1);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&expired))
        .await;
    assert_eq!(response.body["error"], "INVALID_OR_EXPIRED");
    assert_eq!(app.blacklist_len().await, 0);
}
