//! Registration, login, and protected-route flows.

use axum::http::StatusCode;

use crate::helpers::{TestApp, access_token, registration_body};

#[tokio::test]
async fn test_register_returns_token_and_public_user() {
    let app = TestApp::new();
    let response = app.register("alice", "alice@x.com", "wonderland").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["token_type"], "bearer");
    assert!(response.body["access_token"].is_string());

    let user = &response.body["user"];
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@x.com");
    assert_eq!(user["date_of_birth"], "1990-05-17");
    assert!(user.get("password_hash").is_none());
    assert!(user.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username_and_email() {
    let app = TestApp::new();
    app.register_token("alice", "alice@x.com", "wonderland").await;

    let response = app.register("alice", "other@x.com", "wonderland").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE_USERNAME");
    assert_eq!(response.body["message"], "Username already taken");

    let response = app.register("bob", "alice@x.com", "wonderland").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE_EMAIL");

    assert_eq!(app.users.len().await, 1);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new();

    let mut body = registration_body("alice", "not-an-email", "wonderland");
    let response = app
        .request("POST", "/api/auth/register", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_INPUT");

    body["email"] = "alice@x.com".into();
    body["password"] = "12345".into();
    let response = app
        .request("POST", "/api/auth/register", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("password")
    );

    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "username": "alice" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register_token("alice", "alice@x.com", "wonderland").await;

    let response = app.login("alice", "wonderland").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
    assert_eq!(response.body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_login_failures_indistinguishable() {
    let app = TestApp::new();
    app.register_token("alice", "alice@x.com", "wonderland").await;

    let wrong_password = app.login("alice", "nope").await;
    let unknown_user = app.login("nobody", "wonderland").await;

    for response in [&wrong_password, &unknown_user] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "INVALID_CREDENTIALS");
        assert_eq!(response.headers["www-authenticate"], "Bearer");
    }
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_me_and_verify_token() {
    let app = TestApp::new();
    let token = app.register_token("alice", "alice@x.com", "wonderland").await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["username"], "alice");
    assert_eq!(me.body["surname"], "Liddell");

    let verify = app
        .request("GET", "/api/auth/verify-token", None, Some(&token))
        .await;
    assert_eq!(verify.status, StatusCode::OK);
    assert_eq!(verify.body["valid"], true);
    assert_eq!(verify.body["message"], "Token is valid");
    assert_eq!(verify.body["user"]["id"], me.body["id"]);
    assert_eq!(verify.body["user"]["email"], "alice@x.com");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_status_is_optional_auth() {
    let app = TestApp::new();
    let token = app.register_token("alice", "alice@x.com", "wonderland").await;

    let anonymous = app.request("GET", "/api/auth/status", None, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.body["authenticated"], false);
    assert!(anonymous.body.get("user").is_none());

    let garbage = app
        .request("GET", "/api/auth/status", None, Some("garbage"))
        .await;
    assert_eq!(garbage.status, StatusCode::OK);
    assert_eq!(garbage.body["authenticated"], false);

    let signed_in = app
        .request("GET", "/api/auth/status", None, Some(&token))
        .await;
    assert_eq!(signed_in.body["authenticated"], true);
    assert_eq!(signed_in.body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_alice_walkthrough() {
    let app = TestApp::new();

    let t1 = app.register_token("alice", "alice@x.com", "wonderland").await;

    let wrong = app.login("alice", "wrong-password").await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["error"], "INVALID_CREDENTIALS");

    let login = app.login("alice", "wonderland").await;
    assert_eq!(login.status, StatusCode::OK);
    let t2 = access_token(&login);
    assert_ne!(t1, t2);

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&t2))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["logged_out"], true);

    let revoked = app.request("GET", "/api/auth/me", None, Some(&t2)).await;
    assert_eq!(revoked.status, StatusCode::UNAUTHORIZED);
    assert_eq!(revoked.body["error"], "REVOKED");

    let still_valid = app.request("GET", "/api/auth/me", None, Some(&t1)).await;
    assert_eq!(still_valid.status, StatusCode::OK);
    assert_eq!(still_valid.body["username"], "alice");
}
