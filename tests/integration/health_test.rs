//! Service banner, health probes, and CORS.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_root_and_health() {
    let app = TestApp::new();

    let root = app.request("GET", "/", None, None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.body["status"], "running");

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "healthy");

    let detailed = app.request("GET", "/health/detailed", None, None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(detailed.body["database"], "connected");
}

#[tokio::test]
async fn test_cors_preflight_for_default_origin() {
    let app = TestApp::new();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/auth/login")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,authorization")
        .body(Body::empty())
        .unwrap();

    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(response.headers["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let app = TestApp::new();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header("Origin", "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .headers
            .get("access-control-allow-origin")
            .is_none()
    );
}
