//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use authgate_api::{AppState, build_app};
use authgate_core::config::{AuthConfig, ServerConfig};
use authgate_database::{BlacklistStore, MemoryBlacklistStore, MemoryUserStore};
use authgate_service::AuthService;

pub const SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Auth configuration the app was built with
    pub auth_config: AuthConfig,
    /// Backing user store
    pub users: Arc<MemoryUserStore>,
    /// Backing blacklist store
    pub blacklist: Arc<MemoryBlacklistStore>,
}

/// Parsed response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

pub fn test_auth_config() -> AuthConfig {
    let mut config = AuthConfig::with_secret(SECRET);
    config.argon2_memory_kib = 1024;
    config.argon2_iterations = 1;
    config
}

impl TestApp {
    /// Create a new test application with empty stores
    pub fn new() -> Self {
        let auth_config = test_auth_config();
        let users = Arc::new(MemoryUserStore::new());
        let blacklist = Arc::new(MemoryBlacklistStore::new());

        let auth_service = AuthService::new(&auth_config, users.clone(), blacklist.clone())
            .expect("Failed to build auth service");
        let state = AppState::new(ServerConfig::default(), auth_service, users.clone());

        Self {
            router: build_app(state),
            auth_config,
            users,
            blacklist,
        }
    }

    /// Number of blacklist entries
    pub async fn blacklist_len(&self) -> u64 {
        self.blacklist.count().await.expect("Failed to count blacklist")
    }

    /// Register a user through the API and return its token
    pub async fn register(&self, username: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(registration_body(username, email, password)),
            None,
        )
        .await
    }

    /// Register a user and return the issued access token
    pub async fn register_token(&self, username: &str, email: &str, password: &str) -> String {
        let response = self.register(username, email, password).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        access_token(&response)
    }

    /// Log in through the API
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Send a request with an optional JSON body and bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A valid registration body
pub fn registration_body(username: &str, email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "username": username,
        "name": "Alice",
        "surname": "Liddell",
        "password": password,
        "profession": "Explorer",
        "dateOfBirth": "1990-05-17",
        "photo": null,
        "consent": true
    })
}

/// Pull `access_token` out of a register/login response
pub fn access_token(response: &TestResponse) -> String {
    response.body["access_token"]
        .as_str()
        .expect("access_token missing")
        .to_string()
}
