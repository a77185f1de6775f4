//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use authgate_core::config::ServerConfig;
use authgate_database::UserStore;
use authgate_service::AuthService;

/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// HTTP server settings (CORS, timeouts).
    pub server: Arc<ServerConfig>,
    /// Register, login, authenticate, logout.
    pub auth_service: Arc<AuthService>,
    /// User store, probed by the detailed health check.
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(
        server: ServerConfig,
        auth_service: AuthService,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            server: Arc::new(server),
            auth_service: Arc::new(auth_service),
            users,
        }
    }
}
