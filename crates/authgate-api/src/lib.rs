//! # authgate-api
//!
//! HTTP API layer for AuthGate built on Axum.
//!
//! Provides the `/api/auth` endpoints, health probes, bearer-token
//! extractors, request validation, CORS and logging middleware, and the
//! mapping from [`AppError`](authgate_core::AppError) to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
