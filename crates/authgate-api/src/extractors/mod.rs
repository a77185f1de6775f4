//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{AuthUser, BearerToken, MaybeAuthUser};
pub use json::ValidatedJson;
