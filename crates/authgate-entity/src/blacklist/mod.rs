//! Revoked token entities.

pub mod model;

pub use model::BlacklistedToken;
