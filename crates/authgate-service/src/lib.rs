//! # authgate-service
//!
//! The authentication flow orchestrator. [`AuthService`] composes the
//! credential store, password hasher, token encoder/decoder and revocation
//! list into the register, login, authenticate and logout operations.
//!
//! Dependencies are injected at construction; nothing here reads the
//! process environment.

pub mod auth;

pub use auth::{AuthService, AuthSession, LogoutOutcome, NewRegistration};
