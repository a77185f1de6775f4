//! Authentication flows.

pub mod service;
pub mod types;

pub use service::AuthService;
pub use types::{AuthSession, LogoutOutcome, NewRegistration};
