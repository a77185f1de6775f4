//! sqlx-backed repository implementations.

pub mod blacklist;
pub mod user;

pub use blacklist::BlacklistRepository;
pub use user::UserRepository;
