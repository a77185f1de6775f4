//! In-memory stores.
//!
//! Used by tests and by deployments that do not need durability. They honor
//! the same uniqueness and staleness rules as the Postgres repositories.

pub mod blacklist;
pub mod user;

pub use blacklist::MemoryBlacklistStore;
pub use user::MemoryUserStore;
