//! # authgate-database
//!
//! Persistence for AuthGate: the PostgreSQL pool and migrations, the
//! [`UserStore`] and [`BlacklistStore`] seams, their sqlx-backed
//! repositories, and in-memory stores with the same uniqueness semantics.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod traits;

pub use connection::DatabasePool;
pub use memory::{MemoryBlacklistStore, MemoryUserStore};
pub use repositories::{BlacklistRepository, UserRepository};
pub use traits::{BlacklistStore, UserStore};
