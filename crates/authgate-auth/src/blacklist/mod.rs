//! Token revocation.

pub mod list;
pub mod sweep;

pub use list::{RevocationList, RevocationOutcome};
pub use sweep::BlacklistSweeper;
