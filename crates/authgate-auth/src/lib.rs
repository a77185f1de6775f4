//! # authgate-auth
//!
//! The cryptographic and revocation building blocks of AuthGate.
//!
//! ## Modules
//!
//! - `password` : Argon2id hashing and fail-closed verification
//! - `jwt` : signed, time-bound bearer token issuance and verification
//! - `blacklist` : the revocation list and its optional periodic sweeper

pub mod blacklist;
pub mod jwt;
pub mod password;

pub use blacklist::{BlacklistSweeper, RevocationList, RevocationOutcome};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenIdentity};
pub use password::PasswordHasher;
