//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// HMAC algorithms accepted for token signing.
pub const SUPPORTED_ALGORITHMS: &[&str] = &["HS256", "HS384", "HS512"];

/// Longest accepted access token lifetime: one year.
pub const MAX_ACCESS_TOKEN_TTL_HOURS: u64 = 24 * 366;

/// Token signing, password hashing, and revocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing. Required; never serialized.
    #[serde(default, skip_serializing)]
    pub jwt_secret: String,
    /// Signing algorithm name.
    #[serde(default = "default_algorithm")]
    pub jwt_algorithm: String,
    /// Access token lifetime in hours.
    #[serde(default = "default_ttl_hours")]
    pub access_token_ttl_hours: u64,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,
    /// Argon2 lanes.
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
    /// Interval of the background blacklist sweep in seconds (0 disables it).
    #[serde(default)]
    pub blacklist_sweep_interval_seconds: u64,
}

impl AuthConfig {
    /// Builds an auth config around the given secret with every other field defaulted.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            jwt_algorithm: default_algorithm(),
            access_token_ttl_hours: default_ttl_hours(),
            argon2_memory_kib: default_argon2_memory(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
            blacklist_sweep_interval_seconds: 0,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_secret(String::new())
    }
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_ttl_hours() -> u64 {
    1
}

fn default_argon2_memory() -> u32 {
    19_456
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}
