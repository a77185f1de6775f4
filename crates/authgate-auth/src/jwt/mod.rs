//! JWT token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenIdentity};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

use jsonwebtoken::Algorithm;

use authgate_core::config::SUPPORTED_ALGORITHMS;
use authgate_core::error::AppError;

/// Resolve a configured algorithm name into an HMAC [`Algorithm`].
pub(crate) fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    if !SUPPORTED_ALGORITHMS.contains(&name) {
        return Err(AppError::configuration(format!(
            "Unsupported signing algorithm '{name}'"
        )));
    }
    name.parse::<Algorithm>().map_err(|e| {
        AppError::configuration(format!("Invalid signing algorithm '{name}': {e}"))
    })
}

fn require_secret(secret: &str) -> Result<&[u8], AppError> {
    if secret.is_empty() {
        return Err(AppError::configuration("Token signing secret is empty"));
    }
    Ok(secret.as_bytes())
}
