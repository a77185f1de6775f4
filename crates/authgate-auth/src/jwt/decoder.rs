//! JWT token verification.

use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::debug;

use authgate_core::config::AuthConfig;
use authgate_core::error::AppError;

use super::claims::Claims;
use super::{parse_algorithm, require_secret};

/// Clock skew tolerated when checking expiry, in seconds.
///
/// Must stay zero: blacklist entries become stale the second after `exp`,
/// so any leeway would let a logged-out token through once its entry is gone.
const LEEWAY_SECONDS: u64 = 0;

/// Verifies token signatures and, optionally, expiry.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    /// Signature and expiry.
    strict: Validation,
    /// Signature only.
    lenient: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithms", &self.strict.algorithms)
            .field("leeway", &self.strict.leeway)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        let secret = require_secret(&config.jwt_secret)?;

        let mut strict = Validation::new(algorithm);
        strict.validate_exp = true;
        strict.leeway = LEEWAY_SECONDS;

        let mut lenient = strict.clone();
        lenient.validate_exp = false;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            strict,
            lenient,
        })
    }

    /// Verifies `token` and returns its payload.
    ///
    /// Returns `None` on any signature, format, or (when `check_expiration`
    /// is set) expiry failure. Never errors on malformed input.
    pub fn verify(&self, token: &str, check_expiration: bool) -> Option<Claims> {
        let validation = if check_expiration {
            &self.strict
        } else {
            &self.lenient
        };

        match decode::<Claims>(token, &self.decoding_key, validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(reason = ?e.kind(), check_expiration, "Token verification failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use uuid::Uuid;

    use super::*;
    use crate::jwt::claims::TokenIdentity;
    use crate::jwt::encoder::JwtEncoder;

    fn pair(secret: &str) -> (JwtEncoder, JwtDecoder) {
        let config = AuthConfig::with_secret(secret);
        (
            JwtEncoder::new(&config).unwrap(),
            JwtDecoder::new(&config).unwrap(),
        )
    }

    #[test]
    fn test_verify_returns_issued_identity() {
        let (encoder, decoder) = pair("secret");
        let identity = TokenIdentity::new(Uuid::now_v7(), "alice");
        let token = encoder.issue(&identity).unwrap();

        let claims = decoder.verify(&token, true).unwrap();
        assert_eq!(claims.identity(), Some(identity));
    }

    #[test]
    fn test_expired_token_decodes_only_without_expiry_check() {
        let (encoder, decoder) = pair("secret");
        let identity = TokenIdentity::new(Uuid::now_v7(), "alice");
        let token = encoder
            .issue_with_ttl(&identity, Duration::seconds(-60))
            .unwrap();

        assert!(decoder.verify(&token, true).is_none());
        let claims = decoder.verify(&token, false).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.user_id, Some(identity.user_id));
    }

    #[test]
    fn test_no_leeway_past_expiry() {
        let (encoder, decoder) = pair("secret");
        let token = encoder
            .issue_with_ttl(
                &TokenIdentity::new(Uuid::now_v7(), "alice"),
                Duration::seconds(-1),
            )
            .unwrap();

        assert!(decoder.verify(&token, true).is_none());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (encoder, _) = pair("secret");
        let (_, other) = pair("another-secret");
        let token = encoder
            .issue(&TokenIdentity::new(Uuid::now_v7(), "alice"))
            .unwrap();

        assert!(other.verify(&token, true).is_none());
        assert!(other.verify(&token, false).is_none());
    }

    #[test]
    fn test_garbage_is_none() {
        let (_, decoder) = pair("secret");
        assert!(decoder.verify("", true).is_none());
        assert!(decoder.verify("not.a.token", false).is_none());
    }

    #[test]
    fn test_algorithm_mismatch_rejected() {
        let mut config = AuthConfig::with_secret("secret");
        config.jwt_algorithm = "HS512".into();
        let encoder = JwtEncoder::new(&config).unwrap();
        let (_, decoder) = pair("secret");
        let token = encoder
            .issue(&TokenIdentity::new(Uuid::now_v7(), "alice"))
            .unwrap();

        assert!(decoder.verify(&token, true).is_none());
    }
}
