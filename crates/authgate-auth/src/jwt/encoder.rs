//! JWT token creation with configurable algorithm and TTL.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use authgate_core::config::AuthConfig;
use authgate_core::error::{AppError, ErrorKind};

use super::claims::{Claims, TokenIdentity};
use super::{parse_algorithm, require_secret};

/// Creates signed access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    header: Header,
    default_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.header.alg)
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        let secret = require_secret(&config.jwt_secret)?;
        let default_ttl = i64::try_from(config.access_token_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Access token TTL of {} hours is out of range",
                    config.access_token_ttl_hours
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(algorithm),
            default_ttl,
        })
    }

    /// The TTL applied by [`issue`](Self::issue).
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issues a token for `identity` that expires after the configured TTL.
    pub fn issue(&self, identity: &TokenIdentity) -> Result<String, AppError> {
        self.issue_with_ttl(identity, self.default_ttl)
    }

    /// Issues a token for `identity` expiring `ttl` from now.
    pub fn issue_with_ttl(
        &self,
        identity: &TokenIdentity,
        ttl: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal("Access token expiry is out of range"))?;
        let claims = Claims {
            sub: identity.username.clone(),
            user_id: Some(identity.user_id),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };
        self.sign(&claims)
    }

    /// Signs an arbitrary claims payload.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&self.header, claims, &self.encoding_key).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to encode access token", e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_secret() {
        let err = JwtEncoder::new(&AuthConfig::with_secret("")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_rejects_asymmetric_algorithm() {
        let mut config = AuthConfig::with_secret("secret");
        config.jwt_algorithm = "RS256".into();
        let err = JwtEncoder::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_tokens_are_distinct_within_one_second() {
        let encoder = JwtEncoder::new(&AuthConfig::with_secret("secret")).unwrap();
        let identity = TokenIdentity::new(Uuid::now_v7(), "alice");
        let t1 = encoder.issue(&identity).unwrap();
        let t2 = encoder.issue(&identity).unwrap();
        assert_ne!(t1, t2);
        assert_eq!(t1.split('.').count(), 3);
    }

    #[test]
    fn test_oversized_ttl_errors_instead_of_panicking() {
        let mut config = AuthConfig::with_secret("secret");
        config.access_token_ttl_hours = 3_000_000_000;
        let encoder = JwtEncoder::new(&config).unwrap();
        let err = encoder
            .issue(&TokenIdentity::new(Uuid::now_v7(), "alice"))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);

        config.access_token_ttl_hours = u64::MAX;
        let err = JwtEncoder::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_default_ttl_from_config() {
        let mut config = AuthConfig::with_secret("secret");
        config.access_token_ttl_hours = 3;
        let encoder = JwtEncoder::new(&config).unwrap();
        assert_eq!(encoder.default_ttl(), Duration::hours(3));
    }
}
