//! Register, login, authenticate, and logout.

use std::sync::Arc;

use tracing::{debug, info, warn};

use authgate_auth::{
    Claims, JwtDecoder, JwtEncoder, PasswordHasher, RevocationList, RevocationOutcome,
    TokenIdentity,
};
use authgate_core::config::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_database::{BlacklistStore, UserStore};
use authgate_entity::user::User;

use super::types::{AuthSession, LogoutOutcome, NewRegistration};

/// Orchestrates the credential store, hasher, token service and blacklist.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    revocations: RevocationList,
}

impl AuthService {
    /// Builds the service from validated auth configuration and its stores.
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        blacklist: Arc<dyn BlacklistStore>,
    ) -> AppResult<Self> {
        Ok(Self {
            users,
            hasher: PasswordHasher::new(config)?,
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config)?,
            revocations: RevocationList::new(blacklist),
        })
    }

    /// The revocation list backing this service.
    pub fn revocations(&self) -> &RevocationList {
        &self.revocations
    }

    /// Creates an account and issues its first token.
    ///
    /// Uniqueness is decided by the store's insert; a failed registration
    /// leaves no user behind.
    pub async fn register(&self, registration: NewRegistration) -> AppResult<AuthSession> {
        let password_hash = self.hasher.hash(&registration.password)?;
        let user = self
            .users
            .create_user(&registration.into_create_user(password_hash))
            .await?;

        let token = self.issue_for(&user)?;
        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthSession { token, user })
    }

    /// Exchanges credentials for a new token.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthSession> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!("Login rejected: unknown username");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify(password, &user.password_hash) {
            debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::invalid_credentials());
        }

        let token = self.issue_for(&user)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { token, user })
    }

    /// Resolves a bearer token to the user it was issued to.
    pub async fn authenticate(&self, token: &str) -> AppResult<User> {
        let claims = self.verify_unrevoked(token).await?;

        let user_id = claims.user_id.ok_or_else(AppError::malformed_payload)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    /// Like [`authenticate`](Self::authenticate) but every failure, including
    /// a missing token, yields `None`.
    pub async fn authenticate_optional(&self, token: Option<&str>) -> Option<User> {
        let token = token?;
        match self.authenticate(token).await {
            Ok(user) => Some(user),
            Err(e) if e.is_client_error() => {
                debug!(reason = %e.kind, "Optional authentication declined");
                None
            }
            Err(e) => {
                warn!(error = %e, "Optional authentication failed on a server fault");
                None
            }
        }
    }

    /// Revokes `token` until its own expiry.
    ///
    /// Only the signature is checked, so an expired token can still be
    /// logged out. Repeating the call is a success.
    pub async fn logout(&self, token: &str) -> AppResult<LogoutOutcome> {
        let claims = self
            .decoder
            .verify(token, false)
            .ok_or_else(AppError::malformed_token)?;

        let outcome = match self.revocations.add(token, claims.expires_at()).await? {
            RevocationOutcome::Added => LogoutOutcome::LoggedOut,
            RevocationOutcome::AlreadyPresent => LogoutOutcome::AlreadyLoggedOut,
        };

        info!(
            user_id = ?claims.user_id,
            outcome = ?outcome,
            "User logged out"
        );
        Ok(outcome)
    }

    async fn verify_unrevoked(&self, token: &str) -> AppResult<Claims> {
        if self.revocations.is_blacklisted(token).await? {
            return Err(AppError::revoked());
        }

        self.decoder
            .verify(token, true)
            .ok_or_else(AppError::invalid_or_expired)
    }

    fn issue_for(&self, user: &User) -> AppResult<String> {
        self.encoder
            .issue(&TokenIdentity::new(user.id, user.username.clone()))
    }
}
