//! Bearer-token extractors.
//!
//! [`BearerToken`] only pulls the raw token out of the `Authorization`
//! header; [`AuthUser`] and [`MaybeAuthUser`] resolve it through the
//! [`AuthService`](authgate_service::AuthService).

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use authgate_core::error::AppError;
use authgate_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The raw token from an `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parses a bearer token out of the request headers, if present.
fn bearer_from_parts(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_from_parts(parts)
            .map(BearerToken)
            .ok_or_else(|| ApiError(AppError::missing_token()))
    }
}

/// The user behind a valid, unrevoked bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let user = state.auth_service.authenticate(&token).await?;
        Ok(AuthUser(user))
    }
}

/// The authenticated user if a usable token was presented, otherwise `None`.
///
/// Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_from_parts(parts);
        Ok(MaybeAuthUser(
            state.auth_service.authenticate_optional(token.as_deref()).await,
        ))
    }
}
