//! Auth handlers: register, login, me, verify-token, logout, status.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{
    AuthStatusResponse, LogoutResponse, TokenResponse, TokenUser, UserResponse,
    VerifyTokenResponse,
};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, BearerToken, MaybeAuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let session = state.auth_service.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let session = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;
    Ok(Json(session.into()))
}

/// GET /api/auth/me
pub async fn me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(user.into())
}

/// GET /api/auth/verify-token
pub async fn verify_token(AuthUser(user): AuthUser) -> Json<VerifyTokenResponse> {
    Json(VerifyTokenResponse {
        valid: true,
        message: "Token is valid".to_string(),
        user: TokenUser {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    })
}

/// POST /api/auth/logout
///
/// Accepts expired tokens; only the signature must be valid.
pub async fn logout(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<LogoutResponse>> {
    let outcome = state.auth_service.logout(token.as_str()).await?;
    Ok(Json(LogoutResponse {
        message: outcome.message().to_string(),
        logged_out: true,
    }))
}

/// GET /api/auth/status
pub async fn status(MaybeAuthUser(user): MaybeAuthUser) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        authenticated: user.is_some(),
        user: user.map(UserResponse::from),
    })
}
