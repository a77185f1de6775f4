//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use authgate_core::error::{AppError, ErrorKind};

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::DuplicateUsername | ErrorKind::DuplicateEmail | ErrorKind::InvalidInput => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::InvalidCredentials
        | ErrorKind::Revoked
        | ErrorKind::InvalidOrExpired
        | ErrorKind::MalformedPayload
        | ErrorKind::MalformedToken
        | ErrorKind::MissingToken
        | ErrorKind::UserNotFound => StatusCode::UNAUTHORIZED,
        ErrorKind::HashingFailure
        | ErrorKind::Persistence
        | ErrorKind::Configuration
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let message = if err.is_client_error() {
            err.message.clone()
        } else {
            tracing::error!(
                kind = %err.kind,
                error = %err,
                source = ?std::error::Error::source(&err),
                "Request failed with server error"
            );
            "Internal server error".to_string()
        };

        let body = ApiErrorResponse {
            error: err.kind.code().to_string(),
            message,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
