//! Unified application error types for AuthGate.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The [`ErrorKind`] carries the stable,
//! machine-readable reason that callers see; the message is for humans.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The username is already registered.
    DuplicateUsername,
    /// The email address is already registered.
    DuplicateEmail,
    /// Unknown username or wrong password. Deliberately does not say which.
    InvalidCredentials,
    /// The token was explicitly revoked by a logout.
    Revoked,
    /// The token signature is invalid or the token has expired.
    InvalidOrExpired,
    /// The token verified but does not carry a user identifier.
    MalformedPayload,
    /// The token could not be verified even with expiration ignored.
    MalformedToken,
    /// No bearer token was presented where one is required.
    MissingToken,
    /// The token refers to a user that does not exist.
    UserNotFound,
    /// Caller-supplied input failed validation.
    InvalidInput,
    /// The password hashing primitive failed.
    HashingFailure,
    /// The backing store failed or was unreachable.
    Persistence,
    /// Startup configuration is missing or invalid.
    Configuration,
    /// Any other unexpected internal failure.
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Revoked => "REVOKED",
            Self::InvalidOrExpired => "INVALID_OR_EXPIRED",
            Self::MalformedPayload => "MALFORMED_PAYLOAD",
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::MissingToken => "MISSING_TOKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidInput => "INVALID_INPUT",
            Self::HashingFailure => "HASHING_FAILURE",
            Self::Persistence => "PERSISTENCE",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        }
    }

    /// Whether this kind describes a caller mistake rather than a server fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            Self::HashingFailure | Self::Persistence | Self::Configuration | Self::Internal
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The unified application error used throughout AuthGate.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn duplicate_username() -> Self {
        Self::new(ErrorKind::DuplicateUsername, "Username already taken")
    }

    pub fn duplicate_email() -> Self {
        Self::new(ErrorKind::DuplicateEmail, "Email already registered")
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid username or password")
    }

    pub fn revoked() -> Self {
        Self::new(
            ErrorKind::Revoked,
            "Token has been revoked. Please login again.",
        )
    }

    pub fn invalid_or_expired() -> Self {
        Self::new(ErrorKind::InvalidOrExpired, "Invalid or expired token")
    }

    pub fn malformed_payload() -> Self {
        Self::new(
            ErrorKind::MalformedPayload,
            "Token does not contain user information",
        )
    }

    pub fn malformed_token() -> Self {
        Self::new(ErrorKind::MalformedToken, "Invalid token format")
    }

    pub fn missing_token() -> Self {
        Self::new(ErrorKind::MissingToken, "Not authenticated")
    }

    pub fn user_not_found() -> Self {
        Self::new(ErrorKind::UserNotFound, "User not found")
    }

    /// Create an input validation error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Create a hashing failure.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HashingFailure, message)
    }

    /// Create a persistence error.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Persistence, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Shorthand for `self.kind.is_client_error()`.
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(ErrorKind::Persistence, format!("Database error: {err}"), err)
    }
}
