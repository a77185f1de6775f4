//! Convenience result type alias for AuthGate.

use crate::error::AppError;

/// A specialized `Result` type for AuthGate operations.
pub type AppResult<T> = Result<T, AppError>;
