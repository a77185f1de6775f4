//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use authgate_service::NewRegistration;

/// Registration request body.
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        email(message = "Must be a valid email address"),
        length(max = 100, message = "Must be at most 100 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "Must be 1 to 50 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 100, message = "Must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Must be 1 to 100 characters"))]
    pub surname: String,
    #[validate(length(min = 6, message = "Must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "Must be 1 to 100 characters"))]
    pub profession: String,
    /// Accepted as `dateOfBirth` or `date_of_birth`.
    #[serde(rename = "dateOfBirth", alias = "date_of_birth")]
    pub date_of_birth: NaiveDate,
    /// Optional photo URL.
    #[serde(default)]
    #[validate(length(max = 500, message = "Must be at most 500 characters"))]
    pub photo: Option<String>,
    pub consent: bool,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl From<RegisterRequest> for NewRegistration {
    fn from(req: RegisterRequest) -> Self {
        NewRegistration {
            username: req.username,
            email: req.email,
            name: req.name,
            surname: req.surname,
            password: req.password,
            profession: req.profession,
            date_of_birth: req.date_of_birth,
            photo_url: req.photo,
            consent: req.consent,
        }
    }
}

/// Login request body.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
