//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user.
///
/// Immutable after registration apart from `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Self-declared profession.
    pub profession: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Optional link to a profile photo.
    pub photo_url: Option<String>,
    /// Whether the user accepted the terms at registration.
    pub consent: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated, if ever.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    /// Pre-hashed password.
    pub password_hash: String,
    pub profession: String,
    pub date_of_birth: NaiveDate,
    pub photo_url: Option<String>,
    pub consent: bool,
}

impl CreateUser {
    /// Materialize the row a store would persist for this data.
    pub fn into_user(self, id: Uuid, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            name: self.name,
            surname: self.surname,
            password_hash: self.password_hash,
            profession: self.profession,
            date_of_birth: self.date_of_birth,
            photo_url: self.photo_url,
            consent: self.consent,
            created_at,
            updated_at: None,
        }
    }
}
