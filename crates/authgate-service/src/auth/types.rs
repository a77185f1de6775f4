//! Inputs and outcomes of the authentication flows.

use chrono::NaiveDate;

use authgate_entity::user::{CreateUser, User};

/// Fields supplied by a caller registering a new account.
#[derive(Clone)]
pub struct NewRegistration {
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    /// Plaintext; hashed before it reaches the store.
    pub password: String,
    pub profession: String,
    pub date_of_birth: NaiveDate,
    pub photo_url: Option<String>,
    pub consent: bool,
}

impl std::fmt::Debug for NewRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewRegistration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl NewRegistration {
    pub(crate) fn into_create_user(self, password_hash: String) -> CreateUser {
        CreateUser {
            username: self.username,
            email: self.email,
            name: self.name,
            surname: self.surname,
            password_hash,
            profession: self.profession,
            date_of_birth: self.date_of_birth,
            photo_url: self.photo_url,
            consent: self.consent,
        }
    }
}

/// A freshly issued token and the user it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// How a logout request was resolved. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The token was revoked by this call.
    LoggedOut,
    /// The token had already been revoked.
    AlreadyLoggedOut,
}

impl LogoutOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::LoggedOut => "Successfully logged out",
            Self::AlreadyLoggedOut => "You are already logged out",
        }
    }
}
