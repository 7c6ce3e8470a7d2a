//! Authentication and profile payloads exchanged with `api/auth`.

use serde::{Deserialize, Serialize};

use crate::session::SessionInformation;

/// Body of `POST api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address (the backend also accepts a username here).
    pub email_or_username: String,
    /// Plain-text password.
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email_or_username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_or_username: email_or_username.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST api/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Response of `POST api/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Token issued for the new account.
    pub token: String,
}

/// Editable profile fields (`api/auth/credentials`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
}

impl Credentials {
    /// Creates a credentials payload.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Response of `PUT api/auth/credentials`.
///
/// Changing the email invalidates the old token, so the backend hands back
/// a fresh one together with the updated profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsUpdate {
    /// Updated username.
    pub username: String,
    /// Updated email address.
    pub email: String,
    /// Newly issued token.
    pub token: String,
    /// User identifier.
    pub id: u64,
}

impl CredentialsUpdate {
    /// Returns the updated profile fields.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.email.clone())
    }

    /// Builds the session record that replaces the current one.
    #[must_use]
    pub fn to_session(&self) -> SessionInformation {
        SessionInformation::new(self.token.clone(), self.id).with_username(self.username.clone())
    }
}
