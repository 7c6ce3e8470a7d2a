//! Session record for the authenticated user.
//!
//! A [`SessionInformation`] is what the backend returns on a successful
//! login and what the client keeps (in memory and in local storage) for as
//! long as the user stays logged in.

use serde::{Deserialize, Serialize};

/// Default credential scheme label.
pub const BEARER_SCHEME: &str = "Bearer";

/// Identity and credential of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInformation {
    /// Opaque bearer credential issued by the server.
    pub token: String,
    /// Credential scheme label (e.g. "Bearer").
    #[serde(rename = "type", default = "default_scheme")]
    pub scheme: String,
    /// Numeric user identifier.
    pub id: u64,
    /// Display username.
    #[serde(default)]
    pub username: String,
    /// Display first name.
    #[serde(default)]
    pub first_name: String,
    /// Display last name.
    #[serde(default)]
    pub last_name: String,
    /// Privilege flag.
    #[serde(default)]
    pub admin: bool,
}

fn default_scheme() -> String {
    BEARER_SCHEME.to_string()
}

impl SessionInformation {
    /// Creates a session record from the two fields the backend always sends.
    #[must_use]
    pub fn new(token: impl Into<String>, id: u64) -> Self {
        Self {
            token: token.into(),
            scheme: default_scheme(),
            id,
            username: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            admin: false,
        }
    }

    /// Sets the display username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the first and last name.
    #[must_use]
    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the privilege flag.
    #[must_use]
    pub const fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Returns true if the record carries a usable token and user id.
    ///
    /// Anything else is considered malformed when restored from storage.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty() && self.id != 0
    }

    /// Returns the `Authorization` header value for this session.
    ///
    /// The header always uses the `Bearer` scheme regardless of the label
    /// stored in `scheme`.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("{BEARER_SCHEME} {}", self.token)
    }
}
