//! Profile update use case.

use std::sync::Arc;

use mdd_domain::Credentials;
use mdd_domain::validation::validate_credentials;

use crate::error::ApplicationResult;
use crate::ports::HttpClient;
use crate::services::AuthService;
use crate::session::SessionStore;

/// Changes the username/email and swaps in the token the backend reissues.
pub struct UpdateProfile<C> {
    auth: AuthService<C>,
    store: Arc<SessionStore>,
}

impl<C: HttpClient> UpdateProfile<C> {
    /// Creates a new `UpdateProfile` use case.
    #[must_use]
    pub const fn new(auth: AuthService<C>, store: Arc<SessionStore>) -> Self {
        Self { auth, store }
    }

    /// Loads the current profile for editing.
    ///
    /// # Errors
    ///
    /// Returns the service error.
    pub async fn load(&self) -> ApplicationResult<Credentials> {
        self.auth.credentials().await
    }

    /// Validates and saves the profile, then replaces the session.
    ///
    /// The new session is built from the response alone; it does not keep
    /// fields of the previous one.
    ///
    /// # Errors
    ///
    /// Returns the validation or service error; the store is then untouched.
    pub async fn execute(&self, credentials: Credentials) -> ApplicationResult<Credentials> {
        validate_credentials(&credentials)?;

        let update = self.auth.update_credentials(&credentials).await?;
        self.store.log_in(update.to_session());
        Ok(update.credentials())
    }
}
