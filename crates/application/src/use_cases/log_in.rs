//! Log in use case.

use std::sync::Arc;

use mdd_domain::validation::validate_login;
use mdd_domain::{LoginRequest, SessionInformation};
use tracing::warn;

use crate::error::ApplicationResult;
use crate::ports::HttpClient;
use crate::services::AuthService;
use crate::session::SessionStore;

/// Authenticates the user and opens a session.
pub struct LogIn<C> {
    auth: AuthService<C>,
    store: Arc<SessionStore>,
}

impl<C: HttpClient> LogIn<C> {
    /// Creates a new `LogIn` use case.
    #[must_use]
    pub const fn new(auth: AuthService<C>, store: Arc<SessionStore>) -> Self {
        Self { auth, store }
    }

    /// Validates the form, calls the backend and stores the session.
    ///
    /// # Errors
    ///
    /// Returns the validation or service error; the store is then untouched.
    pub async fn execute(&self, request: LoginRequest) -> ApplicationResult<SessionInformation> {
        validate_login(&request)?;

        let session = self.auth.login(&request).await.inspect_err(|error| {
            warn!(%error, "login failed");
        })?;

        self.store.log_in(session.clone());
        Ok(session)
    }
}
