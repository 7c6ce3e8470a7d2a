//! Registration use case.

use mdd_domain::RegisterRequest;
use mdd_domain::validation::validate_registration;

use crate::error::ApplicationResult;
use crate::ports::HttpClient;
use crate::services::AuthService;

/// Creates an account. The user still has to log in afterwards.
pub struct Register<C> {
    auth: AuthService<C>,
}

impl<C: HttpClient> Register<C> {
    /// Creates a new `Register` use case.
    #[must_use]
    pub const fn new(auth: AuthService<C>) -> Self {
        Self { auth }
    }

    /// Validates the form and creates the account.
    ///
    /// # Errors
    ///
    /// Returns the validation or service error.
    pub async fn execute(&self, request: RegisterRequest) -> ApplicationResult<()> {
        validate_registration(&request)?;
        self.auth.register(&request).await.map(|_| ())
    }
}
