//! `api/auth` endpoints.

use mdd_domain::request::RequestSpec;
use mdd_domain::{
    Credentials, CredentialsUpdate, LoginRequest, RegisterRequest, SessionInformation,
    TokenResponse,
};

use super::api::{ApiClient, with_json};
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

const PATH: &str = "api/auth";

/// Login, registration and profile endpoints.
pub struct AuthService<C> {
    api: ApiClient<C>,
}

impl<C: HttpClient> AuthService<C> {
    /// Creates the service.
    #[must_use]
    pub const fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// Exchanges credentials for a session.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, rejected credentials or a malformed answer.
    pub async fn login(&self, request: &LoginRequest) -> ApplicationResult<SessionInformation> {
        let spec = with_json(RequestSpec::post(format!("{PATH}/login")), request)?;
        self.api.fetch(spec).await
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the backend rejects the account.
    pub async fn register(&self, request: &RegisterRequest) -> ApplicationResult<TokenResponse> {
        let spec = with_json(RequestSpec::post(format!("{PATH}/register")), request)?;
        self.api.fetch(spec).await
    }

    /// Reads the current user's editable profile.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when not authorized.
    pub async fn credentials(&self) -> ApplicationResult<Credentials> {
        self.api
            .fetch(RequestSpec::get(format!("{PATH}/credentials")))
            .await
    }

    /// Updates the current user's profile.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the update is refused.
    pub async fn update_credentials(
        &self,
        credentials: &Credentials,
    ) -> ApplicationResult<CredentialsUpdate> {
        let spec = with_json(RequestSpec::put(format!("{PATH}/credentials")), credentials)?;
        self.api.fetch(spec).await
    }

    /// Tells the backend the session is over.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success status.
    pub async fn logout(&self) -> ApplicationResult<()> {
        self.api
            .send(RequestSpec::post(format!("{PATH}/logout")))
            .await
            .map(|_| ())
    }
}
