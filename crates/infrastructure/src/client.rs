//! Ready-wired client for the MDD backend.

use std::sync::Arc;

use mdd_application::ports::{HttpClientError, KeyValueStorage, StorageError};
use mdd_application::{
    AddComment, ApiClient, ArticleService, AuthService, CreateArticle, InterceptedHttpClient,
    LogIn, LogOut, Register, SessionStore, SubscribeTheme, ThemeService, UpdateProfile,
};
use tracing::info;

use crate::adapters::ReqwestHttpClient;
use crate::persistence::FileStorage;
use crate::settings::{ClientConfig, ConfigError};

/// HTTP client every service sends through: reqwest behind the bearer-token
/// interceptor.
pub type ApiHttpClient = InterceptedHttpClient<ReqwestHttpClient>;

/// Error type for building an [`MddClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The local storage could not be opened.
    #[error("local storage: {0}")]
    Storage(#[from] StorageError),

    /// The HTTP client could not be created.
    #[error("http client: {0}")]
    Http(#[from] HttpClientError),
}

/// Session store, authorized HTTP pipeline and services, wired once.
///
/// Cloning is cheap and every clone shares the same session.
#[derive(Clone)]
pub struct MddClient {
    store: Arc<SessionStore>,
    api: ApiClient<ApiHttpClient>,
}

impl MddClient {
    /// Loads the configuration and builds a client persisting its session
    /// on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if any piece cannot be set up.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(&ClientConfig::load()?)
    }

    /// Builds a client persisting its session in the configured storage file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage or the HTTP client cannot be set up.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let path = config
            .resolved_storage_path()
            .ok_or(StorageError::Unavailable)?;
        let storage = FileStorage::open(path)?;
        Self::with_storage(config, Arc::new(storage))
    }

    /// Builds a client over an existing storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be set up.
    pub fn with_storage(
        config: &ClientConfig,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, ClientError> {
        let store = Arc::new(SessionStore::new(storage));
        let http = InterceptedHttpClient::authorized(
            ReqwestHttpClient::new(config)?,
            Arc::clone(&store),
        );

        info!(
            base_url = %config.base_url,
            logged_in = store.is_logged(),
            "mdd client ready"
        );

        Ok(Self {
            store,
            api: ApiClient::new(http),
        })
    }

    /// Returns the shared session store.
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Returns the shared API client.
    #[must_use]
    pub const fn api(&self) -> &ApiClient<ApiHttpClient> {
        &self.api
    }

    /// `api/auth` endpoints.
    #[must_use]
    pub fn auth(&self) -> AuthService<ApiHttpClient> {
        AuthService::new(self.api.clone())
    }

    /// `api/articles` endpoints.
    #[must_use]
    pub fn articles(&self) -> ArticleService<ApiHttpClient> {
        ArticleService::new(self.api.clone())
    }

    /// `api/themes` endpoints.
    #[must_use]
    pub fn themes(&self) -> ThemeService<ApiHttpClient> {
        ThemeService::new(self.api.clone())
    }

    /// Log-in workflow.
    #[must_use]
    pub fn log_in(&self) -> LogIn<ApiHttpClient> {
        LogIn::new(self.auth(), Arc::clone(&self.store))
    }

    /// Registration workflow.
    #[must_use]
    pub fn register(&self) -> Register<ApiHttpClient> {
        Register::new(self.auth())
    }

    /// Profile workflow.
    #[must_use]
    pub fn update_profile(&self) -> UpdateProfile<ApiHttpClient> {
        UpdateProfile::new(self.auth(), Arc::clone(&self.store))
    }

    /// Log-out workflow.
    #[must_use]
    pub fn log_out(&self) -> LogOut {
        LogOut::new(Arc::clone(&self.store))
    }

    /// Article creation workflow.
    #[must_use]
    pub fn create_article(&self) -> CreateArticle<ApiHttpClient> {
        CreateArticle::new(self.articles())
    }

    /// Comment workflow.
    #[must_use]
    pub fn add_comment(&self) -> AddComment<ApiHttpClient> {
        AddComment::new(self.articles())
    }

    /// Theme subscription workflow.
    #[must_use]
    pub fn subscribe_theme(&self) -> SubscribeTheme<ApiHttpClient> {
        SubscribeTheme::new(self.themes())
    }
}
