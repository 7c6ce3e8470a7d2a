//! MDD Application - Session state, request pipeline and use cases
//!
//! This crate defines the application layer with:
//! - Port traits (local storage, HTTP client)
//! - The session store and its login-state stream
//! - The request interceptor that authorizes outgoing calls
//! - Typed services for the backend REST API
//! - Use case orchestration for the login, profile and content workflows

pub mod error;
pub mod interceptor;
pub mod ports;
pub mod services;
pub mod session;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use interceptor::{BearerTokenInterceptor, InterceptedHttpClient, RequestInterceptor};
pub use ports::{HttpClient, HttpClientError, KeyValueStorage, StorageError};
pub use services::{ApiClient, ArticleService, AuthService, ThemeService};
pub use session::{LoginStateStream, SESSION_KEY, SessionStore, Subscription};
pub use use_cases::{
    AddComment, CreateArticle, LogIn, LogOut, Register, SubscribeTheme, UpdateProfile,
};
