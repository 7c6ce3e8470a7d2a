//! Typed services for the backend REST API.
//!
//! Services are thin: they build a [`RequestSpec`](mdd_domain::request::RequestSpec),
//! send it through the shared client and decode the answer. They never touch
//! the session store; the use cases decide what to do with the results.

mod api;
mod article_service;
mod auth_service;
mod theme_service;

pub use api::ApiClient;
pub use article_service::ArticleService;
pub use auth_service::AuthService;
pub use theme_service::ThemeService;
