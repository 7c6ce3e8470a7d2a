//! MDD Domain - Core business types
//!
//! This crate defines the domain model for the MDD client: the session
//! record, the backend payloads for articles and themes, the HTTP request
//! and response shapes, and the form validation rules.
//! All types here are pure Rust with no I/O dependencies.

pub mod article;
pub mod auth;
pub mod error;
pub mod request;
pub mod response;
pub mod session;
pub mod theme;
pub mod validation;

pub use article::{Article, Articles, Comment, IdResponse, NewArticle, NewComment};
pub use auth::{Credentials, CredentialsUpdate, LoginRequest, RegisterRequest, TokenResponse};
pub use error::{DomainError, DomainResult};
pub use session::SessionInformation;
pub use theme::{Theme, Themes};
