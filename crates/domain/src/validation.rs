//! Form validation rules applied before a payload is sent.
//!
//! These mirror the constraints the backend enforces, so that obviously bad
//! input is rejected locally without a round trip. Each validator returns the
//! first violated rule.

use std::sync::LazyLock;

use regex::Regex;

use crate::article::{NewArticle, NewComment};
use crate::auth::{Credentials, LoginRequest, RegisterRequest};
use crate::error::{DomainError, DomainResult};

/// Minimum username length for registration and profile updates.
pub const USERNAME_MIN_LEN: usize = 3;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid regex")
});

fn required(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::Required(field))
    } else {
        Ok(())
    }
}

fn min_len(field: &'static str, value: &str, min: usize) -> DomainResult<()> {
    required(field, value)?;
    if value.chars().count() < min {
        Err(DomainError::TooShort { field, min })
    } else {
        Ok(())
    }
}

/// Returns true if `value` is a syntactically valid email address.
#[must_use]
pub fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    value.len() <= EMAIL_MAX_LEN
        && !local.is_empty()
        && local.len() <= EMAIL_LOCAL_MAX_LEN
        && EMAIL_PATTERN.is_match(value)
}

fn email(field: &'static str, value: &str) -> DomainResult<()> {
    required(field, value)?;
    if is_email(value) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail(field))
    }
}

/// Returns true if `password` has at least 8 characters including a digit,
/// a lowercase letter, an uppercase letter and a non-word character.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// Validates the login form.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_login(request: &LoginRequest) -> DomainResult<()> {
    email("emailOrUsername", &request.email_or_username)?;
    required("password", &request.password)?;
    if is_strong_password(&request.password) {
        Ok(())
    } else {
        Err(DomainError::WeakPassword)
    }
}

/// Validates the registration form.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_registration(request: &RegisterRequest) -> DomainResult<()> {
    min_len("username", &request.username, USERNAME_MIN_LEN)?;
    email("email", &request.email)?;
    min_len("password", &request.password, PASSWORD_MIN_LEN)
}

/// Validates the profile form.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_credentials(credentials: &Credentials) -> DomainResult<()> {
    min_len("username", &credentials.username, USERNAME_MIN_LEN)?;
    email("email", &credentials.email)
}

/// Validates the article creation form.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_article(article: &NewArticle) -> DomainResult<()> {
    required("theme", &article.theme)?;
    required("titre", &article.titre)?;
    required("contenu", &article.contenu)
}

/// Validates the comment form.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_comment(comment: &NewComment) -> DomainResult<()> {
    required("contenu", &comment.contenu)
}
