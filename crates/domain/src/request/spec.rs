//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::{Headers, HttpMethod, RequestBody};
use crate::error::{DomainError, DomainResult};

/// Complete specification for a call to the backend API.
///
/// `path` is relative to the configured base URL (e.g. `api/articles/4`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Unique identifier, used to correlate log lines.
    pub id: Uuid,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the API base URL
    pub path: String,
    /// HTTP headers
    #[serde(default)]
    pub headers: Headers,
    /// Request body
    #[serde(default)]
    pub body: RequestBody,
}

impl RequestSpec {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            method,
            path: path.into(),
            headers: Headers::new(),
            body: RequestBody::None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Adds or replaces a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Attaches `value` as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be serialized.
    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.body = RequestBody::json(value)?;
        Ok(self)
    }

    /// Resolves the request path against `base`.
    ///
    /// A leading `/` on the path is ignored so that the base URL's own path
    /// prefix is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is malformed.
    pub fn resolve_url(&self, base: &Url) -> DomainResult<Url> {
        let path = self.path.trim_start_matches('/');
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {path}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_against_root() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let request = RequestSpec::get("api/articles");
        assert_eq!(
            request.resolve_url(&base).unwrap().as_str(),
            "http://localhost:8080/api/articles"
        );
    }

    #[test]
    fn test_resolve_keeps_base_prefix() {
        let base = Url::parse("https://mdd.example.com/backend").unwrap();
        let request = RequestSpec::get("/api/themes");
        assert_eq!(
            request.resolve_url(&base).unwrap().as_str(),
            "https://mdd.example.com/backend/api/themes"
        );
    }

    #[test]
    fn test_with_json_sets_body() {
        let request = RequestSpec::post("api/articles/1")
            .with_json(&serde_json::json!({"contenu": "hi"}))
            .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.content(), r#"{"contenu":"hi"}"#);
    }

    #[test]
    fn test_each_request_gets_its_own_id() {
        assert_ne!(RequestSpec::get("a").id, RequestSpec::get("a").id);
    }
}
