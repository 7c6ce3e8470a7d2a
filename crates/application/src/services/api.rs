//! Shared send-and-decode helper.

use std::sync::Arc;

use mdd_domain::request::RequestSpec;
use mdd_domain::response::ResponseSpec;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::HttpClient;

/// Cloneable handle on the HTTP client shared by every service.
pub struct ApiClient<C> {
    http: Arc<C>,
}

impl<C> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient> ApiClient<C> {
    /// Wraps `http`.
    #[must_use]
    pub fn new(http: C) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Sends `request` and requires a 2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Http`] on transport failure and
    /// [`ApplicationError::Status`] on a non-success status.
    pub async fn send(&self, request: RequestSpec) -> ApplicationResult<ResponseSpec> {
        let response = self.http.execute(&request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApplicationError::Status {
                status: response.status,
                body: response.body_text(),
            })
        }
    }

    /// Sends `request` and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`], plus [`ApplicationError::Decode`] when the
    /// body does not match `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: RequestSpec) -> ApplicationResult<T> {
        let response = self.send(request).await?;
        response
            .json_body()
            .map_err(|e| ApplicationError::Decode(e.to_string()))
    }
}

/// Attaches `payload` as the JSON body of `request`.
pub(crate) fn with_json<T: Serialize>(
    request: RequestSpec,
    payload: &T,
) -> ApplicationResult<RequestSpec> {
    request
        .with_json(payload)
        .map_err(|e| ApplicationError::Encode(e.to_string()))
}
