//! Outgoing request pipeline.
//!
//! Every call to the backend goes through an [`InterceptedHttpClient`],
//! which hands the request to each [`RequestInterceptor`] in turn before
//! passing it on to the wrapped client. [`BearerTokenInterceptor`] is the
//! interceptor that proves the user's identity.

use std::future::Future;
use std::sync::Arc;

use mdd_domain::request::{AUTHORIZATION, RequestSpec};
use mdd_domain::response::ResponseSpec;
use tracing::debug;

use crate::ports::{HttpClient, HttpClientError};
use crate::session::SessionStore;

/// A synchronous, side-effect-free transformation of an outgoing request.
pub trait RequestInterceptor: Send + Sync {
    /// Returns the request to forward.
    fn intercept(&self, request: RequestSpec) -> RequestSpec;
}

/// Adds `Authorization: Bearer <token>` while a user is logged in.
///
/// The store is read on every call, so a login or logout takes effect on
/// the very next request. Applies to every route.
#[derive(Debug, Clone)]
pub struct BearerTokenInterceptor {
    store: Arc<SessionStore>,
}

impl BearerTokenInterceptor {
    /// Creates the interceptor over `store`.
    #[must_use]
    pub const fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerTokenInterceptor {
    fn intercept(&self, request: RequestSpec) -> RequestSpec {
        match self.store.authorization() {
            Some(value) => request.with_header(AUTHORIZATION, value),
            None => request,
        }
    }
}

/// HTTP client that runs interceptors before delegating to `inner`.
pub struct InterceptedHttpClient<C> {
    inner: C,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl<C: HttpClient> InterceptedHttpClient<C> {
    /// Wraps `inner` with an empty interceptor chain.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self {
            inner,
            interceptors: Vec::new(),
        }
    }

    /// Wraps `inner` with the bearer-token interceptor for `store`.
    #[must_use]
    pub fn authorized(inner: C, store: Arc<SessionStore>) -> Self {
        Self::new(inner).with_interceptor(BearerTokenInterceptor::new(store))
    }

    /// Appends an interceptor; interceptors run in insertion order.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Returns the wrapped client.
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Applies every interceptor to a copy of `request`.
    #[must_use]
    pub fn prepare(&self, request: &RequestSpec) -> RequestSpec {
        self.interceptors
            .iter()
            .fold(request.clone(), |request, interceptor| {
                interceptor.intercept(request)
            })
    }
}

impl<C: HttpClient> HttpClient for InterceptedHttpClient<C> {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        let prepared = self.prepare(request);
        debug!(
            request_id = %prepared.id,
            method = %prepared.method,
            path = %prepared.path,
            authorized = prepared.headers.contains(AUTHORIZATION),
            "dispatching request"
        );
        async move { self.inner.execute(&prepared).await }
    }
}

impl<C> std::fmt::Debug for InterceptedHttpClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptedHttpClient")
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}
