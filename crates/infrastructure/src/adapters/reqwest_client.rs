//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Request paths are resolved against the configured backend base URL.

use std::collections::HashMap;
use std::error::Error as _;
use std::future::Future;
use std::time::{Duration, Instant};

use mdd_application::ports::{HttpClient, HttpClientError};
use mdd_domain::{
    request::{Headers, HttpMethod, RequestBody, RequestSpec},
    response::ResponseSpec,
};
use reqwest::{Client, Method, Url};
use tracing::debug;

use crate::settings::ClientConfig;

const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` together with the backend base URL and the
/// per-request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
    timeout_ms: u64,
}

impl ReqwestHttpClient {
    /// Creates a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self::with_client(
            client,
            config.base_url.clone(),
            config.timeout_ms,
        ))
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, timeout_ms: u64) -> Self {
        Self {
            client,
            base_url,
            timeout_ms,
        }
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        }
    }

    /// Copies the request headers, adding the body's `Content-Type` unless
    /// the caller set one.
    fn apply_headers(
        mut builder: reqwest::RequestBuilder,
        headers: &Headers,
        body: &RequestBody,
    ) -> reqwest::RequestBuilder {
        for header in headers.iter() {
            builder = builder.header(&header.name, &header.value);
        }

        if let Some(content_type) = body.content_type()
            && !headers.contains("content-type")
        {
            builder = builder.header("Content-Type", content_type);
        }

        builder
    }

    /// Attaches the body, checking JSON bodies are well formed.
    fn build_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> Result<reqwest::RequestBuilder, HttpClientError> {
        match body {
            RequestBody::None => Ok(builder),
            RequestBody::Json(content) => {
                serde_json::from_str::<serde_json::Value>(content)
                    .map_err(|e| HttpClientError::InvalidBody(format!("Invalid JSON: {e}")))?;
                Ok(builder.body(content.clone()))
            }
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    ///
    /// The whole source chain is inspected since reqwest's own message
    /// rarely names the root cause.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let message = error_chain(error);
        if error.is_connect() {
            let lowered = message.to_lowercase();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();

            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("more than {MAX_REDIRECTS} redirects"));
        }

        HttpClientError::Other(message)
    }
}

fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        let url = request
            .resolve_url(&self.base_url)
            .map_err(|e| HttpClientError::InvalidUrl(e.to_string()));
        let method = request.method;
        let headers = request.headers.clone();
        let body = request.body.clone();
        let timeout_ms = self.timeout_ms;

        async move {
            let url = url?;
            debug!(%method, %url, "sending request");

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url)
                .timeout(Duration::from_millis(timeout_ms));

            builder = Self::apply_headers(builder, &headers, &body);
            builder = Self::build_body(builder, &body)?;

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let duration = start.elapsed();
            let status = response.status().as_u16();

            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?
                .to_vec();

            debug!(status, elapsed_ms = duration.as_millis(), "response received");

            Ok(ResponseSpec::new(
                status,
                response_headers,
                body_bytes,
                duration,
            ))
        }
    }
}
