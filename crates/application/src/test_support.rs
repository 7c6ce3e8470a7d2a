//! Test doubles for the application ports.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use mdd_domain::request::RequestSpec;
use mdd_domain::response::ResponseSpec;
use parking_lot::Mutex;

use crate::ports::{HttpClient, HttpClientError, KeyValueStorage, StorageError};

/// In-memory storage that counts reads.
#[derive(Default)]
pub struct MapStorage {
    items: Mutex<HashMap<String, String>>,
    reads: AtomicUsize,
}

impl MapStorage {
    pub fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.items.lock().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl KeyValueStorage for MapStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

/// Storage whose every operation fails.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get_item(&self, _: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io(io::Error::other("disk unplugged")))
    }

    fn set_item(&self, _: &str, _: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(io::Error::other("disk unplugged")))
    }

    fn remove_item(&self, _: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// HTTP client returning scripted responses and recording every request.
#[derive(Default)]
pub struct FakeHttpClient {
    responses: Mutex<VecDeque<Result<ResponseSpec, HttpClientError>>>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses
            .lock()
            .push_back(Ok(ResponseSpec::json(status, &body)));
        self
    }

    pub fn respond_empty(self, status: u16) -> Self {
        self.responses.lock().push_back(Ok(ResponseSpec::new(
            status,
            HashMap::new(),
            Vec::new(),
            std::time::Duration::ZERO,
        )));
        self
    }

    pub fn fail(self, error: HttpClientError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> RequestSpec {
        self.requests.lock().last().cloned().expect("a request was sent")
    }
}

impl HttpClient for FakeHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        self.requests.lock().push(request.clone());
        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::Other("no scripted response".into())));
        async move { response }
    }
}
