//! Shared harness for the FRED client integration tests.

#![allow(dead_code)]

use fred_api::{ErrorRecord, FredClient, RequestObserver};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_KEY: &str = "test_key";

/// A request as the mock server received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub raw_query: Option<String>,
}

impl Captured {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// Mock FRED server plus a client pointed at it.
pub struct Harness {
    pub server: MockServer,
    pub client: FredClient,
}

impl Harness {
    /// Server that answers every GET with `{"ok": true}`.
    pub async fn start() -> Self {
        Self::with_key(TEST_KEY).await
    }

    /// Same as [`Harness::start`] with a specific API key.
    pub async fn with_key(api_key: &str) -> Self {
        let harness = Self::bare(api_key).await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&harness.server)
            .await;
        harness
    }

    /// Server with no mocks mounted.
    pub async fn bare(api_key: &str) -> Self {
        let server = MockServer::start().await;
        let client = FredClient::builder()
            .api_key(api_key)
            .base_url(format!("{}/fred", server.uri()))
            .build()
            .expect("client builds");
        Self { server, client }
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<Captured> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .iter()
            .map(|req| Captured {
                method: req.method.as_str().to_string(),
                path: req.url.path().to_string(),
                query: req
                    .url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
                raw_query: req.url.query().map(str::to_string),
            })
            .collect()
    }

    /// The only request received so far.
    pub async fn single_request(&self) -> Captured {
        let mut requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

/// Today's date as FRED expects it.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Observer that records every event it sees.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub requests: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<ErrorRecord>>>,
}

impl RequestObserver for RecordingObserver {
    fn on_request(&self, method: &str, url: &str) {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{method} {url}"));
    }

    fn on_error(&self, record: &ErrorRecord) {
        self.errors.lock().unwrap().push(record.clone());
    }
}
