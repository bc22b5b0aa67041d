//! Transport shared by every FRED resource.
//!
//! [`FredSession`] is the single place requests are built and responses are
//! classified. A request ends in exactly one of three outcomes:
//!
//! 1. 2xx with a body: the body parsed as JSON.
//! 2. 2xx without a body: `{"message": "response successful", "status_code": <code>}`.
//! 3. anything else: [`FredError::Http`] carrying an [`ErrorRecord`].

use crate::{
    Result,
    error::{ErrorRecord, FredError},
    observer::{NoopObserver, RequestObserver},
    params::QueryParams,
};
use reqwest::{
    Client, Method, StatusCode, Url,
    header::{ACCEPT, HeaderMap},
};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Base URL of the FRED API.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred";

const USER_AGENT: &str = concat!("fred-api/", env!("CARGO_PKG_VERSION"));

/// Request builder and response classifier for the FRED API.
#[derive(Clone)]
pub struct FredSession {
    client: Client,
    resource: String,
    api_key: String,
    observer: Arc<dyn RequestObserver>,
}

impl FredSession {
    /// Create a session against the public FRED API with no observer.
    ///
    /// # Errors
    ///
    /// Returns [`FredError::MissingApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_BASE_URL, Arc::new(NoopObserver))
    }

    /// Create a session with an explicit base URL and observer.
    ///
    /// # Errors
    ///
    /// Returns [`FredError::MissingApiKey`] if the key is empty, or
    /// [`FredError::Request`] if the HTTP client cannot be built.
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        observer: Arc<dyn RequestObserver>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FredError::MissingApiKey);
        }

        // No idle pool: each request's connection closes once it completes.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0)
            .build()?;

        let resource = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            resource,
            api_key,
            observer,
        })
    }

    /// The base resource URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.resource
    }

    /// Build the full URL for an endpoint path such as `/series`.
    #[must_use]
    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.resource)
    }

    /// Send a GET request with the given query parameters.
    ///
    /// # Errors
    ///
    /// See [`FredSession::make_request`].
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        self.make_request(Method::GET, endpoint, Some(params), None, None)
            .await
    }

    /// Send a request and classify the response.
    ///
    /// `api_key` and `file_type=json` are added to the query string of every
    /// request, replacing any pair of the same name in `params`.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `endpoint` - Path below the base URL, e.g. `/series/observations`
    /// * `params` - Query parameters
    /// * `data` - Form-encoded body
    /// * `json_payload` - JSON body
    ///
    /// # Errors
    ///
    /// Returns [`FredError::Http`] for non-success statuses,
    /// [`FredError::Json`] if a success body is not JSON, and
    /// [`FredError::Request`] for transport failures.
    pub async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&QueryParams>,
        data: Option<&[(String, String)]>,
        json_payload: Option<&Value>,
    ) -> Result<Value> {
        let url = self.build_url(endpoint);
        self.observer.on_request(method.as_str(), &url);

        let query = self.with_credentials(params);
        let mut builder = self
            .client
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .query(query.pairs());
        if let Some(data) = data {
            builder = builder.form(data);
        }
        if let Some(payload) = json_payload {
            builder = builder.json(payload);
        }

        let request = builder.build()?;
        let request_method = request.method().to_string();
        let request_headers = header_map(request.headers());

        let response = self.client.execute(request).await?;
        let status = response.status();
        let response_url = redact_credentials(response.url());
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "FRED response");

        if status.is_success() {
            return success_payload(status, &body);
        }

        let record = ErrorRecord {
            error_code: status.as_u16(),
            response_url,
            response_body: error_body(&body),
            response_request: request_headers,
            response_method: request_method,
        };
        self.observer.on_error(&record);
        Err(record.into())
    }

    fn with_credentials(&self, params: Option<&QueryParams>) -> QueryParams {
        let mut query = params.cloned().unwrap_or_default();
        query.set("api_key", &self.api_key).set("file_type", "json");
        query
    }
}

impl fmt::Debug for FredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FredSession")
            .field("resource", &self.resource)
            .field("api_key", &"<redacted>")
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

fn success_payload(status: StatusCode, body: &[u8]) -> Result<Value> {
    if body.is_empty() {
        return Ok(json!({
            "message": "response successful",
            "status_code": status.as_u16(),
        }));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Error bodies that are not JSON are kept as raw text.
fn error_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

const REDACTED: &str = "<redacted>";

/// Render `url` with the `api_key` value masked. Other pairs keep their order.
fn redact_credentials(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == "api_key") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "api_key" { REDACTED.into() } else { value };
            (name.into_owned(), value.into_owned())
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
