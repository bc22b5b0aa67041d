//! FRED API client implementation.

use crate::{
    Result,
    categories::Categories,
    config::{FredConfig, validate_base_url},
    observer::{NoopObserver, RequestObserver},
    releases::Releases,
    series::Series,
    session::{DEFAULT_BASE_URL, FredSession},
    sources::Sources,
    tags::Tags,
};
use std::sync::Arc;

/// Federal Reserve Economic Data (FRED) API client.
///
/// Owns the API key and the one [`FredSession`] every resource handle borrows.
#[derive(Debug, Clone)]
pub struct FredClient {
    session: FredSession,
}

impl FredClient {
    /// Create a new FRED client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client builder for custom configuration.
    #[must_use]
    pub fn builder() -> FredClientBuilder {
        FredClientBuilder::default()
    }

    /// Create a new FRED client from the `FRED_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_config(FredConfig::from_env()?)
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: FredConfig) -> Result<Self> {
        Self::builder()
            .api_key(config.api_key)
            .base_url(config.base_url)
            .build()
    }

    /// The shared transport, for raw requests.
    #[must_use]
    pub const fn session(&self) -> &FredSession {
        &self.session
    }

    /// Category endpoints.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_> {
        Categories::new(&self.session)
    }

    /// Release endpoints.
    #[must_use]
    pub const fn releases(&self) -> Releases<'_> {
        Releases::new(&self.session)
    }

    /// Series endpoints.
    #[must_use]
    pub const fn series(&self) -> Series<'_> {
        Series::new(&self.session)
    }

    /// Source endpoints.
    #[must_use]
    pub const fn sources(&self) -> Sources<'_> {
        Sources::new(&self.session)
    }

    /// Tag endpoints.
    #[must_use]
    pub const fn tags(&self) -> Tags<'_> {
        Tags::new(&self.session)
    }
}

/// Builder for [`FredClient`].
#[derive(Debug, Default)]
pub struct FredClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    observer: Option<Arc<dyn RequestObserver>>,
}

impl FredClientBuilder {
    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the base resource URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Observe outgoing requests. Defaults to [`NoopObserver`].
    #[must_use]
    pub fn observer(mut self, observer: impl RequestObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or empty, or the base URL is
    /// not an HTTP(S) URL.
    pub fn build(self) -> Result<FredClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        let observer = self.observer.unwrap_or_else(|| Arc::new(NoopObserver));
        let session =
            FredSession::with_options(self.api_key.unwrap_or_default(), base_url, observer)?;

        Ok(FredClient { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::FredError, observer::TracingObserver};

    #[test]
    fn test_client_creation() {
        let client = FredClient::new("test_key").unwrap();
        assert_eq!(client.session().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_key() {
        assert!(matches!(
            FredClient::builder().build(),
            Err(FredError::MissingApiKey)
        ));
        assert!(matches!(FredClient::new(""), Err(FredError::MissingApiKey)));
    }

    #[test]
    fn test_builder_overrides() {
        let client = FredClient::builder()
            .api_key("test_key")
            .base_url("http://localhost:1234/fred")
            .observer(TracingObserver)
            .build()
            .unwrap();
        assert_eq!(client.session().base_url(), "http://localhost:1234/fred");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = FredClient::builder()
            .api_key("test_key")
            .base_url("ftp://example.com")
            .build();
        assert!(matches!(result, Err(FredError::InvalidConfig(_))));
    }

    #[test]
    fn test_accessors_share_session() {
        let client = FredClient::new("test_key").unwrap();
        let a = client.categories();
        let b = client.categories();
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FredClient>();
    }
}
