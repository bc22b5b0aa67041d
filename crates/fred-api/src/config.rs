//! Client configuration loaded from the environment.

use crate::{Result, error::FredError, session::DEFAULT_BASE_URL};
use std::env;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "FRED_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "FRED_BASE_URL";

/// Settings needed to build a [`FredClient`](crate::FredClient).
#[derive(Clone, PartialEq, Eq)]
pub struct FredConfig {
    /// API key issued by FRED.
    pub api_key: String,
    /// Base resource URL.
    pub base_url: String,
}

impl FredConfig {
    /// Configuration for the public API with the given key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from `FRED_API_KEY` and `FRED_BASE_URL`.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set, or the `.env` file cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(FredError::MissingApiKey)?;

        let base_url = match lookup(BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_BASE_URL.to_string(),
        };
        validate_base_url(&base_url)?;

        Ok(Self { api_key, base_url })
    }
}

impl std::fmt::Debug for FredConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FredConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub(crate) fn validate_base_url(url: &str) -> Result<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(FredError::InvalidConfig(format!(
            "base URL must start with http:// or https://, got {url:?}"
        )))
    }
}
