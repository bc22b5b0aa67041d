//! Error types for the FRED API client.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when using the FRED API.
#[derive(Debug, Error)]
pub enum FredError {
    /// Missing or empty API key.
    #[error("FRED_API_KEY environment variable not set or empty")]
    MissingApiKey,

    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    #[error("FRED API error: {0}")]
    Http(Box<ErrorRecord>),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}

impl FredError {
    /// The error record if the API rejected the request.
    #[must_use]
    pub fn record(&self) -> Option<&ErrorRecord> {
        match self {
            Self::Http(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    /// HTTP status code of a rejected request.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.record().map(|r| r.error_code)
    }
}

/// Details of a request the API answered with a non-success status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    /// HTTP status code.
    pub error_code: u16,
    /// Final URL of the request, query string included, with `api_key` masked.
    pub response_url: String,
    /// Decoded error body. Bodies that are not JSON are kept as a JSON string.
    pub response_body: serde_json::Value,
    /// Headers of the outgoing request.
    pub response_request: BTreeMap<String, String>,
    /// HTTP method of the outgoing request.
    pub response_method: String,
}

impl ErrorRecord {
    /// The record rendered as indented JSON.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{self:?}"))
    }

    /// The `error_message` field FRED puts in its error bodies, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.response_body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} on {} {}",
            self.error_code, self.response_method, self.response_url
        )?;
        if let Some(message) = self.error_message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl From<ErrorRecord> for FredError {
    fn from(record: ErrorRecord) -> Self {
        Self::Http(Box::new(record))
    }
}
