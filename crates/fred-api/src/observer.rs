//! Hooks for observing outgoing requests.

use crate::error::ErrorRecord;
use std::fmt;

/// Receives the informational and error events of the transport.
///
/// Implementations must be cheap; they run inline with every request.
pub trait RequestObserver: fmt::Debug + Send + Sync {
    /// Called once per request, before it is sent.
    fn on_request(&self, method: &str, url: &str);

    /// Called once per request the API answers with a non-success status.
    fn on_error(&self, record: &ErrorRecord);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(&self, _method: &str, _url: &str) {}

    fn on_error(&self, _record: &ErrorRecord) {}
}

/// Observer that forwards events to [`tracing`].
///
/// Installing a subscriber is left to the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: &str, url: &str) {
        tracing::info!(method, "URL: {url}");
    }

    fn on_error(&self, record: &ErrorRecord) {
        tracing::error!(status = record.error_code, "{}", record.to_pretty_json());
    }
}
