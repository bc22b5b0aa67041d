//! Source endpoints (`/sources`, `/source/*`).

use crate::{
    Result,
    options::ListOptions,
    params::{QueryParams, Realtime},
    session::FredSession,
};
use serde_json::Value;
use std::fmt::Display;

const ENDPOINT: &str = "/source";
const COLLECTION: &str = "/sources";

/// Handle for the source endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    session: &'a FredSession,
}

impl<'a> Sources<'a> {
    pub(crate) const fn new(session: &'a FredSession) -> Self {
        Self { session }
    }

    /// Get all sources of economic data.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        options.apply(&mut params, "source_id");
        self.session.get(COLLECTION, &params).await
    }

    /// Get a source.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get(&self, source_id: impl Display, realtime: &Realtime) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push("source_id", source_id);
        realtime.apply(&mut params);
        self.session.get(ENDPOINT, &params).await
    }

    /// Get the releases of a source.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn releases(&self, source_id: impl Display, options: &ListOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push("source_id", source_id);
        options.apply(&mut params, "release_id");
        self.session
            .get(&format!("{ENDPOINT}/releases"), &params)
            .await
    }
}
