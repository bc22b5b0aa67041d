//! Category endpoints (`/category/*`).

use crate::{
    Result,
    options::{SeriesListOptions, TagListOptions},
    params::QueryParams,
    session::FredSession,
};
use serde_json::Value;
use std::fmt::Display;

const ENDPOINT: &str = "/category";

/// Handle for the category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    session: &'a FredSession,
}

impl<'a> Categories<'a> {
    pub(crate) const fn new(session: &'a FredSession) -> Self {
        Self { session }
    }

    /// Get a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get(&self, category_id: impl Display) -> Result<Value> {
        self.session.get(ENDPOINT, &id_params(category_id)).await
    }

    /// Get the child categories of a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn children(&self, category_id: impl Display) -> Result<Value> {
        self.session
            .get(&format!("{ENDPOINT}/children"), &id_params(category_id))
            .await
    }

    /// Get the categories related to a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn related(&self, category_id: impl Display) -> Result<Value> {
        self.session
            .get(&format!("{ENDPOINT}/related"), &id_params(category_id))
            .await
    }

    /// Get the series in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn series(
        &self,
        category_id: impl Display,
        options: &SeriesListOptions,
    ) -> Result<Value> {
        let mut params = id_params(category_id);
        options.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/series"), &params)
            .await
    }

    /// Get the tags for the series in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn tags(&self, category_id: impl Display, options: &TagListOptions) -> Result<Value> {
        let mut params = id_params(category_id);
        options.apply(&mut params);
        self.session.get(&format!("{ENDPOINT}/tags"), &params).await
    }

    /// Get the tags related to `options.tag_names` within a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn related_tags(
        &self,
        category_id: impl Display,
        options: &TagListOptions,
    ) -> Result<Value> {
        let mut params = id_params(category_id);
        options.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/related_tags"), &params)
            .await
    }
}

fn id_params(category_id: impl Display) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("category_id", category_id);
    params
}
