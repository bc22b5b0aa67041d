//! Tag endpoints (`/tags`, `/related_tags`, `/tags/series`).

use crate::{
    Result,
    options::TagListOptions,
    params::{Paging, QueryParams, Realtime, TAG_DELIMITER},
    session::FredSession,
};
use serde_json::Value;

/// Options for [`Tags::series`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSeriesOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// Ordering attribute. `None` orders by `series_id`.
    pub order_by: Option<String>,
    /// Series must carry all of these tags.
    pub tag_names: Vec<String>,
    /// Series must carry none of these tags.
    pub exclude_tag_names: Vec<String>,
    /// Tag group: `freq`, `gen`, `geo`, `geot`, `rls`, `seas` or `src`.
    pub tag_group_id: Option<String>,
}

impl TagSeriesOptions {
    fn apply(&self, params: &mut QueryParams) {
        params.push("order_by", self.order_by.as_deref().unwrap_or("series_id"));
        self.realtime.apply(params);
        self.paging.apply(params);
        params
            .list("tag_names", &self.tag_names, TAG_DELIMITER)
            .list("exclude_tag_names", &self.exclude_tag_names, TAG_DELIMITER)
            .opt("tag_group_id", self.tag_group_id.as_deref());
    }
}

/// Handle for the tag endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Tags<'a> {
    session: &'a FredSession,
}

impl<'a> Tags<'a> {
    pub(crate) const fn new(session: &'a FredSession) -> Self {
        Self { session }
    }

    /// Get tags, optionally filtered by name, group or search text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn list(&self, options: &TagListOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.session.get("/tags", &params).await
    }

    /// Get the tags related to `options.tag_names`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn related(&self, options: &TagListOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.session.get("/related_tags", &params).await
    }

    /// Get the series carrying all of `options.tag_names`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn series(&self, options: &TagSeriesOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.session.get("/tags/series", &params).await
    }
}
