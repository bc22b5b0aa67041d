//! Option sets shared by several resources.
//!
//! All option structs implement [`Default`] with the FRED defaults, so callers
//! override only what they need:
//!
//! ```
//! use fred_api::{Paging, SeriesListOptions};
//!
//! let options = SeriesListOptions {
//!     paging: Paging::default().limit(10),
//!     tag_names: vec!["usa".to_string(), "monthly".to_string()],
//!     ..Default::default()
//! };
//! assert_eq!(options.paging.limit, 10);
//! ```

use crate::params::{Paging, QueryParams, Realtime, TAG_DELIMITER};

/// Real-time period, paging and ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// Ordering attribute. `None` uses the endpoint default.
    pub order_by: Option<String>,
}

impl ListOptions {
    pub(crate) fn apply(&self, params: &mut QueryParams, default_order_by: &str) {
        params.push(
            "order_by",
            self.order_by.as_deref().unwrap_or(default_order_by),
        );
        self.realtime.apply(params);
        self.paging.apply(params);
    }
}

/// Options for endpoints returning a list of series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesListOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// Ordering attribute. `None` orders by `series_id`.
    pub order_by: Option<String>,
    /// Attribute to filter on: `frequency`, `units` or `seasonal_adjustment`.
    pub filter_variable: Option<String>,
    /// Value the filter attribute must match.
    pub filter_value: Option<String>,
    /// Series must carry all of these tags.
    pub tag_names: Vec<String>,
    /// Series must carry none of these tags.
    pub exclude_tag_names: Vec<String>,
}

impl SeriesListOptions {
    pub(crate) fn apply(&self, params: &mut QueryParams) {
        params.push("order_by", self.order_by.as_deref().unwrap_or("series_id"));
        self.realtime.apply(params);
        self.paging.apply(params);
        params
            .opt("filter_variable", self.filter_variable.as_deref())
            .opt("filter_value", self.filter_value.as_deref())
            .list("tag_names", &self.tag_names, TAG_DELIMITER)
            .list("exclude_tag_names", &self.exclude_tag_names, TAG_DELIMITER);
    }
}

/// Options for endpoints returning a list of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// Ordering attribute. `None` orders by `series_count`.
    pub order_by: Option<String>,
    /// Tags to match, or for related-tag endpoints, the tags to relate to.
    pub tag_names: Vec<String>,
    /// Tags to leave out of related-tag results.
    pub exclude_tag_names: Vec<String>,
    /// Tag group: `freq`, `gen`, `geo`, `geot`, `rls`, `seas` or `src`.
    pub tag_group_id: Option<String>,
    /// Words to match in tag names and notes.
    pub search_text: Option<String>,
}

impl TagListOptions {
    pub(crate) fn apply(&self, params: &mut QueryParams) {
        params.push(
            "order_by",
            self.order_by.as_deref().unwrap_or("series_count"),
        );
        self.realtime.apply(params);
        self.paging.apply(params);
        params
            .list("tag_names", &self.tag_names, TAG_DELIMITER)
            .list("exclude_tag_names", &self.exclude_tag_names, TAG_DELIMITER)
            .opt("tag_group_id", self.tag_group_id.as_deref())
            .opt("search_text", self.search_text.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortOrder;

    #[test]
    fn test_list_options_order_by_default() {
        let mut params = QueryParams::new();
        ListOptions::default().apply(&mut params, "release_id");
        assert_eq!(params.get("order_by"), Some("release_id"));

        let mut params = QueryParams::new();
        ListOptions {
            order_by: Some("name".to_string()),
            ..Default::default()
        }
        .apply(&mut params, "release_id");
        assert_eq!(params.get("order_by"), Some("name"));
    }

    #[test]
    fn test_series_list_omits_unset_filters() {
        let mut params = QueryParams::new();
        SeriesListOptions::default().apply(&mut params);

        assert_eq!(params.get("order_by"), Some("series_id"));
        assert!(!params.contains("filter_variable"));
        assert!(!params.contains("filter_value"));
        assert!(!params.contains("tag_names"));
        assert!(!params.contains("exclude_tag_names"));
        assert!(params.pairs().iter().all(|(_, v)| v != "None" && v != "null"));
    }

    #[test]
    fn test_tag_list_joins_with_semicolons() {
        let mut params = QueryParams::new();
        TagListOptions {
            paging: Paging::default().sort_order(SortOrder::Desc),
            tag_names: vec!["monetary aggregates".to_string(), "weekly".to_string()],
            exclude_tag_names: vec!["discontinued".to_string(), "annual".to_string()],
            ..Default::default()
        }
        .apply(&mut params);

        assert_eq!(params.get("tag_names"), Some("monetary aggregates;weekly"));
        assert_eq!(params.get("exclude_tag_names"), Some("discontinued;annual"));
        assert_eq!(params.get("sort_order"), Some("desc"));
        assert_eq!(params.get("order_by"), Some("series_count"));
    }
}
