//! Series endpoints (`/series/*`).

use crate::{
    Result,
    params::{DateParam, EARLIEST_DATE, LATEST_DATE, Paging, QueryParams, Realtime, TAG_DELIMITER},
    session::FredSession,
    types::{AggregationMethod, Frequency, OutputType, SearchType, SortOrder, Units, UpdateFilter},
};
use chrono::NaiveDateTime;
use serde_json::Value;

const ENDPOINT: &str = "/series";

/// Options for [`Series::observations`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// First observation date. `None` means `1776-07-04`.
    pub observation_start: Option<DateParam>,
    /// Last observation date. `None` means `9999-12-31`.
    pub observation_end: Option<DateParam>,
    /// Value transformation.
    pub units: Units,
    /// Frequency to aggregate to. `None` keeps the series' own frequency.
    pub frequency: Option<Frequency>,
    /// Aggregation used with `frequency`.
    pub aggregation_method: AggregationMethod,
    /// Response shape.
    pub output_type: OutputType,
    /// Vintage dates to download data for, instead of a real-time period.
    pub vintage_dates: Vec<DateParam>,
}

/// Options for [`Series::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesSearchOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// Ordering attribute. `None` orders by `series_id`.
    pub order_by: Option<String>,
    /// What the search text matches against.
    pub search_type: SearchType,
    /// Attribute to filter on: `frequency`, `units` or `seasonal_adjustment`.
    pub filter_variable: Option<String>,
    /// Value the filter attribute must match.
    pub filter_value: Option<String>,
    /// Series must carry all of these tags.
    pub tag_names: Vec<String>,
    /// Series must carry none of these tags.
    pub exclude_tag_names: Vec<String>,
}

/// Options for [`Series::search_tags`] and [`Series::search_related_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTagsOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// Ordering attribute. `None` orders by `series_count`.
    pub order_by: Option<String>,
    /// Tag group to restrict results to.
    pub tag_group_id: Option<String>,
    /// Words to match in tag names.
    pub tag_search_text: Option<String>,
    /// Tags to match, or for related tags, the tags to relate to.
    pub tag_names: Vec<String>,
    /// Tags to leave out of related-tag results.
    pub exclude_tag_names: Vec<String>,
}

/// Options for [`Series::tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesTagsOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Ordering attribute. `None` orders by `series_count`.
    pub order_by: Option<String>,
}

/// Options for [`Series::updates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatesOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Number of results to skip.
    pub offset: u32,
    /// Maximum number of results.
    pub limit: u32,
    /// Geography filter.
    pub filter_value: UpdateFilter,
    /// Start of the update window. Requires `end_time`.
    pub start_time: Option<NaiveDateTime>,
    /// End of the update window. Requires `start_time`.
    pub end_time: Option<NaiveDateTime>,
}

impl Default for UpdatesOptions {
    fn default() -> Self {
        let paging = Paging::default();
        Self {
            realtime: Realtime::default(),
            offset: paging.offset,
            limit: paging.limit,
            filter_value: UpdateFilter::All,
            start_time: None,
            end_time: None,
        }
    }
}

/// Options for [`Series::vintage_dates`].
///
/// Unlike other endpoints, an unset real-time period spans all of history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VintageDatesOptions {
    /// Real-time period. Unset bounds default to `1776-07-04` and `9999-12-31`.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
}

/// Handle for the series endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    session: &'a FredSession,
}

impl<'a> Series<'a> {
    pub(crate) const fn new(session: &'a FredSession) -> Self {
        Self { session }
    }

    /// Get a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get(&self, series_id: &str, realtime: &Realtime) -> Result<Value> {
        let mut params = id_params(series_id);
        realtime.apply(&mut params);
        self.session.get(ENDPOINT, &params).await
    }

    /// Get the categories of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn categories(&self, series_id: &str, realtime: &Realtime) -> Result<Value> {
        let mut params = id_params(series_id);
        realtime.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/categories"), &params)
            .await
    }

    /// Get the observations (data values) of a series.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use fred_api::{FredClient, ObservationOptions, Units};
    /// # async fn example() -> fred_api::Result<()> {
    /// let client = FredClient::from_env()?;
    /// let options = ObservationOptions {
    ///     observation_start: Some("2000-01-01".into()),
    ///     units: Units::PercentChangeFromYearAgo,
    ///     ..Default::default()
    /// };
    /// let gnp = client.series().observations("GNPCA", &options).await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn observations(&self, series_id: &str, options: &ObservationOptions) -> Result<Value> {
        let mut params = id_params(series_id);
        options.realtime.apply(&mut params);
        params
            .opt_date(
                "observation_start",
                options.observation_start.as_ref(),
                EARLIEST_DATE,
            )
            .opt_date(
                "observation_end",
                options.observation_end.as_ref(),
                LATEST_DATE,
            );
        options.paging.apply(&mut params);
        params
            .push("units", options.units.as_str())
            .opt("frequency", options.frequency.map(|f| f.as_str()))
            .push("aggregation_method", options.aggregation_method.as_str())
            .push("output_type", options.output_type.as_u8())
            .dates("vintage_dates", &options.vintage_dates);
        self.session
            .get(&format!("{ENDPOINT}/observations"), &params)
            .await
    }

    /// Get the release of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn release(&self, series_id: &str, realtime: &Realtime) -> Result<Value> {
        let mut params = id_params(series_id);
        realtime.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/release"), &params)
            .await
    }

    /// Search for series matching some words, or series ids with
    /// [`SearchType::SeriesId`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn search(&self, search_text: &str, options: &SeriesSearchOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        params
            .push("search_text", search_text)
            .push("search_type", options.search_type.as_str());
        options.realtime.apply(&mut params);
        options.paging.apply(&mut params);
        params
            .push("order_by", options.order_by.as_deref().unwrap_or("series_id"))
            .opt("filter_variable", options.filter_variable.as_deref())
            .opt("filter_value", options.filter_value.as_deref())
            .list("tag_names", &options.tag_names, TAG_DELIMITER)
            .list("exclude_tag_names", &options.exclude_tag_names, TAG_DELIMITER);
        self.session
            .get(&format!("{ENDPOINT}/search"), &params)
            .await
    }

    /// Get the tags of the series matching a search.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn search_tags(
        &self,
        series_search_text: &str,
        options: &SearchTagsOptions,
    ) -> Result<Value> {
        let params = search_tag_params(series_search_text, options);
        self.session
            .get(&format!("{ENDPOINT}/search/tags"), &params)
            .await
    }

    /// Get the tags related to `options.tag_names` among the series matching a
    /// search.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn search_related_tags(
        &self,
        series_search_text: &str,
        options: &SearchTagsOptions,
    ) -> Result<Value> {
        let params = search_tag_params(series_search_text, options);
        self.session
            .get(&format!("{ENDPOINT}/search/related_tags"), &params)
            .await
    }

    /// Get the tags of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn tags(&self, series_id: &str, options: &SeriesTagsOptions) -> Result<Value> {
        let mut params = id_params(series_id);
        options.realtime.apply(&mut params);
        params
            .push("sort_order", options.sort_order.as_str())
            .push(
                "order_by",
                options.order_by.as_deref().unwrap_or("series_count"),
            );
        self.session.get(&format!("{ENDPOINT}/tags"), &params).await
    }

    /// Get series sorted by when they were last updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn updates(&self, options: &UpdatesOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        options.realtime.apply(&mut params);
        params
            .push("offset", options.offset)
            .push("limit", options.limit)
            .push("filter_value", options.filter_value.as_str());
        if let Some(start) = options.start_time {
            params.time("start_time", start);
        }
        if let Some(end) = options.end_time {
            params.time("end_time", end);
        }
        self.session
            .get(&format!("{ENDPOINT}/updates"), &params)
            .await
    }

    /// Get the dates on which a series' data was revised or released.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn vintage_dates(
        &self,
        series_id: &str,
        options: &VintageDatesOptions,
    ) -> Result<Value> {
        let mut params = id_params(series_id);
        options
            .realtime
            .apply_or(&mut params, EARLIEST_DATE, LATEST_DATE);
        options.paging.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/vintagedates"), &params)
            .await
    }
}

fn id_params(series_id: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("series_id", series_id);
    params
}

fn search_tag_params(series_search_text: &str, options: &SearchTagsOptions) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("series_search_text", series_search_text);
    options.realtime.apply(&mut params);
    options.paging.apply(&mut params);
    params
        .push(
            "order_by",
            options.order_by.as_deref().unwrap_or("series_count"),
        )
        .opt("tag_group_id", options.tag_group_id.as_deref())
        .opt("tag_search_text", options.tag_search_text.as_deref())
        .list("tag_names", &options.tag_names, TAG_DELIMITER)
        .list("exclude_tag_names", &options.exclude_tag_names, TAG_DELIMITER);
    params
}
