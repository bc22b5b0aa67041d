//! Release endpoints (`/releases`, `/release/*`).

use crate::{
    Result,
    options::{ListOptions, SeriesListOptions, TagListOptions},
    params::{DateParam, LATEST_DATE, Paging, QueryParams, Realtime},
    session::FredSession,
};
use serde_json::Value;
use std::fmt::Display;

const ENDPOINT: &str = "/release";
const COLLECTION: &str = "/releases";

/// Options for [`Releases::dates`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseDatesOptions {
    /// Real-time period.
    pub realtime: Realtime,
    /// Offset, limit and sort order.
    pub paging: Paging,
    /// Include release dates that had no data.
    pub include_release_dates_with_no_data: bool,
}

/// Options for [`Releases::tables`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseTablesOptions {
    /// Table element to start from. `None` returns the root elements.
    pub element_id: Option<u32>,
    /// Include observation values for series elements.
    pub include_observation_values: bool,
    /// Observation date. `None` means the latest, `9999-12-31`.
    pub observation_date: Option<DateParam>,
}

/// Handle for the release endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Releases<'a> {
    session: &'a FredSession,
}

impl<'a> Releases<'a> {
    pub(crate) const fn new(session: &'a FredSession) -> Self {
        Self { session }
    }

    /// Get all releases.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        options.apply(&mut params, "release_id");
        self.session.get(COLLECTION, &params).await
    }

    /// Get release dates for all releases.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn all_dates(&self, options: &ListOptions) -> Result<Value> {
        let mut params = QueryParams::new();
        options.apply(&mut params, "release_id");
        self.session
            .get(&format!("{COLLECTION}/dates"), &params)
            .await
    }

    /// Get a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get(&self, release_id: impl Display, realtime: &Realtime) -> Result<Value> {
        let mut params = id_params(release_id);
        realtime.apply(&mut params);
        self.session.get(ENDPOINT, &params).await
    }

    /// Get the release dates of a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn dates(
        &self,
        release_id: impl Display,
        options: &ReleaseDatesOptions,
    ) -> Result<Value> {
        let mut params = id_params(release_id);
        options.realtime.apply(&mut params);
        options.paging.apply(&mut params);
        params.flag(
            "include_release_dates_with_no_data",
            options.include_release_dates_with_no_data,
        );
        self.session
            .get(&format!("{ENDPOINT}/dates"), &params)
            .await
    }

    /// Get the series in a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn series(
        &self,
        release_id: impl Display,
        options: &SeriesListOptions,
    ) -> Result<Value> {
        let mut params = id_params(release_id);
        options.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/series"), &params)
            .await
    }

    /// Get the sources of a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn sources(&self, release_id: impl Display, realtime: &Realtime) -> Result<Value> {
        let mut params = id_params(release_id);
        realtime.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/sources"), &params)
            .await
    }

    /// Get the tags for the series in a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn tags(&self, release_id: impl Display, options: &TagListOptions) -> Result<Value> {
        let mut params = id_params(release_id);
        options.apply(&mut params);
        self.session.get(&format!("{ENDPOINT}/tags"), &params).await
    }

    /// Get the tags related to `options.tag_names` within a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn related_tags(
        &self,
        release_id: impl Display,
        options: &TagListOptions,
    ) -> Result<Value> {
        let mut params = id_params(release_id);
        options.apply(&mut params);
        self.session
            .get(&format!("{ENDPOINT}/related_tags"), &params)
            .await
    }

    /// Get the table trees of a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn tables(
        &self,
        release_id: impl Display,
        options: &ReleaseTablesOptions,
    ) -> Result<Value> {
        let mut params = id_params(release_id);
        params
            .opt("element_id", options.element_id)
            .flag(
                "include_observation_values",
                options.include_observation_values,
            )
            .opt_date(
                "observation_date",
                options.observation_date.as_ref(),
                LATEST_DATE,
            );
        self.session
            .get(&format!("{ENDPOINT}/tables"), &params)
            .await
    }
}

fn id_params(release_id: impl Display) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("release_id", release_id);
    params
}
