//! Federal Reserve Economic Data (FRED) API client.
//!
//! This crate provides a client for the St. Louis Fed
//! [FRED API](https://fred.stlouisfed.org/docs/api/fred/). Every endpoint
//! returns the response JSON unchanged as a [`serde_json::Value`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use fred_api::{FredClient, ObservationOptions, SeriesListOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FredClient::from_env()?;
//!
//!     // Fetch a category
//!     let category = client.categories().get(125).await?;
//!
//!     // Fetch the series in it
//!     let series = client
//!         .categories()
//!         .series(125, &SeriesListOptions::default())
//!         .await?;
//!
//!     // Fetch observations for real GNP
//!     let gnp = client
//!         .series()
//!         .observations("GNPCA", &ObservationOptions::default())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FRED_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FRED_API_KEY=your_api_key_here
//! ```
//!
//! `FRED_BASE_URL` optionally points the client at another host.

mod categories;
mod client;
mod config;
mod error;
mod observer;
mod options;
mod params;
mod releases;
mod series;
mod session;
mod sources;
mod tags;
mod types;

pub use categories::Categories;
pub use client::{FredClient, FredClientBuilder};
pub use config::{API_KEY_VAR, BASE_URL_VAR, FredConfig};
pub use error::{ErrorRecord, FredError};
pub use observer::{NoopObserver, RequestObserver, TracingObserver};
pub use options::{ListOptions, SeriesListOptions, TagListOptions};
pub use params::{
    DATE_DELIMITER, DateParam, EARLIEST_DATE, LATEST_DATE, Paging, QueryParams, Realtime,
    TAG_DELIMITER,
};
pub use releases::{ReleaseDatesOptions, ReleaseTablesOptions, Releases};
pub use series::{
    ObservationOptions, SearchTagsOptions, Series, SeriesSearchOptions, SeriesTagsOptions,
    UpdatesOptions, VintageDatesOptions,
};
pub use session::{DEFAULT_BASE_URL, FredSession};
pub use sources::Sources;
pub use tags::{TagSeriesOptions, Tags};
pub use types::*;

/// Re-exported so callers can make raw requests through [`FredSession::make_request`].
pub use reqwest::Method;

/// Result type for FRED operations.
pub type Result<T> = std::result::Result<T, FredError>;
