//! Series, observations, search and updates commands.

use super::{paging, parse_date};
use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};
use fred_api::{
    FredClient, Frequency, ObservationOptions, Realtime, SeriesSearchOptions, SeriesTagsOptions,
    Units, UpdatesOptions, VintageDatesOptions,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SeriesView {
    /// The series itself
    Info,
    /// Categories of the series
    Categories,
    /// Release of the series
    Release,
    /// Tags of the series
    Tags,
    /// Vintage dates of the series
    VintageDates,
}

#[derive(Debug, Args)]
pub(crate) struct SeriesArgs {
    /// Series id, e.g. GNPCA
    id: String,

    /// What to show
    #[arg(long, value_enum, default_value = "info")]
    view: SeriesView,
}

#[derive(Debug, Args)]
pub(crate) struct ObservationsArgs {
    /// Series id, e.g. GNPCA
    id: String,

    /// First observation date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Last observation date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Units transformation code (lin, chg, ch1, pch, pc1, pca, cch, cca, log)
    #[arg(short, long, default_value = "lin")]
    units: String,

    /// Frequency code to aggregate to (d, w, m, q, sa, a, ...)
    #[arg(short, long)]
    frequency: Option<String>,

    /// Maximum number of observations
    #[arg(short, long)]
    limit: Option<u32>,
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Words to search for
    text: String,

    /// Only series carrying all of these tags
    #[arg(short, long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Maximum number of results
    #[arg(short, long, default_value = "20")]
    limit: u32,
}

#[derive(Debug, Args)]
pub(crate) struct UpdatesArgs {
    /// Maximum number of results
    #[arg(short, long, default_value = "20")]
    limit: u32,
}

/// Run the series command.
pub(crate) async fn run(client: &FredClient, args: SeriesArgs) -> Result<Value> {
    let series = client.series();
    let realtime = Realtime::default();
    let value = match args.view {
        SeriesView::Info => series.get(&args.id, &realtime).await?,
        SeriesView::Categories => series.categories(&args.id, &realtime).await?,
        SeriesView::Release => series.release(&args.id, &realtime).await?,
        SeriesView::Tags => {
            series
                .tags(&args.id, &SeriesTagsOptions::default())
                .await?
        }
        SeriesView::VintageDates => {
            series
                .vintage_dates(&args.id, &VintageDatesOptions::default())
                .await?
        }
    };
    Ok(value)
}

/// Fetch observations for a series.
pub(crate) async fn observations(client: &FredClient, args: ObservationsArgs) -> Result<Value> {
    let units =
        Units::from_code(&args.units).ok_or_else(|| anyhow!("Unknown units code: {}", args.units))?;
    let frequency = args
        .frequency
        .as_deref()
        .map(|code| Frequency::from_code(code).ok_or_else(|| anyhow!("Unknown frequency: {code}")))
        .transpose()?;

    let options = ObservationOptions {
        paging: paging(args.limit),
        observation_start: args.start.as_deref().map(parse_date).transpose()?.map(Into::into),
        observation_end: args.end.as_deref().map(parse_date).transpose()?.map(Into::into),
        units,
        frequency,
        ..Default::default()
    };

    Ok(client.series().observations(&args.id, &options).await?)
}

/// Search for series.
pub(crate) async fn search(client: &FredClient, args: SearchArgs) -> Result<Value> {
    let options = SeriesSearchOptions {
        paging: paging(Some(args.limit)),
        tag_names: args.tags,
        ..Default::default()
    };
    Ok(client.series().search(&args.text, &options).await?)
}

/// Show recently updated series.
pub(crate) async fn updates(client: &FredClient, args: UpdatesArgs) -> Result<Value> {
    let options = UpdatesOptions {
        limit: args.limit,
        ..Default::default()
    };
    Ok(client.series().updates(&options).await?)
}
