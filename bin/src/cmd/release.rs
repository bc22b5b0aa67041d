//! Release command implementation.

use super::paging;
use anyhow::Result;
use clap::{Args, ValueEnum};
use fred_api::{
    FredClient, ListOptions, Realtime, ReleaseDatesOptions, ReleaseTablesOptions,
    SeriesListOptions, TagListOptions,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReleaseView {
    /// The release itself
    Info,
    /// Release dates
    Dates,
    /// Series in the release
    Series,
    /// Sources of the release
    Sources,
    /// Tags of the series in the release
    Tags,
    /// Release table tree
    Tables,
}

#[derive(Debug, Args)]
pub(crate) struct ReleaseArgs {
    /// Release id. Lists all releases when omitted
    id: Option<u32>,

    /// What to show for a single release
    #[arg(long, value_enum, default_value = "info")]
    view: ReleaseView,

    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<u32>,
}

/// Run the release command.
pub(crate) async fn run(client: &FredClient, args: ReleaseArgs) -> Result<Value> {
    let releases = client.releases();
    let Some(id) = args.id else {
        let options = ListOptions {
            paging: paging(args.limit),
            ..Default::default()
        };
        return Ok(releases.list(&options).await?);
    };

    let value = match args.view {
        ReleaseView::Info => releases.get(id, &Realtime::default()).await?,
        ReleaseView::Dates => {
            let options = ReleaseDatesOptions {
                paging: paging(args.limit),
                ..Default::default()
            };
            releases.dates(id, &options).await?
        }
        ReleaseView::Series => {
            let options = SeriesListOptions {
                paging: paging(args.limit),
                ..Default::default()
            };
            releases.series(id, &options).await?
        }
        ReleaseView::Sources => releases.sources(id, &Realtime::default()).await?,
        ReleaseView::Tags => {
            let options = TagListOptions {
                paging: paging(args.limit),
                ..Default::default()
            };
            releases.tags(id, &options).await?
        }
        ReleaseView::Tables => {
            releases
                .tables(id, &ReleaseTablesOptions::default())
                .await?
        }
    };
    Ok(value)
}
