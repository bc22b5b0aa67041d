//! Category command implementation.

use super::paging;
use anyhow::Result;
use clap::{Args, ValueEnum};
use fred_api::{FredClient, SeriesListOptions, TagListOptions};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryView {
    /// The category itself
    Info,
    /// Child categories
    Children,
    /// Related categories
    Related,
    /// Series in the category
    Series,
    /// Tags of the series in the category
    Tags,
}

#[derive(Debug, Args)]
pub(crate) struct CategoryArgs {
    /// Category id (0 is the root category)
    #[arg(default_value = "0")]
    id: u32,

    /// What to show
    #[arg(long, value_enum, default_value = "info")]
    view: CategoryView,

    /// Maximum number of results for series and tags
    #[arg(short, long)]
    limit: Option<u32>,
}

/// Run the category command.
pub(crate) async fn run(client: &FredClient, args: CategoryArgs) -> Result<Value> {
    let categories = client.categories();
    let value = match args.view {
        CategoryView::Info => categories.get(args.id).await?,
        CategoryView::Children => categories.children(args.id).await?,
        CategoryView::Related => categories.related(args.id).await?,
        CategoryView::Series => {
            let options = SeriesListOptions {
                paging: paging(args.limit),
                ..Default::default()
            };
            categories.series(args.id, &options).await?
        }
        CategoryView::Tags => {
            let options = TagListOptions {
                paging: paging(args.limit),
                ..Default::default()
            };
            categories.tags(args.id, &options).await?
        }
    };
    Ok(value)
}
