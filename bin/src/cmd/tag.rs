//! Tags command implementation.

use super::paging;
use anyhow::{Result, bail};
use clap::Args;
use fred_api::{FredClient, TagListOptions, TagSeriesOptions};
use serde_json::Value;

#[derive(Debug, Args)]
pub(crate) struct TagsArgs {
    /// Words to match in tag names and notes
    #[arg(short, long)]
    search: Option<String>,

    /// Tag names, comma separated
    #[arg(short, long, value_delimiter = ',')]
    names: Vec<String>,

    /// Tag group (freq, gen, geo, geot, rls, seas, src)
    #[arg(short, long)]
    group: Option<String>,

    /// Show the series carrying all of --names instead of tags
    #[arg(long)]
    series: bool,

    /// Show tags related to --names
    #[arg(long, conflicts_with = "series")]
    related: bool,

    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<u32>,
}

/// Run the tags command.
pub(crate) async fn run(client: &FredClient, args: TagsArgs) -> Result<Value> {
    let tags = client.tags();

    if (args.series || args.related) && args.names.is_empty() {
        bail!("--series and --related need at least one tag in --names");
    }

    if args.series {
        let options = TagSeriesOptions {
            paging: paging(args.limit),
            tag_names: args.names,
            tag_group_id: args.group,
            ..Default::default()
        };
        return Ok(tags.series(&options).await?);
    }

    let options = TagListOptions {
        paging: paging(args.limit),
        tag_names: args.names,
        tag_group_id: args.group,
        search_text: args.search,
        ..Default::default()
    };
    let value = if args.related {
        tags.related(&options).await?
    } else {
        tags.list(&options).await?
    };
    Ok(value)
}
