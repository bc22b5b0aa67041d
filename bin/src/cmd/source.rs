//! Source command implementation.

use super::paging;
use anyhow::Result;
use clap::Args;
use fred_api::{FredClient, ListOptions, Realtime};
use serde_json::Value;

#[derive(Debug, Args)]
pub(crate) struct SourceArgs {
    /// Source id. Lists all sources when omitted
    id: Option<u32>,

    /// Show the releases of the source
    #[arg(short, long)]
    releases: bool,

    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<u32>,
}

/// Run the source command.
pub(crate) async fn run(client: &FredClient, args: SourceArgs) -> Result<Value> {
    let sources = client.sources();
    let options = ListOptions {
        paging: paging(args.limit),
        ..Default::default()
    };

    let value = match (args.id, args.releases) {
        (None, _) => sources.list(&options).await?,
        (Some(id), false) => sources.get(id, &Realtime::default()).await?,
        (Some(id), true) => sources.releases(id, &options).await?,
    };
    Ok(value)
}
