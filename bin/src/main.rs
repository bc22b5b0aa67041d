//! FRED CLI binary.
//!
//! Provides a command-line interface for the FRED economic data API. Every
//! command prints the API's JSON response to stdout.

mod cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fred_api::{FredClient, TracingObserver};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fred")]
#[command(about = "Query the FRED economic data API", long_about = None)]
#[command(version)]
struct Cli {
    /// FRED API key
    #[arg(long, env = "FRED_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Base URL of the API
    #[arg(long, env = "FRED_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Log request URLs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a category, its children, related categories, series or tags
    Category(cmd::category::CategoryArgs),

    /// Show a release or list all releases
    Release(cmd::release::ReleaseArgs),

    /// Show a series and its metadata
    Series(cmd::series::SeriesArgs),

    /// Fetch the observations of a series
    Observations(cmd::series::ObservationsArgs),

    /// Search for series
    Search(cmd::series::SearchArgs),

    /// Show recently updated series
    Updates(cmd::series::UpdatesArgs),

    /// Show a source or list all sources
    Source(cmd::source::SourceArgs),

    /// List tags, or the series carrying a set of tags
    Tags(cmd::tag::TagsArgs),
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap's env fallbacks see it
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let api_key = cli
        .api_key
        .context("no API key: pass --api-key or set FRED_API_KEY")?;
    let mut builder = FredClient::builder()
        .api_key(api_key)
        .observer(TracingObserver);
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;
    tracing::debug!(base_url = client.session().base_url(), "client ready");

    let value = match cli.command {
        Commands::Category(args) => cmd::category::run(&client, args).await?,
        Commands::Release(args) => cmd::release::run(&client, args).await?,
        Commands::Series(args) => cmd::series::run(&client, args).await?,
        Commands::Observations(args) => cmd::series::observations(&client, args).await?,
        Commands::Search(args) => cmd::series::search(&client, args).await?,
        Commands::Updates(args) => cmd::series::updates(&client, args).await?,
        Commands::Source(args) => cmd::source::run(&client, args).await?,
        Commands::Tags(args) => cmd::tag::run(&client, args).await?,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
