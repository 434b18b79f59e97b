use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use transit_direction::prelude::*;

mod output;

use output::{write_json, write_text};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// First trip (by trip id) that continues past the stop decides
    First,
    /// Most common direction across all trips serving the stop
    Modal,
}

impl From<Policy> for DirectionPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::First => DirectionPolicy::FirstResolvable,
            Policy::Modal => DirectionPolicy::Modal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "stop-direction",
    author,
    version,
    about = "Print the travel direction of GTFS stops",
    long_about = "Loads a GTFS feed and labels stops with the compass direction \
                  (N, NE, E, SE, S, SW, W, NW or unknown) towards the next \
                  scheduled stop."
)]
struct Args {
    /// GTFS feed directory or zip archive
    #[arg(short, long)]
    feed: PathBuf,

    /// Stop ids to resolve
    stop_ids: Vec<String>,

    /// Resolve every stop in the feed
    #[arg(long, conflicts_with = "stop_ids")]
    all: bool,

    /// How to combine trips that leave a stop in different directions
    #[arg(long, value_enum, default_value_t = Policy::First)]
    policy: Policy,

    /// Print a JSON array instead of tab-separated lines
    #[arg(long)]
    json: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" })),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    if !args.feed.exists() {
        bail!("Feed does not exist: {}", args.feed.display());
    }
    if !args.all && args.stop_ids.is_empty() {
        bail!("No stops requested; pass stop ids or --all");
    }

    let provider = StaticTransitProvider::load_gtfs(&args.feed)
        .with_context(|| format!("Failed to load GTFS feed {}", args.feed.display()))?;

    let stop_ids: Vec<StopIdentifier> = if args.all {
        provider.all_stops().into_iter().map(|s| s.id.clone()).collect()
    } else {
        args.stop_ids.iter().map(StopIdentifier::new).collect()
    };

    tracing::info!(
        "Resolving {} stops with policy {:?}",
        stop_ids.len(),
        args.policy
    );

    let resolver = StopDirectionResolver::new(Arc::new(provider)).with_policy(args.policy.into());
    let resolved = resolver.resolve_directions(stop_ids).await;

    let stdout = std::io::stdout().lock();
    if args.json {
        write_json(stdout, &resolved).context("Failed to write JSON output")?;
    } else {
        write_text(stdout, &resolved).context("Failed to write output")?;
    }

    Ok(())
}
