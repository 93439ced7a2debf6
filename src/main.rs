//! Siamon - Sia Node Metrics Collector Binary
//!
//! A standalone binary that polls a Sia node's management API on an interval,
//! appends every snapshot to a CSV log, and keeps a live dashboard line on
//! the terminal.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use futures_util::StreamExt;
use siamon::{
    console, CsvSerializer, SiaClient, SnapshotBuilder, DEFAULT_API_PORT,
    DEFAULT_POLL_INTERVAL_SECS,
};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "siamon")]
#[command(about = "Sia node metrics collector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "Polls a Sia node's API, logs metrics to CSV, and shows a console dashboard")]
struct Cli {
    /// Hostname of the Sia node API
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port of the Sia node API
    #[arg(short, long, default_value_t = DEFAULT_API_PORT)]
    port: u16,

    /// Seconds between polls
    #[arg(short, long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    interval: u64,

    /// CSV file the metrics log is appended to
    #[arg(short, long, default_value = "sia-metrics.csv")]
    output: PathBuf,

    /// Suppress the console dashboard
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    info!("Starting siamon metrics collector...");
    info!("  - Node API: {}:{}", cli.host, cli.port);
    info!("  - Poll interval: {}s", cli.interval);
    info!("  - Metrics log: {}", cli.output.display());

    let client = SiaClient::new(&cli.host, cli.port)?;
    let mut serializer = CsvSerializer::open(&cli.output)
        .with_context(|| format!("failed to open metrics log {}", cli.output.display()))?;

    if !cli.quiet {
        console::print_header();
    }

    let builder = SnapshotBuilder::new(client);
    let mut snapshots = builder.into_stream(Duration::from_secs(cli.interval));

    while let Some(snapshot) = snapshots.next().await {
        // A failed disk write is fatal: silently dropping rows would defeat
        // the append-only log.
        serializer
            .write_state(&snapshot)
            .context("failed to append snapshot to metrics log")?;

        if !cli.quiet {
            console::print_state(&snapshot);
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["siamon", "--port", "9990"]).unwrap();
        assert_eq!(cli.port, 9990);
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::try_parse_from(["siamon"]).unwrap();
        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.port, DEFAULT_API_PORT);
        assert_eq!(cli.interval, DEFAULT_POLL_INTERVAL_SECS);
        assert_eq!(cli.output, PathBuf::from("sia-metrics.csv"));
        assert!(!cli.quiet);
    }
}
