//! # Siamon - Sia Node Metrics Collector
//!
//! A small crate for monitoring a Sia storage-network node. It polls the
//! node's local management API at a fixed interval, folds the contract, file,
//! wallet, and renter-spending figures into one snapshot record, appends each
//! snapshot to an append-only CSV log, and can echo a condensed fixed-width
//! line to the terminal for interactive watching.
//!
//! ## Features
//!
//! - **Partial-failure tolerant snapshots**: each API query populates its own
//!   field group; a failed query leaves that group empty without aborting the
//!   cycle
//! - **Durable CSV log**: one row per poll, header written exactly once,
//!   every row synced to disk before the next poll
//! - **Console dashboard**: fixed-column output with human-readable byte and
//!   siacoin units
//! - **Library + Binary**: embed the collector or run the standalone `siamon`
//!   tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use siamon::{CsvSerializer, SiaClient, SnapshotBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SiaClient::new("localhost", siamon::DEFAULT_API_PORT)?;
//!     let builder = SnapshotBuilder::new(client);
//!     let mut log = CsvSerializer::open("sia-metrics.csv")?;
//!
//!     let snapshot = builder.build().await;
//!     log.write_state(&snapshot)?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod metrics;
pub mod output;

// Re-export public API
pub use api::{
    client::{NodeClient, SiaClient},
    types::{Contract, FileInfo, RenterContracts, RenterFiles, RenterInfo, WalletInfo},
};
pub use error::{MonitorError, Result};
pub use metrics::{builder::SnapshotBuilder, data::SiaSnapshot};
pub use output::{console, csv::CsvSerializer, format};

/// The default poll interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// The default port of the Sia node management API
pub const DEFAULT_API_PORT: u16 = 9980;

/// The default per-request timeout for node API queries, in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
