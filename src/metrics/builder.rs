//! Snapshot assembly from node API queries.

use std::time::{Duration, Instant};

use chrono::Utc;
use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::time;
use tracing::warn;

use crate::api::client::NodeClient;
use crate::error::Result;
use crate::metrics::data::SiaSnapshot;

/// The fixed sequence of population steps run on every build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PopulationStep {
    Contracts,
    Files,
    Wallet,
    Renter,
    Timestamp,
}

impl PopulationStep {
    const ALL: [PopulationStep; 5] = [
        PopulationStep::Contracts,
        PopulationStep::Files,
        PopulationStep::Wallet,
        PopulationStep::Renter,
        PopulationStep::Timestamp,
    ];

    fn name(self) -> &'static str {
        match self {
            PopulationStep::Contracts => "contracts",
            PopulationStep::Files => "files",
            PopulationStep::Wallet => "wallet",
            PopulationStep::Renter => "renter",
            PopulationStep::Timestamp => "timestamp",
        }
    }
}

/// Builds a [`SiaSnapshot`] by querying the node API.
///
/// Each population step is isolated: a query that fails or returns a
/// malformed body is logged and leaves its field group empty, and the
/// remaining steps still run. `build` itself never fails.
pub struct SnapshotBuilder<C> {
    client: C,
}

impl<C: NodeClient> SnapshotBuilder<C> {
    /// Create a builder over the given node client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Build a snapshot of the node's current state.
    ///
    /// Runs the five population steps in order, then stamps the total query
    /// latency. Returns a partially-populated snapshot when some queries
    /// fail; a snapshot with only timestamp and latency when all do.
    pub async fn build(&self) -> SiaSnapshot {
        let mut snapshot = SiaSnapshot::new();
        let queries_start = Instant::now();

        for step in PopulationStep::ALL {
            let result = match step {
                PopulationStep::Contracts => self.populate_contracts(&mut snapshot).await,
                PopulationStep::Files => self.populate_files(&mut snapshot).await,
                PopulationStep::Wallet => self.populate_wallet(&mut snapshot).await,
                PopulationStep::Renter => self.populate_renter(&mut snapshot).await,
                PopulationStep::Timestamp => {
                    snapshot.timestamp = Some(Utc::now());
                    Ok(())
                }
            };

            if let Err(err) = result {
                warn!(step = step.name(), error = %err, "population step failed, leaving group empty");
            }
        }

        snapshot.api_latency = Some(queries_start.elapsed().as_secs_f64() * 1000.0);
        snapshot
    }

    /// Turn the builder into a stream yielding one snapshot per interval.
    ///
    /// The first snapshot is produced immediately; ticks never overlap, so
    /// one build always runs to completion before the next starts.
    pub fn into_stream(self, interval: Duration) -> BoxStream<'static, SiaSnapshot>
    where
        C: 'static,
    {
        stream::unfold(
            (self, time::interval(interval)),
            |(builder, mut ticker)| async move {
                ticker.tick().await;
                let snapshot = builder.build().await;
                Some((snapshot, (builder, ticker)))
            },
        )
        .boxed()
    }

    async fn populate_contracts(&self, snapshot: &mut SiaSnapshot) -> Result<()> {
        let response = self.client.renter_contracts().await?;

        let mut total_size = 0u64;
        let mut total_spending = 0u128;
        let mut fee_spending = 0u128;
        let mut storage_spending = 0u128;
        let mut upload_spending = 0u128;
        let mut download_spending = 0u128;
        let mut remaining_funds = 0u128;

        for contract in response
            .active_contracts
            .iter()
            .chain(response.inactive_contracts.iter())
        {
            total_size += contract.size;
            total_spending += contract.total_cost;
            fee_spending += contract.fees;
            storage_spending += contract.storage_spending;
            upload_spending += contract.upload_spending;
            download_spending += contract.download_spending;
            remaining_funds += contract.renter_funds;
        }

        snapshot.contract_count_active = Some(response.active_contracts.len() as u64);
        snapshot.contract_count_inactive = Some(response.inactive_contracts.len() as u64);
        snapshot.contract_total_size = Some(total_size);
        snapshot.contract_total_spending = Some(total_spending);
        snapshot.contract_fee_spending = Some(fee_spending);
        snapshot.contract_storage_spending = Some(storage_spending);
        snapshot.contract_upload_spending = Some(upload_spending);
        snapshot.contract_download_spending = Some(download_spending);
        snapshot.contract_remaining_funds = Some(remaining_funds);
        Ok(())
    }

    async fn populate_files(&self, snapshot: &mut SiaSnapshot) -> Result<()> {
        let response = self.client.renter_files().await?;

        let mut count = 0u64;
        let mut total_bytes = 0u64;
        let mut uploaded_bytes = 0u64;
        let mut in_progress = 0u64;

        for file in &response.files {
            count += 1;
            total_bytes += (file.file_size as f64 * (file.upload_progress / 100.0)) as u64;
            uploaded_bytes += file.uploaded_bytes;
            if file.upload_progress < 100.0 {
                in_progress += 1;
            }
        }

        snapshot.file_count = Some(count);
        snapshot.file_total_bytes = Some(total_bytes);
        snapshot.file_uploaded_bytes = Some(uploaded_bytes);
        snapshot.file_uploads_in_progress_count = Some(in_progress);
        Ok(())
    }

    async fn populate_wallet(&self, snapshot: &mut SiaSnapshot) -> Result<()> {
        let response = self.client.wallet().await?;

        snapshot.wallet_siacoin_balance = Some(response.confirmed_siacoin_balance);
        snapshot.wallet_outgoing_siacoins = Some(response.unconfirmed_outgoing_siacoins);
        snapshot.wallet_incoming_siacoins = Some(response.unconfirmed_incoming_siacoins);
        Ok(())
    }

    async fn populate_renter(&self, snapshot: &mut SiaSnapshot) -> Result<()> {
        let response = self.client.renter().await?;
        let metrics = &response.financial_metrics;

        snapshot.renter_allowance = Some(response.settings.allowance.funds);
        snapshot.renter_contract_fees = Some(metrics.contract_fees);
        snapshot.renter_total_allocated = Some(metrics.total_allocated);
        snapshot.renter_contract_spending = Some(metrics.contract_spending);
        snapshot.renter_download_spending = Some(metrics.download_spending);
        snapshot.renter_storage_spending = Some(metrics.storage_spending);
        snapshot.renter_upload_spending = Some(metrics.upload_spending);
        snapshot.renter_unspent = Some(metrics.unspent);
        Ok(())
    }
}
