//! Data structures for node metrics snapshots.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A complete snapshot of node metrics at a point in time.
///
/// Every field is optional: the builder populates fields in independent
/// groups, one per API query, and a failed query leaves its whole group
/// empty. A group is never partially filled.
///
/// The timestamp is assigned after all queries finish, so it marks the end
/// of the polling window; [`SiaSnapshot::collection_start`] recovers the
/// instant polling began.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiaSnapshot {
    /// Time at which assembly finished (UTC)
    pub timestamp: Option<DateTime<Utc>>,
    /// Wall-clock duration of all API queries, in milliseconds
    pub api_latency: Option<f64>,

    /// Number of files known to the renter, partially or fully uploaded
    pub file_count: Option<u64>,
    /// Total logical size of all files, weighted by upload progress, in bytes
    pub file_total_bytes: Option<u64>,
    /// Number of uploads currently in progress
    pub file_uploads_in_progress_count: Option<u64>,
    /// Total bytes uploaded to hosts across all files
    pub file_uploaded_bytes: Option<u64>,

    /// Number of active contracts
    pub contract_count_active: Option<u64>,
    /// Number of inactive contracts
    pub contract_count_inactive: Option<u64>,
    /// Total size of all contracts, in bytes
    pub contract_total_size: Option<u64>,
    /// Total hastings committed to contracts
    pub contract_total_spending: Option<u128>,
    /// Hastings spent on contract fees
    pub contract_fee_spending: Option<u128>,
    /// Hastings spent on storage
    pub contract_storage_spending: Option<u128>,
    /// Hastings spent on upload bandwidth
    pub contract_upload_spending: Option<u128>,
    /// Hastings spent on download bandwidth
    pub contract_download_spending: Option<u128>,
    /// Hastings remaining unspent across all contracts
    pub contract_remaining_funds: Option<u128>,

    /// Confirmed wallet balance, in hastings
    pub wallet_siacoin_balance: Option<i128>,
    /// Unconfirmed outgoing siacoins, in hastings (sign convention opaque)
    pub wallet_outgoing_siacoins: Option<i128>,
    /// Unconfirmed incoming siacoins, in hastings (sign convention opaque)
    pub wallet_incoming_siacoins: Option<i128>,

    /// Total renter allowance, in hastings
    pub renter_allowance: Option<u128>,
    /// Hastings spent on contract fees this period
    pub renter_contract_fees: Option<u128>,
    /// Hastings the renter has put into contracts
    pub renter_total_allocated: Option<u128>,
    /// Hastings spent on contracts
    pub renter_contract_spending: Option<u128>,
    /// Hastings spent on downloads
    pub renter_download_spending: Option<u128>,
    /// Hastings spent on storage
    pub renter_storage_spending: Option<u128>,
    /// Hastings spent on uploads
    pub renter_upload_spending: Option<u128>,
    /// Hastings the renter has not spent yet
    pub renter_unspent: Option<u128>,
}

impl SiaSnapshot {
    /// Create an empty snapshot with no fields populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// The instant polling began: the stored timestamp minus the measured
    /// API latency.
    ///
    /// Returns `None` unless both `timestamp` and `api_latency` are set.
    pub fn collection_start(&self) -> Option<DateTime<Utc>> {
        match (self.timestamp, self.api_latency) {
            (Some(timestamp), Some(latency_ms)) => {
                Some(timestamp - Duration::milliseconds(latency_ms.round() as i64))
            }
            _ => None,
        }
    }
}
