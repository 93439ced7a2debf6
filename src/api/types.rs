//! Response models for the node management API.
//!
//! Field names follow the wire format of the Sia renter/wallet endpoints,
//! including its inconsistent casing (`StorageSpending` arrives capitalized).
//! All hastings amounts accept either JSON integers or decimal strings.

use serde::Deserialize;

use crate::api::serde_helpers::{currency, currency_signed};

/// Response of `GET /renter/contracts`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenterContracts {
    /// Contracts the renter is currently using for storage
    #[serde(rename = "activecontracts")]
    pub active_contracts: Vec<Contract>,
    /// Expired or replaced contracts that may still hold data
    #[serde(rename = "inactivecontracts")]
    pub inactive_contracts: Vec<Contract>,
}

/// One storage contract between the renter and a host.
#[derive(Debug, Clone, Deserialize)]
pub struct Contract {
    /// Amount of data stored under this contract, in bytes
    pub size: u64,
    /// Total amount of money committed to this contract, in hastings
    #[serde(rename = "totalcost", with = "currency")]
    pub total_cost: u128,
    /// Transaction and contract fees paid, in hastings
    #[serde(with = "currency")]
    pub fees: u128,
    /// Hastings spent on storage
    #[serde(rename = "StorageSpending", with = "currency")]
    pub storage_spending: u128,
    /// Hastings spent on upload bandwidth
    #[serde(rename = "uploadspending", with = "currency")]
    pub upload_spending: u128,
    /// Hastings spent on download bandwidth
    #[serde(rename = "downloadspending", with = "currency")]
    pub download_spending: u128,
    /// Hastings remaining unspent in this contract
    #[serde(rename = "renterfunds", with = "currency")]
    pub renter_funds: u128,
}

/// Response of `GET /renter/files`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenterFiles {
    /// Files known to the renter. The node reports `null` when it has none;
    /// that is a valid zero-result state, unlike a missing key.
    #[serde(deserialize_with = "nullable_files")]
    pub files: Vec<FileInfo>,
}

/// One file tracked by the renter.
#[derive(Debug, Clone, Deserialize)]
pub struct FileInfo {
    /// Logical size of the file, in bytes
    #[serde(rename = "filesize")]
    pub file_size: u64,
    /// Upload progress as a percentage, 0-100
    #[serde(rename = "uploadprogress")]
    pub upload_progress: f64,
    /// Bytes uploaded to hosts so far, including redundancy
    #[serde(rename = "uploadedbytes")]
    pub uploaded_bytes: u64,
}

/// Response of `GET /wallet`.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletInfo {
    /// Confirmed siacoin balance, in hastings
    #[serde(rename = "confirmedsiacoinbalance", with = "currency_signed")]
    pub confirmed_siacoin_balance: i128,
    /// Unconfirmed outgoing siacoins, in hastings
    #[serde(rename = "unconfirmedoutgoingsiacoins", with = "currency_signed")]
    pub unconfirmed_outgoing_siacoins: i128,
    /// Unconfirmed incoming siacoins, in hastings
    #[serde(rename = "unconfirmedincomingsiacoins", with = "currency_signed")]
    pub unconfirmed_incoming_siacoins: i128,
}

/// Response of `GET /renter`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenterInfo {
    /// Renter configuration, of which only the allowance is collected
    pub settings: RenterSettings,
    /// Aggregate spending figures for the current allowance period
    #[serde(rename = "financialmetrics")]
    pub financial_metrics: FinancialMetrics,
}

/// Renter settings subtree.
#[derive(Debug, Clone, Deserialize)]
pub struct RenterSettings {
    pub allowance: Allowance,
}

/// The renter's allowance.
#[derive(Debug, Clone, Deserialize)]
pub struct Allowance {
    /// Total hastings the renter may spend on contracts
    #[serde(with = "currency")]
    pub funds: u128,
}

/// Aggregate renter spending, all in hastings.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialMetrics {
    #[serde(rename = "contractfees", with = "currency")]
    pub contract_fees: u128,
    #[serde(rename = "totalallocated", with = "currency")]
    pub total_allocated: u128,
    #[serde(rename = "contractspending", with = "currency")]
    pub contract_spending: u128,
    #[serde(rename = "downloadspending", with = "currency")]
    pub download_spending: u128,
    #[serde(rename = "storagespending", with = "currency")]
    pub storage_spending: u128,
    #[serde(rename = "uploadspending", with = "currency")]
    pub upload_spending: u128,
    #[serde(with = "currency")]
    pub unspent: u128,
}

fn nullable_files<'de, D>(deserializer: D) -> Result<Vec<FileInfo>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<FileInfo>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contracts_deserialize_with_wire_casing() {
        let body = serde_json::json!({
            "activecontracts": [{
                "size": 1_000_000u64,
                "totalcost": "2500000000000000000000000",
                "fees": 120,
                "StorageSpending": 80,
                "uploadspending": 40,
                "downloadspending": 10,
                "renterfunds": 999
            }],
            "inactivecontracts": []
        });

        let contracts: RenterContracts = serde_json::from_value(body).unwrap();
        assert_eq!(contracts.active_contracts.len(), 1);
        assert!(contracts.inactive_contracts.is_empty());

        let contract = &contracts.active_contracts[0];
        assert_eq!(contract.size, 1_000_000);
        assert_eq!(contract.total_cost, 2_500_000_000_000_000_000_000_000);
        assert_eq!(contract.storage_spending, 80);
        assert_eq!(contract.renter_funds, 999);
    }

    #[test]
    fn contracts_require_both_lists() {
        let body = serde_json::json!({ "activecontracts": [] });
        assert!(serde_json::from_value::<RenterContracts>(body).is_err());
    }

    #[test]
    fn null_files_are_an_empty_list() {
        let files: RenterFiles = serde_json::from_value(serde_json::json!({ "files": null })).unwrap();
        assert!(files.files.is_empty());

        // A missing key is malformed, not empty.
        assert!(serde_json::from_value::<RenterFiles>(serde_json::json!({})).is_err());
    }

    #[test]
    fn wallet_balances_keep_raw_integers() {
        let body = serde_json::json!({
            "confirmedsiacoinbalance": "100000000000000000000000000",
            "unconfirmedoutgoingsiacoins": 25,
            "unconfirmedincomingsiacoins": "83"
        });

        let wallet: WalletInfo = serde_json::from_value(body).unwrap();
        assert_eq!(wallet.confirmed_siacoin_balance, 100_000_000_000_000_000_000_000_000);
        assert_eq!(wallet.unconfirmed_outgoing_siacoins, 25);
        assert_eq!(wallet.unconfirmed_incoming_siacoins, 83);
    }

    #[test]
    fn renter_info_reads_nested_allowance_and_metrics() {
        let body = serde_json::json!({
            "settings": { "allowance": { "funds": "500" } },
            "financialmetrics": {
                "contractfees": 233,
                "totalallocated": 443,
                "contractspending": 123,
                "downloadspending": 0,
                "storagespending": 200,
                "uploadspending": 66,
                "unspent": 111
            }
        });

        let renter: RenterInfo = serde_json::from_value(body).unwrap();
        assert_eq!(renter.settings.allowance.funds, 500);
        assert_eq!(renter.financial_metrics.contract_fees, 233);
        assert_eq!(renter.financial_metrics.unspent, 111);
    }
}
