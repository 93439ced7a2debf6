//! Append-only CSV serialization of snapshots.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::Result;
use crate::metrics::data::SiaSnapshot;

/// The canonical column order of the metrics log.
pub const CSV_COLUMNS: [&str; 26] = [
    "timestamp",
    "api_latency",
    "file_count",
    "file_total_bytes",
    "file_uploads_in_progress_count",
    "file_uploaded_bytes",
    "contract_count_active",
    "contract_count_inactive",
    "contract_total_size",
    "contract_total_spending",
    "contract_fee_spending",
    "contract_storage_spending",
    "contract_upload_spending",
    "contract_download_spending",
    "contract_remaining_funds",
    "wallet_siacoin_balance",
    "wallet_outgoing_siacoins",
    "wallet_incoming_siacoins",
    "renter_allowance",
    "renter_contract_fees",
    "renter_total_allocated",
    "renter_contract_spending",
    "renter_download_spending",
    "renter_storage_spending",
    "renter_upload_spending",
    "renter_unspent",
];

/// Serializes snapshots to an append-only CSV file.
///
/// On construction the file position moves to the end; the header row is
/// written only when the file is empty, so re-opening an existing log
/// continues it without duplicating the header. Every row is synced to disk
/// before `write_state` returns, bounding crash loss to the in-flight row.
pub struct CsvSerializer {
    file: File,
}

impl CsvSerializer {
    /// Open (or create) the metrics log at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;
        Self::from_file(file)
    }

    /// Wrap an already-open log file.
    ///
    /// The file must be readable and writable and is never truncated.
    pub fn from_file(mut file: File) -> Result<Self> {
        let end = file.seek(SeekFrom::End(0))?;
        let mut serializer = Self { file };
        if end == 0 {
            serializer.write_header()?;
        }
        Ok(serializer)
    }

    /// Append one snapshot as a CSV row and sync it to disk.
    pub fn write_state(&mut self, snapshot: &SiaSnapshot) -> Result<()> {
        writeln!(self.file, "{}", render_row(snapshot))?;
        self.file.sync_data()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.file, "{}", CSV_COLUMNS.join(","))?;
        self.file.sync_data()?;
        Ok(())
    }
}

/// Render one snapshot in canonical column order. Empty cells mark fields
/// whose query failed.
fn render_row(snapshot: &SiaSnapshot) -> String {
    let columns: [String; 26] = [
        snapshot
            .timestamp
            .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default(),
        snapshot.api_latency.map(latency_cell).unwrap_or_default(),
        cell(snapshot.file_count),
        cell(snapshot.file_total_bytes),
        cell(snapshot.file_uploads_in_progress_count),
        cell(snapshot.file_uploaded_bytes),
        cell(snapshot.contract_count_active),
        cell(snapshot.contract_count_inactive),
        cell(snapshot.contract_total_size),
        cell(snapshot.contract_total_spending),
        cell(snapshot.contract_fee_spending),
        cell(snapshot.contract_storage_spending),
        cell(snapshot.contract_upload_spending),
        cell(snapshot.contract_download_spending),
        cell(snapshot.contract_remaining_funds),
        cell(snapshot.wallet_siacoin_balance),
        cell(snapshot.wallet_outgoing_siacoins),
        cell(snapshot.wallet_incoming_siacoins),
        cell(snapshot.renter_allowance),
        cell(snapshot.renter_contract_fees),
        cell(snapshot.renter_total_allocated),
        cell(snapshot.renter_contract_spending),
        cell(snapshot.renter_download_spending),
        cell(snapshot.renter_storage_spending),
        cell(snapshot.renter_upload_spending),
        cell(snapshot.renter_unspent),
    ];
    columns.join(",")
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Latency keeps at least one fractional digit so whole-millisecond values
/// are still recognizable as durations (`5.0`, not `5`).
fn latency_cell(latency_ms: f64) -> String {
    if latency_ms.fract() == 0.0 {
        format!("{:.1}", latency_ms)
    } else {
        latency_ms.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_snapshot_renders_as_empty_cells() {
        let row = render_row(&SiaSnapshot::default());
        assert_eq!(row, ",".repeat(25));
    }

    #[test]
    fn latency_cell_keeps_a_fractional_digit() {
        assert_eq!(latency_cell(5.0), "5.0");
        assert_eq!(latency_cell(12.5), "12.5");
        assert_eq!(latency_cell(0.0), "0.0");
    }

    #[test]
    fn row_follows_canonical_column_order() {
        let snapshot = SiaSnapshot {
            timestamp: Some(Utc.with_ymd_and_hms(2018, 2, 11, 16, 5, 2).unwrap()),
            api_latency: Some(5.0),
            file_count: Some(3),
            wallet_siacoin_balance: Some(75),
            ..Default::default()
        };

        let row = render_row(&snapshot);
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), CSV_COLUMNS.len());
        assert_eq!(cells[0], "2018-02-11T16:05:02");
        assert_eq!(cells[1], "5.0");
        assert_eq!(cells[2], "3");
        assert_eq!(cells[3], ""); // file_total_bytes not populated
        assert_eq!(cells[15], "75"); // wallet_siacoin_balance
    }
}
