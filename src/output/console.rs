//! Fixed-column console rendering of snapshots.

use tracing::warn;

use crate::error::{MonitorError, Result};
use crate::metrics::data::SiaSnapshot;
use crate::output::format::{format_bytes, format_contract_count, format_hastings};

/// Print the two-line column banner.
pub fn print_header() {
    println!("time     latency uploaded  #c  tot $     fees $    store $   u/l $     d/l $");
    println!("-------- ------- --------- --- --------- --------- --------- --------- ---------");
}

/// Print one snapshot as a dashboard line.
///
/// A snapshot that cannot be rendered (no timestamp or latency to fill the
/// leading columns) is logged and skipped; this never fails the poll cycle.
pub fn print_state(snapshot: &SiaSnapshot) {
    match render_line(snapshot) {
        Ok(line) => println!("{}", line),
        Err(err) => warn!(error = %err, "failed to render console line"),
    }
}

/// Render one snapshot as a fixed-width line.
///
/// The time column shows the start of the poll (timestamp corrected by the
/// measured latency), so consecutive lines tick at the poll interval.
pub fn render_line(snapshot: &SiaSnapshot) -> Result<String> {
    let start = snapshot
        .collection_start()
        .ok_or_else(|| MonitorError::render_error("snapshot has no timestamp"))?;
    let latency_ms = snapshot
        .api_latency
        .ok_or_else(|| MonitorError::render_error("snapshot has no API latency"))?;

    Ok(format!(
        "{} {:05}ms {} {} {} {} {} {} {}",
        start.format("%H:%M:%S"),
        latency_ms as u64,
        format_bytes(snapshot.file_uploaded_bytes),
        format_contract_count(snapshot.contract_count_active),
        format_hastings(snapshot.contract_total_spending),
        format_hastings(snapshot.renter_contract_fees),
        format_hastings(snapshot.renter_storage_spending),
        format_hastings(snapshot.renter_upload_spending),
        format_hastings(snapshot.renter_download_spending),
    ))
}
