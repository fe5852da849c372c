//! Overview aggregation: one summary row per run, newest first.

use std::path::Path;

use crate::error::StoreError;
use crate::models::{OverviewRow, SnapshotRecord};
use crate::store::scan_all;

/// Build overview rows from decoded snapshots.
///
/// Each row carries the total number of changed paths across all six
/// categories and the step durations copied verbatim. Rows are ordered by
/// identifier, descending, so the most recent run comes first. The result
/// depends only on the input set, not on its order.
pub fn build_overview(records: &[SnapshotRecord]) -> Vec<OverviewRow> {
    let mut rows: Vec<OverviewRow> = records
        .iter()
        .map(|record| OverviewRow {
            id: record.id.clone(),
            date: record.id.display_date(),
            total_changes: record.changes.total(),
            timings: record.timings,
        })
        .collect();

    rows.sort_by(|a, b| b.id.cmp(&a.id));
    rows
}

/// Scan `store_dir` and build its overview.
///
/// Inherits the fail-loud policy of [`scan_all`]: one corrupt snapshot fails
/// the whole overview rather than dropping a row.
pub fn overview(store_dir: &Path) -> Result<Vec<OverviewRow>, StoreError> {
    let records = scan_all(store_dir)?;
    Ok(build_overview(&records))
}
