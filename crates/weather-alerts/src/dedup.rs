//! Supersession of repeated alert updates.

use tracing::debug;

use crate::types::AlertRecord;

/// Keep only the latest update of each alert identity.
///
/// Records are stable-sorted ascending by `sent`; a record is dropped when any
/// later record shares its `id`. Survivors keep their ascending order. The scan
/// is quadratic, which is fine for the handful of alerts one poll returns.
pub fn latest_per_alert(mut records: Vec<AlertRecord>) -> Vec<AlertRecord> {
    if records.is_empty() {
        return records;
    }

    records.sort_by(|a, b| a.sent.cmp(&b.sent));

    let total = records.len();
    let retained: Vec<AlertRecord> = records
        .iter()
        .enumerate()
        .filter(|(i, record)| !records[i + 1..].iter().any(|later| later.id == record.id))
        .map(|(_, record)| record.clone())
        .collect();

    debug!(
        "Dropped {} superseded updates, {} alerts remain",
        total - retained.len(),
        retained.len()
    );

    retained
}
