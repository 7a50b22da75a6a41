use chrono::Utc;
use label_model::Batch;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::history::{HistoryEntry, PrintHistory};
use crate::store::HistoryStore;

/// Result of checking a batch against the print history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub has_overlap: bool,
    /// Serials already printed, in batch order, one per occurrence.
    pub colliding: Vec<String>,
}

/// Report every full serial in `batch` that is already in `history`.
pub fn check_overlap(batch: &Batch, history: &PrintHistory) -> Overlap {
    let colliding: Vec<String> = batch
        .full_serials()
        .filter(|serial| history.contains(serial))
        .map(str::to_string)
        .collect();
    if !colliding.is_empty() {
        warn!(
            major = %batch.class.major_name,
            collisions = colliding.len(),
            "batch contains already printed serials"
        );
    }
    Overlap {
        has_overlap: !colliding.is_empty(),
        colliding,
    }
}

/// Record every label of `batch` as printed, collided or not.
///
/// Call only after any overlap has been resolved with the operator.
pub fn commit<S: HistoryStore + ?Sized>(batch: &Batch, store: &mut S) -> Result<()> {
    let printed_at = Utc::now();
    let tag = batch_tag(batch);
    let entries: Vec<HistoryEntry> = batch
        .full_serials()
        .map(|serial| HistoryEntry {
            serial: serial.to_string(),
            printed_at: Some(printed_at),
            batch: Some(tag.clone()),
        })
        .collect();
    store.append(&entries)?;
    info!(batch = %tag, labels = entries.len(), "batch committed to print history");
    Ok(())
}

/// `<major code><subtype code>:<start>+<count>`, e.g. `MLF3:100+10`.
fn batch_tag(batch: &Batch) -> String {
    format!(
        "{}{}:{}+{}",
        batch.class.major_code, batch.class.subtype_code, batch.start, batch.count
    )
}
