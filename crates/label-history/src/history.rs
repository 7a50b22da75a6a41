use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::HistoryStore;

/// One printed label as recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub serial: String,
    /// Missing for entries imported from a plain serial list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed_at: Option<DateTime<Utc>>,
    /// Short description of the print request the label belonged to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

impl HistoryEntry {
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            printed_at: None,
            batch: None,
        }
    }
}

/// Append-only record of every serial that has been printed.
///
/// Entries keep their print order and may repeat (deliberate reprints);
/// membership tests go through a set index.
#[derive(Debug, Clone, Default)]
pub struct PrintHistory {
    entries: Vec<HistoryEntry>,
    index: HashSet<String>,
}

impl PrintHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.index.contains(serial)
    }

    /// Number of recorded prints, counting reprints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct serials ever printed.
    pub fn distinct_len(&self) -> usize {
        self.index.len()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.index.insert(entry.serial.clone());
        self.entries.push(entry);
    }
}

impl FromIterator<HistoryEntry> for PrintHistory {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        let mut history = Self::new();
        for entry in iter {
            history.push(entry);
        }
        history
    }
}

impl Extend<HistoryEntry> for PrintHistory {
    fn extend<I: IntoIterator<Item = HistoryEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

/// An in-memory history is its own store.
impl HistoryStore for PrintHistory {
    fn load(&self) -> Result<PrintHistory> {
        Ok(self.clone())
    }

    fn append(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        self.extend(entries.iter().cloned());
        Ok(())
    }
}
