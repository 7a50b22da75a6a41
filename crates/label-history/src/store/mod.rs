//! Storage backends for the print history.

mod file;

pub use file::{DEFAULT_HISTORY_FILE, FileHistory, HISTORY_ENV_VAR, history_path};

use crate::error::Result;
use crate::history::{HistoryEntry, PrintHistory};

/// Membership-test and append capability over persisted print history.
///
/// Implementations must never drop or rewrite entries that were already
/// appended.
pub trait HistoryStore {
    /// Read the full history.
    fn load(&self) -> Result<PrintHistory>;

    /// Durably append `entries` in order.
    fn append(&mut self, entries: &[HistoryEntry]) -> Result<()>;
}
