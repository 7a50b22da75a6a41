//! Print history guard.
//!
//! Before a batch is printed its full serials are checked against the
//! history of previously printed labels. Collisions are reported to the
//! operator, who must confirm twice before duplicates are printed. Once a
//! batch is printed every serial is appended to the history, including the
//! duplicates, so the ledger reflects what was actually printed.
//!
//! # Example
//!
//! ```ignore
//! use label_history::{FileHistory, HistoryStore, authorize, check_overlap, commit};
//!
//! let mut store = FileHistory::new("printed_labels.jsonl");
//! let history = store.load()?;
//! let overlap = check_overlap(&batch, &history);
//! if authorize(&overlap, &mut confirmer).may_print() {
//!     // hand the batch to the renderer, then
//!     commit(&batch, &mut store)?;
//! }
//! ```

mod confirm;
mod error;
mod guard;
mod history;
mod store;

pub use confirm::{Authorization, ConfirmStage, DuplicateConfirmer, authorize};
pub use error::{PersistenceError, Result};
pub use guard::{Overlap, check_overlap, commit};
pub use history::{HistoryEntry, PrintHistory};
pub use store::{DEFAULT_HISTORY_FILE, FileHistory, HISTORY_ENV_VAR, HistoryStore, history_path};
