//! JSON-lines ledger on disk.
//!
//! Each line is one [`HistoryEntry`] object:
//!
//! ```text
//! {"serial":"MLF300100","printed_at":"2026-03-02T14:05:11Z","batch":"MLF3:100+10"}
//! ```
//!
//! Lines that do not start with `{` are read as bare serials so a plain
//! list of previously printed serials can seed the ledger.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PersistenceError, Result};
use crate::history::{HistoryEntry, PrintHistory};
use crate::store::HistoryStore;

/// Environment variable overriding the ledger location.
pub const HISTORY_ENV_VAR: &str = "LABELMAKER_HISTORY";

/// Ledger file used when nothing else is configured.
pub const DEFAULT_HISTORY_FILE: &str = "printed_labels.jsonl";

/// Pick the ledger file: explicit path, then `LABELMAKER_HISTORY`, then
/// [`DEFAULT_HISTORY_FILE`] in the working directory.
pub fn history_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    std::env::var_os(HISTORY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE), PathBuf::from)
}

/// Print history kept in an append-only JSON-lines file.
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistory {
    fn load(&self) -> Result<PrintHistory> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(PrintHistory::new());
            }
            Err(e) => return Err(PersistenceError::io("read", &self.path, e)),
        };

        let mut history = PrintHistory::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| PersistenceError::io("read", &self.path, e))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let entry = if line.starts_with('{') {
                serde_json::from_str(line).map_err(|e| PersistenceError::Corrupt {
                    path: self.path.clone(),
                    line: number + 1,
                    source: e,
                })?
            } else {
                HistoryEntry::new(line)
            };
            history.push(entry);
        }
        debug!(
            path = %self.path.display(),
            entries = history.len(),
            "history loaded"
        );
        Ok(history)
    }

    /// Appends under an exclusive lock and syncs before returning, so
    /// concurrent stations never interleave partial lines.
    fn append(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut buffer = Vec::new();
        for entry in entries {
            serde_json::to_writer(&mut buffer, entry)
                .map_err(|e| PersistenceError::Encode { source: e })?;
            buffer.push(b'\n');
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| PersistenceError::io("create directory", parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PersistenceError::io("open", &self.path, e))?;
        file.lock().map_err(|e| PersistenceError::Lock {
            path: self.path.clone(),
            source: e,
        })?;

        let mid_line =
            ends_mid_line(&mut file).map_err(|e| PersistenceError::io("read", &self.path, e))?;
        if mid_line {
            buffer.insert(0, b'\n');
        }
        file.write_all(&buffer)
            .map_err(|e| PersistenceError::io("write", &self.path, e))?;
        file.sync_all()
            .map_err(|e| PersistenceError::io("sync", &self.path, e))?;
        // Lock is released when `file` is closed.
        Ok(())
    }
}

/// Whether the last byte of a non-empty file is something other than `\n`.
fn ends_mid_line(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
