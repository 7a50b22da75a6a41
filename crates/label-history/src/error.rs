//! Persistence error types.
//!
//! Ledger operations return structured errors with an operator-facing
//! message and an optional remediation hint.

use std::path::PathBuf;
use thiserror::Error;

/// Print history read or write failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} history file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A ledger line could not be parsed.
    #[error("History file {path} is corrupt at line {line}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The exclusive ledger lock could not be taken.
    #[error("Failed to lock history file: {path}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a ledger entry failed.
    #[error("Failed to encode history entry")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the print history at {}", operation, path.display())
            }
            Self::Corrupt { path, line, .. } => {
                format!(
                    "The print history at {} could not be read (line {}).",
                    path.display(),
                    line
                )
            }
            Self::Lock { path, .. } => {
                format!("The print history at {} could not be locked.", path.display())
            }
            Self::Encode { .. } => "An error occurred while recording printed labels.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        let hint = match self {
            Self::Io { operation, .. } if *operation == "read" => {
                "Check that the history file exists and you have permission to read it."
            }
            Self::Io { .. } => {
                "Check disk space and that you have permission to write the history file."
            }
            Self::Corrupt { .. } => {
                "Fix or remove the damaged line; every other line is still a valid record."
            }
            Self::Lock { .. } => {
                "Check that the history file lives on a file system that supports locking."
            }
            Self::Encode { .. } => return None,
        };
        Some(hint.to_string())
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
