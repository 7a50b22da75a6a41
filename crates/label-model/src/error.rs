use thiserror::Error;

use crate::family::Family;

/// Broad category of a [`LabelError`], used by callers to decide how the
/// failure is reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Component class or family parameters do not resolve to a known,
    /// fully specified family.
    Configuration,
    /// Start serial or count violate the family batching constraints.
    Validation,
    /// A derived index falls outside a configured table.
    OutOfRange,
}

/// Errors raised while resolving a component class or composing a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("unknown major type: {name}")]
    UnknownMajorType { name: String },

    #[error("unknown subtype '{name}' for major type {major}")]
    UnknownSubtype { major: String, name: String },

    #[error("major type {major} requires a subtype")]
    MissingSubtype { major: String },

    #[error("major type {major} synthesizes its subtype ({family} family); none may be selected")]
    UnexpectedSubtype { major: String, family: Family },

    #[error("{family} labels require '{field}'")]
    MissingParameter { family: Family, field: &'static str },

    #[error("invalid {field} '{value}' (expected {expected})")]
    InvalidParameter {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("'{name}' is not listed in the {table} table")]
    UnknownTableEntry { table: &'static str, name: String },

    #[error("start serial must be positive")]
    InvalidStart,

    #[error("{family} batches need a positive multiple of {unit} labels, got {count}")]
    InvalidCount {
        family: Family,
        unit: u32,
        count: u32,
    },

    #[error("serial range starting at {start} with {count} labels overflows")]
    SerialOverflow { start: u32, count: u32 },

    #[error("composed batch repeats full serial {serial}")]
    DuplicateSerial { serial: String },

    #[error("{table} index {index} is outside the configured table of {len} entries")]
    OutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },
}

impl LabelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownMajorType { .. }
            | Self::UnknownSubtype { .. }
            | Self::MissingSubtype { .. }
            | Self::UnexpectedSubtype { .. }
            | Self::MissingParameter { .. }
            | Self::InvalidParameter { .. }
            | Self::UnknownTableEntry { .. } => ErrorKind::Configuration,
            Self::InvalidStart
            | Self::InvalidCount { .. }
            | Self::SerialOverflow { .. }
            | Self::DuplicateSerial { .. } => ErrorKind::Validation,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    pub fn invalid(
        field: &'static str,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            field,
            value: value.into(),
            expected: expected.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;
