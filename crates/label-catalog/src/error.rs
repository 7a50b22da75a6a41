#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate {table} entry: {name}")]
    Duplicate { table: &'static str, name: String },

    #[error("{table} entry '{name}' has an invalid code '{code}': {reason}")]
    InvalidCode {
        table: &'static str,
        name: String,
        code: String,
        reason: &'static str,
    },

    #[error("subtype '{subtype}' refers to unknown major type '{major}'")]
    UnknownMajor { subtype: String, major: String },

    #[error("subtype '{subtype}' is attached to {major}, whose family synthesizes subtypes")]
    SubtypeNotAllowed { subtype: String, major: String },

    #[error("catalog defines no major types")]
    Empty,
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
