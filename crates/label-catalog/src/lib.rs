//! Option tables for the label maker.
//!
//! The catalog is a TOML file with one array of tables per lookup table
//! (`[[major]]`, `[[subtype]]`, `[[mac]]`, `[[vendor]]`, `[[assembler]]`,
//! `[[shape]]`) and an ordered `magazines` list. A default catalog is
//! compiled into the crate; `LABELMAKER_CATALOG` or an explicit path
//! replaces it.

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;
pub mod validate;

pub use crate::error::CatalogError;
pub use crate::loader::{load_catalog, load_default_catalog, parse_catalog, resolve_catalog};
pub use crate::paths::{CATALOG_ENV_VAR, catalog_path};
pub use crate::validate::validate_catalog;
