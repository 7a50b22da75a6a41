#![deny(unsafe_code)]

use std::path::Path;

use label_model::Catalog;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::paths::catalog_path;
use crate::validate::validate_catalog;

/// Origin label used in errors about the built-in catalog.
const BUILTIN_ORIGIN: &str = "<builtin>";

const DEFAULT_CATALOG: &str = include_str!("../catalog/default.toml");

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = parse_catalog(&contents, path)?;
    info!(
        catalog = %path.display(),
        major_types = catalog.majors.len(),
        subtypes = catalog.subtypes.len(),
        magazines = catalog.magazines.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse and validate catalog TOML. `origin` is only used in error messages.
pub fn parse_catalog(contents: &str, origin: &Path) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(contents).map_err(|e| CatalogError::Toml {
        path: origin.to_path_buf(),
        source: e,
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// The catalog shipped with the binary.
pub fn load_default_catalog() -> Result<Catalog> {
    debug!("using built-in catalog");
    parse_catalog(DEFAULT_CATALOG, Path::new(BUILTIN_ORIGIN))
}

/// Load the catalog named on the command line or in the environment,
/// falling back to the built-in one.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    match catalog_path(explicit) {
        Some(path) => load_catalog(&path),
        None => load_default_catalog(),
    }
}
