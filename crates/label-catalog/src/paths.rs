//! Catalog location resolution.

use std::path::{Path, PathBuf};

/// Environment variable pointing at a catalog TOML file.
pub const CATALOG_ENV_VAR: &str = "LABELMAKER_CATALOG";

/// Pick the catalog file to load.
///
/// Resolution order:
/// 1. Explicit path (from `--catalog`)
/// 2. `LABELMAKER_CATALOG` environment variable
/// 3. `None`, meaning the built-in catalog
pub fn catalog_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
