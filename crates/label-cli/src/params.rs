//! Family parameters from a TOML file and command line flags.
//!
//! A parameter file holds the fields that stay fixed across print sessions
//! at one station:
//!
//! ```toml
//! mac = "UMN"
//! roc_version = "2"
//! stage = "production"
//! ```
//!
//! Flags given on the command line override the file field by field.

use std::path::Path;

use anyhow::{Context, Result};
use label_model::FamilyParams;
use tracing::debug;

/// Parse a parameter file's contents.
pub fn parse_params(contents: &str) -> Result<FamilyParams, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load_params_file(path: &Path) -> Result<FamilyParams> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read parameter file {}", path.display()))?;
    let params = parse_params(&contents)
        .with_context(|| format!("parse parameter file {}", path.display()))?;
    debug!(path = %path.display(), "loaded parameter file");
    Ok(params)
}

/// Combine the optional parameter file with the flag values.
pub fn effective_params(file: Option<&Path>, flags: FamilyParams) -> Result<FamilyParams> {
    match file {
        Some(path) => Ok(load_params_file(path)?.merged_with(flags)),
        None => Ok(flags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_model::ProductionStage;

    #[test]
    fn parses_known_fields() {
        let params = parse_params(
            "mac = \"UMN\"\nroc_version = \"2\"\nunits_per_magazine = 24\nstage = \"production\"\n",
        )
        .unwrap();
        assert_eq!(params.mac.as_deref(), Some("UMN"));
        assert_eq!(params.units_per_magazine, Some(24));
        assert_eq!(params.stage, Some(ProductionStage::Production));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(parse_params("colour = \"red\"\n").is_err());
    }
}
