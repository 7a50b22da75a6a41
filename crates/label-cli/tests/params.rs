//! Integration tests for parameter files and flag overrides.

use label_cli::params::{effective_params, load_params_file};
use label_model::{FamilyParams, ProductionStage};
use tempfile::tempdir;

#[test]
fn flags_override_file_values() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("station.toml");
    std::fs::write(
        &path,
        "mac = \"UMN\"\nroc_version = \"2\"\nstage = \"production\"\n",
    )
    .expect("write params");

    let flags = FamilyParams::new().with_roc_version("4");
    let params = effective_params(Some(path.as_path()), flags).expect("params");

    assert_eq!(params.mac.as_deref(), Some("UMN"));
    assert_eq!(params.roc_version.as_deref(), Some("4"));
    assert_eq!(params.stage, Some(ProductionStage::Production));
}

#[test]
fn no_file_uses_flags_only() {
    let flags = FamilyParams::new().with_mac("CMU");
    let params = effective_params(None, flags.clone()).expect("params");
    assert_eq!(params, flags);
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = load_params_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn unknown_field_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("typo.toml");
    std::fs::write(&path, "roc = \"2\"\n").expect("write params");
    let err = load_params_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse parameter file"));
}
