//! Tests for label-model types.

use label_model::{ErrorKind, Family, FamilyParams, LabelError, ProductionStage, non_blank};

#[test]
fn batch_units_per_family() {
    assert_eq!(Family::General.batch_unit(), 14);
    assert_eq!(Family::Paired.batch_unit(), 2);
    assert_eq!(Family::Module.batch_unit(), 10);
    assert_eq!(Family::Hexaboard.batch_unit(), 14);
    assert_eq!(Family::TileBare.batch_unit(), 8);
    assert_eq!(Family::TilePcb.batch_unit(), 8);
    assert_eq!(Family::TileModule.batch_unit(), 8);
}

#[test]
fn only_lookup_families_use_catalog_subtypes() {
    let lookup: Vec<Family> = Family::ALL
        .into_iter()
        .filter(|f| f.uses_catalog_subtype())
        .collect();
    assert_eq!(lookup, vec![Family::General, Family::Paired, Family::Module]);
}

#[test]
fn params_parse_from_toml() {
    let params: FamilyParams = toml::from_str(
        r#"
mac = "UMN"
roc_version = "2"
stage = "production"
"#,
    )
    .expect("parse params");
    assert_eq!(params.mac.as_deref(), Some("UMN"));
    assert_eq!(params.roc_version.as_deref(), Some("2"));
    assert_eq!(params.stage, Some(ProductionStage::Production));
    assert_eq!(params.generation, None);
}

#[test]
fn params_reject_unknown_fields() {
    let result: Result<FamilyParams, _> = toml::from_str("colour = \"red\"");
    assert!(result.is_err());
}

#[test]
fn merged_params_prefer_overrides() {
    let base = FamilyParams::new().with_mac("UMN").with_roc_version("X");
    let overrides = FamilyParams {
        roc_version: Some("3".to_string()),
        ..FamilyParams::default()
    };
    let merged = base.merged_with(overrides);
    assert_eq!(merged.mac.as_deref(), Some("UMN"));
    assert_eq!(merged.roc_version.as_deref(), Some("3"));
}

#[test]
fn blank_text_counts_as_missing() {
    let blank = Some("   ".to_string());
    let set = Some(" A ".to_string());
    assert_eq!(non_blank(blank.as_ref()), None);
    assert_eq!(non_blank(set.as_ref()), Some("A"));
    assert_eq!(non_blank(None), None);
}

#[test]
fn error_kinds() {
    let config = LabelError::MissingParameter {
        family: Family::Module,
        field: "mac",
    };
    let validation = LabelError::InvalidCount {
        family: Family::TileBare,
        unit: 8,
        count: 5,
    };
    let range = LabelError::OutOfRange {
        table: "magazine",
        index: 4,
        len: 3,
    };
    assert_eq!(config.kind(), ErrorKind::Configuration);
    assert_eq!(validation.kind(), ErrorKind::Validation);
    assert_eq!(range.kind(), ErrorKind::OutOfRange);
    assert_eq!(
        validation.to_string(),
        "tile_bare batches need a positive multiple of 8 labels, got 5"
    );
}

#[test]
fn family_serializes_snake_case() {
    let json = serde_json::to_string(&Family::TileModule).expect("serialize family");
    assert_eq!(json, "\"tile_module\"");
}
