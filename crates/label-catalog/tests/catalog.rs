use std::fs;
use std::path::Path;

use label_catalog::{
    CatalogError, catalog_path, load_catalog, load_default_catalog, parse_catalog,
};
use label_model::{ErrorKind, Family};

#[test]
fn default_catalog_is_valid() {
    let catalog = load_default_catalog().expect("load default catalog");
    assert!(!catalog.magazines.is_empty());
    for family in Family::ALL {
        assert!(
            catalog.majors.iter().any(|m| m.family == family),
            "no major type for {family}"
        );
    }
}

#[test]
fn default_major_types_snapshot() {
    let catalog = load_default_catalog().expect("load default catalog");
    let lines: Vec<String> = catalog
        .majors
        .iter()
        .map(|m| format!("{} {} {}", m.code, m.serial_number, m.family))
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    ML 8 module
    MH 9 module
    XL 3 hexaboard
    XH 4 hexaboard
    EL 10 general
    EH 11 general
    WE 12 paired
    WW 13 paired
    CM 14 paired
    CB 15 paired
    TB 20 tile_bare
    TC 21 tile_bare
    TP 22 tile_pcb
    TM 23 tile_module
    ");
}

#[test]
fn default_catalog_lookups() {
    let catalog = load_default_catalog().expect("load default catalog");
    assert_eq!(catalog.mac("UMN").expect("mac").code, "UM");
    assert_eq!(catalog.vendor("Piranha").expect("vendor").code, "P");
    assert_eq!(catalog.assembler("ACC").expect("assembler").code, "A");
    assert_eq!(catalog.shape("Full").expect("shape").code, "F");
    assert_eq!(catalog.magazine_position("MA03").expect("magazine"), 2);

    let err = catalog.mac("Nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn resolves_module_class_from_default_catalog() {
    let catalog = load_default_catalog().expect("load default catalog");
    let class = catalog
        .resolve_class("LD Module", Some("Full, 300um"))
        .expect("resolve class");
    assert_eq!(class.major_code, "ML");
    assert_eq!(class.subtype_code, "F3");
    assert_eq!(class.family, Family::Module);
}

#[test]
fn loads_catalog_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
magazines = ["A", "B"]

[[major]]
name = "Engine"
code = "EL"
serial_number = 10
family = "general"

[[subtype]]
major = "Engine"
name = "V3"
code = "V3"
serial_number = 1
"#,
    )
    .expect("write catalog");

    let catalog = load_catalog(&path).expect("load catalog");
    assert_eq!(catalog.majors.len(), 1);
    assert_eq!(catalog.subtypes_for("Engine").count(), 1);
    assert_eq!(catalog.magazines, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn missing_file_reports_path() {
    let err = load_catalog(Path::new("/nonexistent/catalog.toml")).unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/catalog.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_family_is_a_parse_error() {
    let err = parse_catalog(
        r#"
[[major]]
name = "Widget"
code = "WD"
serial_number = 1
family = "widget"
"#,
        Path::new("inline.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::Toml { .. }));
}

#[test]
fn subtype_on_synthesizing_family_is_rejected() {
    let err = parse_catalog(
        r#"
[[major]]
name = "Hexaboard"
code = "XL"
serial_number = 3
family = "hexaboard"

[[subtype]]
major = "Hexaboard"
name = "Full"
code = "F"
serial_number = 1
"#,
        Path::new("inline.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::SubtypeNotAllowed { .. }));
}

#[test]
fn subtype_for_unknown_major_is_rejected() {
    let err = parse_catalog(
        r#"
[[major]]
name = "Engine"
code = "EL"
serial_number = 10
family = "general"

[[subtype]]
major = "Wagon"
name = "West"
code = "W3"
serial_number = 1
"#,
        Path::new("inline.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::UnknownMajor { .. }));
}

#[test]
fn explicit_catalog_path_wins() {
    let explicit = Path::new("site.toml");
    assert_eq!(catalog_path(Some(explicit)), Some(explicit.to_path_buf()));
}
