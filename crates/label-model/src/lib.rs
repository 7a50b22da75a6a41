pub mod catalog;
pub mod error;
pub mod family;
pub mod label;
pub mod params;

pub use catalog::{Catalog, CodeEntry, MajorType, Subtype};
pub use error::{ErrorKind, LabelError, Result};
pub use family::Family;
pub use label::{Batch, ComponentClass, LabelRecord};
pub use params::{FamilyParams, ProductionStage, non_blank};

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            majors: vec![
                MajorType {
                    name: "LD Module".to_string(),
                    code: "MD".to_string(),
                    serial_number: 8,
                    family: Family::Module,
                },
                MajorType {
                    name: "Hexaboard".to_string(),
                    code: "XL".to_string(),
                    serial_number: 3,
                    family: Family::Hexaboard,
                },
            ],
            subtypes: vec![Subtype {
                major: "LD Module".to_string(),
                name: "Full A1".to_string(),
                code: "A1".to_string(),
                serial_number: 1,
            }],
            ..Catalog::default()
        }
    }

    #[test]
    fn resolves_catalog_subtype() {
        let class = catalog()
            .resolve_class("LD Module", Some("Full A1"))
            .expect("resolve");
        assert_eq!(class.major_code, "MD");
        assert_eq!(class.subtype_code, "A1");
        assert_eq!(class.subtype_serial_number, Some(1));
        assert_eq!(class.family, Family::Module);
    }

    #[test]
    fn subtype_lookup_outlives_the_major_name() {
        let catalog = catalog();
        let found = {
            let major = String::from("LD Module");
            catalog.subtype(&major, "Full A1")
        };
        assert_eq!(found.map(|s| s.code.as_str()), Some("A1"));
        assert!(catalog.subtype("Hexaboard", "Full A1").is_none());
    }

    #[test]
    fn module_without_subtype_is_configuration_error() {
        let err = catalog().resolve_class("LD Module", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn hexaboard_rejects_explicit_subtype() {
        let err = catalog()
            .resolve_class("Hexaboard", Some("Full A1"))
            .unwrap_err();
        assert!(matches!(err, LabelError::UnexpectedSubtype { .. }));
    }
}
