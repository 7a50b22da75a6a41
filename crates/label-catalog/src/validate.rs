#![deny(unsafe_code)]

use std::collections::BTreeSet;

use label_model::{Catalog, CodeEntry};

use crate::error::{CatalogError, Result};

/// Check the internal consistency of a catalog.
///
/// Names must be unique per table, codes must be non-empty alphanumeric
/// text, major codes exactly two characters, and every subtype must hang
/// off a major type whose family looks subtypes up.
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    if catalog.majors.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut majors = BTreeSet::new();
    for major in &catalog.majors {
        if !majors.insert(major.name.as_str()) {
            return Err(CatalogError::Duplicate {
                table: "major",
                name: major.name.clone(),
            });
        }
        check_code("major", &major.name, &major.code)?;
        if major.code.chars().count() != 2 {
            return Err(CatalogError::InvalidCode {
                table: "major",
                name: major.name.clone(),
                code: major.code.clone(),
                reason: "major codes are two characters",
            });
        }
    }

    let mut subtypes = BTreeSet::new();
    for subtype in &catalog.subtypes {
        let Some(major) = catalog.major(&subtype.major) else {
            return Err(CatalogError::UnknownMajor {
                subtype: subtype.name.clone(),
                major: subtype.major.clone(),
            });
        };
        if !major.family.uses_catalog_subtype() {
            return Err(CatalogError::SubtypeNotAllowed {
                subtype: subtype.name.clone(),
                major: major.name.clone(),
            });
        }
        if !subtypes.insert((subtype.major.as_str(), subtype.name.as_str())) {
            return Err(CatalogError::Duplicate {
                table: "subtype",
                name: format!("{} / {}", subtype.major, subtype.name),
            });
        }
        check_code("subtype", &subtype.name, &subtype.code)?;
    }

    check_table("mac", &catalog.macs)?;
    check_table("vendor", &catalog.vendors)?;
    check_table("assembler", &catalog.assemblers)?;
    check_table("shape", &catalog.shapes)?;

    let mut magazines = BTreeSet::new();
    for magazine in &catalog.magazines {
        check_code("magazine", magazine, magazine)?;
        if !magazines.insert(magazine.as_str()) {
            return Err(CatalogError::Duplicate {
                table: "magazine",
                name: magazine.clone(),
            });
        }
    }
    Ok(())
}

fn check_table(table: &'static str, entries: &[CodeEntry]) -> Result<()> {
    let mut names = BTreeSet::new();
    for entry in entries {
        if !names.insert(entry.name.as_str()) {
            return Err(CatalogError::Duplicate {
                table,
                name: entry.name.clone(),
            });
        }
        check_code(table, &entry.name, &entry.code)?;
    }
    Ok(())
}

fn check_code(table: &'static str, name: &str, code: &str) -> Result<()> {
    let reason = if code.is_empty() {
        "code is empty"
    } else if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        "codes may only contain ASCII letters and digits"
    } else {
        return Ok(());
    };
    Err(CatalogError::InvalidCode {
        table,
        name: name.to_string(),
        code: code.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_model::{Family, MajorType};

    fn major(name: &str, code: &str) -> MajorType {
        MajorType {
            name: name.to_string(),
            code: code.to_string(),
            serial_number: 1,
            family: Family::General,
        }
    }

    #[test]
    fn rejects_three_letter_major_code() {
        let catalog = Catalog {
            majors: vec![major("Engine", "ENG")],
            ..Catalog::default()
        };
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCode { .. }));
    }

    #[test]
    fn rejects_duplicate_magazines() {
        let catalog = Catalog {
            majors: vec![major("Engine", "EL")],
            magazines: vec!["MA01".to_string(), "MA01".to_string()],
            ..Catalog::default()
        };
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate {
                table: "magazine",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            validate_catalog(&Catalog::default()),
            Err(CatalogError::Empty)
        ));
    }
}
