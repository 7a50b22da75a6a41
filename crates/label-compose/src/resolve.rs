//! Turns a component class plus loose form parameters into the typed
//! parameters one family needs.

use label_model::{
    Catalog, ComponentClass, Family, FamilyParams, LabelError, ProductionStage, Result, non_blank,
};

pub const MODULE_ROC_VERSIONS: &[&str] = &["X", "1", "2", "3", "4"];
pub const HEXABOARD_ROC_VERSIONS: &[&str] = &["2", "4", "C"];
pub const MAX_HEXABOARD_GENERATION: u8 = 4;
pub const TILE_SHAPES: &[&str] = &["A", "B", "C", "D", "E", "G", "J", "K"];
pub const TILE_ROWS: &[u8] = &[11, 12];
pub const TILE_GEOMETRIES: &[&str] = &["L", "R", "F"];
pub const TILE_PCB_SIPMS: &[&str] = &["4", "9"];
pub const TILE_MODULE_SIPMS: &[&str] = &["C", "M", "9"];

/// Major code of wrapped tiles; they carry the `PL` subtype, bare tiles `B`.
pub const WRAPPED_TILE_MAJOR_CODE: &str = "TC";
pub const WRAPPED_TILE_SUBTYPE: &str = "PL";
pub const BARE_TILE_SUBTYPE: &str = "B";

/// Fully checked per-family parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilySpec {
    /// General and paired families: the catalog subtype is used as is.
    Catalog {
        subtype_code: String,
        stage: Option<ProductionStage>,
    },
    Module {
        subtype_code: String,
        mac_code: String,
        roc_version: String,
        stage: Option<ProductionStage>,
    },
    Hexaboard {
        subtype_code: String,
        roc_version: String,
    },
    TileBare {
        subtype_code: String,
        magazine_offset: usize,
        units_per_magazine: u32,
        tile_size: Option<u32>,
        tile_batch: Option<u32>,
    },
    /// Tile PCBs and tile modules.
    TileComposite { subtype_code: String },
}

impl FamilySpec {
    /// Subtype shared by every unit of the batch.
    pub fn subtype_code(&self) -> &str {
        match self {
            Self::Catalog { subtype_code, .. }
            | Self::Module { subtype_code, .. }
            | Self::Hexaboard { subtype_code, .. }
            | Self::TileBare { subtype_code, .. }
            | Self::TileComposite { subtype_code } => subtype_code,
        }
    }
}

/// Check the class against the catalog and pull the fields its family
/// needs out of `params`.
pub fn resolve_family(
    catalog: &Catalog,
    class: &ComponentClass,
    params: &FamilyParams,
) -> Result<FamilySpec> {
    let major = catalog
        .major(&class.major_name)
        .filter(|m| m.code == class.major_code && m.family == class.family)
        .ok_or_else(|| LabelError::UnknownMajorType {
            name: class.major_name.clone(),
        })?;
    let family = major.family;

    let has_subtype = !class.subtype_code.trim().is_empty();
    if family.uses_catalog_subtype() && !has_subtype {
        return Err(LabelError::MissingSubtype {
            major: class.major_name.clone(),
        });
    }
    if !family.uses_catalog_subtype() && has_subtype {
        return Err(LabelError::UnexpectedSubtype {
            major: class.major_name.clone(),
            family,
        });
    }

    match family {
        Family::General | Family::Paired => Ok(FamilySpec::Catalog {
            subtype_code: class.subtype_code.clone(),
            stage: params.stage,
        }),
        Family::Module => {
            let mac = required(family, "mac", params.mac.as_ref())?;
            let mac_code = catalog.mac(mac)?.code.clone();
            let roc = required(family, "roc_version", params.roc_version.as_ref())?;
            let roc_version = one_of("roc_version", roc, MODULE_ROC_VERSIONS)?;
            Ok(FamilySpec::Module {
                subtype_code: class.subtype_code.clone(),
                mac_code,
                roc_version,
                stage: params.stage,
            })
        }
        Family::Hexaboard => resolve_hexaboard(catalog, params),
        Family::TileBare => resolve_tile_bare(catalog, class, params),
        Family::TilePcb | Family::TileModule => resolve_tile_composite(family, params),
    }
}

fn resolve_hexaboard(catalog: &Catalog, params: &FamilyParams) -> Result<FamilySpec> {
    let family = Family::Hexaboard;
    let shape = required(family, "shape", params.shape.as_ref())?;
    let shape_code = &catalog.shape(shape)?.code;

    let generation = params.generation.ok_or(LabelError::MissingParameter {
        family,
        field: "generation",
    })?;
    if generation > MAX_HEXABOARD_GENERATION {
        return Err(LabelError::invalid(
            "generation",
            generation.to_string(),
            format!("0 to {MAX_HEXABOARD_GENERATION}"),
        ));
    }

    let roc = required(family, "roc_version", params.roc_version.as_ref())?;
    let roc_version = one_of("roc_version", roc, HEXABOARD_ROC_VERSIONS)?;

    let vendor = required(family, "vendor", params.vendor.as_ref())?;
    let vendor_code = &catalog.vendor(vendor)?.code;
    let assembler = required(family, "assembler", params.assembler.as_ref())?;
    let assembler_code = &catalog.assembler(assembler)?.code;

    Ok(FamilySpec::Hexaboard {
        subtype_code: format!("{shape_code}{generation}{roc_version}{vendor_code}{assembler_code}"),
        roc_version,
    })
}

fn resolve_tile_bare(
    catalog: &Catalog,
    class: &ComponentClass,
    params: &FamilyParams,
) -> Result<FamilySpec> {
    let family = Family::TileBare;
    let units_per_magazine = params
        .units_per_magazine
        .ok_or(LabelError::MissingParameter {
            family,
            field: "units_per_magazine",
        })?;
    if units_per_magazine == 0 {
        return Err(LabelError::invalid(
            "units_per_magazine",
            "0",
            "a positive number",
        ));
    }
    let initial = required(family, "initial_magazine", params.initial_magazine.as_ref())?;
    let magazine_offset = catalog.magazine_position(initial)?;

    let subtype_code = if class.major_code == WRAPPED_TILE_MAJOR_CODE {
        WRAPPED_TILE_SUBTYPE
    } else {
        BARE_TILE_SUBTYPE
    };

    Ok(FamilySpec::TileBare {
        subtype_code: subtype_code.to_string(),
        magazine_offset,
        units_per_magazine,
        tile_size: params.tile_size,
        tile_batch: params.tile_batch,
    })
}

fn resolve_tile_composite(family: Family, params: &FamilyParams) -> Result<FamilySpec> {
    let shape = required(family, "shape", params.shape.as_ref())?;
    let shape = one_of("shape", shape, TILE_SHAPES)?;

    let rows = params.rows.ok_or(LabelError::MissingParameter {
        family,
        field: "rows",
    })?;
    if !TILE_ROWS.contains(&rows) {
        return Err(LabelError::invalid("rows", rows.to_string(), "11 or 12"));
    }

    let geometry = required(family, "geometry", params.geometry.as_ref())?;
    let geometry = one_of("geometry", geometry, TILE_GEOMETRIES)?;

    let sipms = if family == Family::TilePcb {
        TILE_PCB_SIPMS
    } else {
        TILE_MODULE_SIPMS
    };
    let sipm = required(family, "sipm", params.sipm.as_ref())?;
    let sipm = one_of("sipm", sipm, sipms)?;

    Ok(FamilySpec::TileComposite {
        subtype_code: format!("{shape}{rows}{geometry}{sipm}"),
    })
}

fn required<'a>(family: Family, field: &'static str, value: Option<&'a String>) -> Result<&'a str> {
    non_blank(value).ok_or(LabelError::MissingParameter { family, field })
}

/// Accepts `value` if it is one of `allowed`, ignoring ASCII case.
fn one_of(field: &'static str, value: &str, allowed: &[&str]) -> Result<String> {
    allowed
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(value))
        .map(|candidate| (*candidate).to_string())
        .ok_or_else(|| LabelError::invalid(field, value, allowed.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_normalizes_case() {
        assert_eq!(one_of("roc_version", "x", MODULE_ROC_VERSIONS).unwrap(), "X");
        assert_eq!(one_of("roc_version", "c", HEXABOARD_ROC_VERSIONS).unwrap(), "C");
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let err = one_of("geometry", "Q", TILE_GEOMETRIES).unwrap_err();
        assert_eq!(err.to_string(), "invalid geometry 'Q' (expected L, R, F)");
    }

    #[test]
    fn blank_values_are_missing() {
        let blank = Some(" ".to_string());
        let err = required(Family::Module, "mac", blank.as_ref()).unwrap_err();
        assert_eq!(
            err,
            LabelError::MissingParameter {
                family: Family::Module,
                field: "mac"
            }
        );
    }
}
