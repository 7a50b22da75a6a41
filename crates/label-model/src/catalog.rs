//! Read-only option tables the composer looks codes up in.

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};
use crate::family::Family;
use crate::label::ComponentClass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorType {
    pub name: String,
    pub code: String,
    pub serial_number: u32,
    pub family: Family,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtype {
    /// Name of the major type this subtype belongs to.
    pub major: String,
    pub name: String,
    pub code: String,
    pub serial_number: u32,
}

/// Generic table row: display name plus short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub name: String,
    pub code: String,
}

/// All lookup tables keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default, rename = "major")]
    pub majors: Vec<MajorType>,
    #[serde(default, rename = "subtype")]
    pub subtypes: Vec<Subtype>,
    #[serde(default, rename = "mac")]
    pub macs: Vec<CodeEntry>,
    #[serde(default, rename = "vendor")]
    pub vendors: Vec<CodeEntry>,
    #[serde(default, rename = "assembler")]
    pub assemblers: Vec<CodeEntry>,
    #[serde(default, rename = "shape")]
    pub shapes: Vec<CodeEntry>,
    /// Magazine names in fill order.
    #[serde(default)]
    pub magazines: Vec<String>,
}

impl Catalog {
    pub fn major(&self, name: &str) -> Option<&MajorType> {
        self.majors.iter().find(|m| m.name == name)
    }

    pub fn subtypes_for<'a>(&'a self, major: &'a str) -> impl Iterator<Item = &'a Subtype> + 'a {
        self.subtypes.iter().filter(move |s| s.major == major)
    }

    pub fn subtype(&self, major: &str, name: &str) -> Option<&Subtype> {
        self.subtypes
            .iter()
            .find(|s| s.major == major && s.name == name)
    }

    pub fn mac(&self, name: &str) -> Result<&CodeEntry> {
        lookup(&self.macs, "MAC", name)
    }

    pub fn vendor(&self, name: &str) -> Result<&CodeEntry> {
        lookup(&self.vendors, "vendor", name)
    }

    pub fn assembler(&self, name: &str) -> Result<&CodeEntry> {
        lookup(&self.assemblers, "assembler", name)
    }

    pub fn shape(&self, name: &str) -> Result<&CodeEntry> {
        lookup(&self.shapes, "shape", name)
    }

    /// Position of a magazine in the fill order.
    pub fn magazine_position(&self, name: &str) -> Result<usize> {
        self.magazines
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| LabelError::UnknownTableEntry {
                table: "magazine",
                name: name.to_string(),
            })
    }

    /// Resolve the operator's major type and subtype selection.
    ///
    /// Families with a catalog subtype require one; families that synthesize
    /// their subtype reject an explicit selection.
    pub fn resolve_class(
        &self,
        major_name: &str,
        subtype_name: Option<&str>,
    ) -> Result<ComponentClass> {
        let major = self
            .major(major_name)
            .ok_or_else(|| LabelError::UnknownMajorType {
                name: major_name.to_string(),
            })?;
        let subtype_name = subtype_name.map(str::trim).filter(|s| !s.is_empty());

        let uses_catalog_subtype = major.family.uses_catalog_subtype();
        let (subtype_code, subtype_serial_number) = match (uses_catalog_subtype, subtype_name) {
            (true, Some(name)) => {
                let subtype = self
                    .subtype(&major.name, name)
                    .ok_or_else(|| LabelError::UnknownSubtype {
                        major: major.name.clone(),
                        name: name.to_string(),
                    })?;
                (subtype.code.clone(), Some(subtype.serial_number))
            }
            (true, None) => {
                return Err(LabelError::MissingSubtype {
                    major: major.name.clone(),
                });
            }
            (false, Some(_)) => {
                return Err(LabelError::UnexpectedSubtype {
                    major: major.name.clone(),
                    family: major.family,
                });
            }
            (false, None) => (String::new(), None),
        };

        Ok(ComponentClass {
            major_name: major.name.clone(),
            major_code: major.code.clone(),
            major_serial_number: major.serial_number,
            subtype_code,
            subtype_serial_number,
            family: major.family,
        })
    }
}

fn lookup<'a>(table: &'a [CodeEntry], label: &'static str, name: &str) -> Result<&'a CodeEntry> {
    table
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| LabelError::UnknownTableEntry {
            table: label,
            name: name.to_string(),
        })
}
