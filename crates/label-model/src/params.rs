//! Operator supplied parameters for a print request.

use serde::{Deserialize, Serialize};

/// Whether a batch is labelled as production or prototype hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionStage {
    Production,
    #[default]
    Prototype,
}

impl ProductionStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Prototype => "prototype",
        }
    }
}

impl std::fmt::Display for ProductionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat set of form inputs. Which fields are read depends on the family the
/// component class resolves to; the rest are ignored.
///
/// Text fields that are empty or only whitespace count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FamilyParams {
    /// MAC table entry name (module).
    pub mac: Option<String>,
    /// ROC version (module, hexaboard).
    pub roc_version: Option<String>,
    /// Hexaboard generation.
    pub generation: Option<u8>,
    /// Shape table entry name (hexaboard) or tile shape letter (tile PCB/module).
    pub shape: Option<String>,
    /// PCB vendor table entry name (hexaboard).
    pub vendor: Option<String>,
    /// Assembler table entry name (hexaboard).
    pub assembler: Option<String>,
    pub tile_size: Option<u32>,
    pub tile_batch: Option<u32>,
    /// Magazine name the batch starts counting from (bare/wrapped tiles).
    pub initial_magazine: Option<String>,
    pub units_per_magazine: Option<u32>,
    /// Tile row count (tile PCB/module).
    pub rows: Option<u8>,
    pub geometry: Option<String>,
    pub sipm: Option<String>,
    pub stage: Option<ProductionStage>,
}

impl FamilyParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merged_with(self, other: FamilyParams) -> Self {
        Self {
            mac: other.mac.or(self.mac),
            roc_version: other.roc_version.or(self.roc_version),
            generation: other.generation.or(self.generation),
            shape: other.shape.or(self.shape),
            vendor: other.vendor.or(self.vendor),
            assembler: other.assembler.or(self.assembler),
            tile_size: other.tile_size.or(self.tile_size),
            tile_batch: other.tile_batch.or(self.tile_batch),
            initial_magazine: other.initial_magazine.or(self.initial_magazine),
            units_per_magazine: other.units_per_magazine.or(self.units_per_magazine),
            rows: other.rows.or(self.rows),
            geometry: other.geometry.or(self.geometry),
            sipm: other.sipm.or(self.sipm),
            stage: other.stage.or(self.stage),
        }
    }

    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = Some(mac.into());
        self
    }

    pub fn with_roc_version(mut self, roc: impl Into<String>) -> Self {
        self.roc_version = Some(roc.into());
        self
    }

    pub fn with_magazines(mut self, initial: impl Into<String>, units_per_magazine: u32) -> Self {
        self.initial_magazine = Some(initial.into());
        self.units_per_magazine = Some(units_per_magazine);
        self
    }
}

/// Returns the trimmed text of an optional field, or `None` when blank.
pub fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}
