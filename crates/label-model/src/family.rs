//! Component families and their batching rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of printable item families.
///
/// Every major type in the catalog names its family explicitly; the family
/// decides how the subtype is obtained, which parameters are required, and
/// how many labels make up one printable batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Catalog subtype, five digit serial.
    General,
    /// Wagons, concentrators and cables, printed in pairs.
    Paired,
    /// Silicon modules, labelled with MAC and ROC version.
    Module,
    /// Hexaboards, subtype built from shape, generation, ROC, vendor and assembler.
    Hexaboard,
    /// Bare or wrapped scintillator tiles packed in magazines.
    TileBare,
    /// Tile PCBs, subtype built from shape, rows, geometry and SiPM.
    TilePcb,
    /// Tile modules, subtype built from shape, rows, geometry and SiPM.
    TileModule,
}

impl Family {
    pub const ALL: [Family; 7] = [
        Family::General,
        Family::Paired,
        Family::Module,
        Family::Hexaboard,
        Family::TileBare,
        Family::TilePcb,
        Family::TileModule,
    ];

    /// Number of labels a batch must be a multiple of.
    pub fn batch_unit(self) -> u32 {
        match self {
            Self::Paired => 2,
            Self::TileBare | Self::TilePcb | Self::TileModule => 8,
            Self::Module => 10,
            Self::General | Self::Hexaboard => 14,
        }
    }

    /// Whether the subtype comes from the catalog rather than being synthesized.
    pub fn uses_catalog_subtype(self) -> bool {
        matches!(self, Self::General | Self::Paired | Self::Module)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Paired => "paired",
            Self::Module => "module",
            Self::Hexaboard => "hexaboard",
            Self::TileBare => "tile_bare",
            Self::TilePcb => "tile_pcb",
            Self::TileModule => "tile_module",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
