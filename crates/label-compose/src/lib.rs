//! Serial code composition.
//!
//! Given a resolved [`ComponentClass`](label_model::ComponentClass), the
//! operator's [`FamilyParams`](label_model::FamilyParams), a start serial
//! and a count, [`compose`] produces the ordered [`Batch`](label_model::Batch)
//! of label records that is handed to the print-history guard and the
//! renderer.
//!
//! Full serial layout per family:
//!
//! ```text
//! general, paired, module        MAJOR + SUBTYPE + 00000
//! hexaboard                      MAJOR + SHAPE GEN ROC VENDOR ASSEMBLER + 00000
//! tile PCB, tile module          MAJOR + SHAPE ROWS GEOMETRY SIPM + 00000
//! bare / wrapped tile            MAJOR + (B | PL) + MAGAZINE + 00000
//! ```

mod compose;
mod magazine;
mod resolve;

pub use compose::{SERIAL_WIDTH, compose, validate_range};
pub use magazine::{MagazineSlot, MagazineSlots};
pub use resolve::{
    FamilySpec, HEXABOARD_ROC_VERSIONS, MODULE_ROC_VERSIONS, TILE_GEOMETRIES, TILE_MODULE_SIPMS,
    TILE_PCB_SIPMS, TILE_ROWS, TILE_SHAPES, resolve_family,
};
