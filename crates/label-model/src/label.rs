//! Label records and batches.

use serde::{Deserialize, Serialize};

use crate::family::Family;
use crate::params::ProductionStage;

/// A resolved printable item family: major type plus (optionally) the
/// catalog subtype selected for this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentClass {
    pub major_name: String,
    pub major_code: String,
    pub major_serial_number: u32,
    /// Empty for families that synthesize the subtype per unit.
    pub subtype_code: String,
    pub subtype_serial_number: Option<u32>,
    pub family: Family,
}

/// Data for one physical label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Absolute index in the requested range.
    pub index: u32,
    /// Serial printed on the label. Differs from `index` only for tiles,
    /// where it restarts in every magazine.
    pub serial: u32,
    pub major_code: String,
    pub subtype_code: String,
    pub full_serial: String,
    pub mac_code: Option<String>,
    pub roc_version: Option<String>,
    pub magazine_code: Option<String>,
    pub tile_size: Option<u32>,
    pub tile_batch: Option<u32>,
    pub stage: Option<ProductionStage>,
}

impl LabelRecord {
    pub fn new(index: u32, serial: u32, major_code: &str, subtype_code: &str) -> Self {
        Self {
            index,
            serial,
            major_code: major_code.to_string(),
            subtype_code: subtype_code.to_string(),
            full_serial: String::new(),
            mac_code: None,
            roc_version: None,
            magazine_code: None,
            tile_size: None,
            tile_batch: None,
            stage: None,
        }
    }
}

/// One print request's labels, ordered by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub class: ComponentClass,
    pub start: u32,
    pub count: u32,
    pub records: Vec<LabelRecord>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabelRecord> {
        self.records.iter()
    }

    pub fn full_serials(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.full_serial.as_str())
    }

    pub fn first_serial(&self) -> Option<&str> {
        self.records.first().map(|r| r.full_serial.as_str())
    }

    pub fn last_serial(&self) -> Option<&str> {
        self.records.last().map(|r| r.full_serial.as_str())
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a LabelRecord;
    type IntoIter = std::slice::Iter<'a, LabelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
