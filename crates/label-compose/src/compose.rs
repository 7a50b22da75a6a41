use std::collections::HashSet;

use label_model::{
    Batch, Catalog, ComponentClass, FamilyParams, LabelError, LabelRecord, Result,
};
use tracing::{debug, trace};

use crate::magazine::MagazineSlots;
use crate::resolve::{FamilySpec, resolve_family};

/// Minimum width of the numeric serial at the end of every full serial.
pub const SERIAL_WIDTH: usize = 5;

/// Check start and count against the family's batching rule.
///
/// Returns the inclusive last index of the range.
pub fn validate_range(class: &ComponentClass, start: u32, count: u32) -> Result<u32> {
    if start == 0 {
        return Err(LabelError::InvalidStart);
    }
    let unit = class.family.batch_unit();
    if count == 0 || count % unit != 0 {
        return Err(LabelError::InvalidCount {
            family: class.family,
            unit,
            count,
        });
    }
    start
        .checked_add(count - 1)
        .ok_or(LabelError::SerialOverflow { start, count })
}

/// Compose one label record per unit in `[start, start + count)`.
///
/// Pure: the same inputs always yield the same batch. Either every record
/// is produced or an error is returned.
pub fn compose(
    catalog: &Catalog,
    class: &ComponentClass,
    params: &FamilyParams,
    start: u32,
    count: u32,
) -> Result<Batch> {
    let end = validate_range(class, start, count)?;
    let spec = resolve_family(catalog, class, params)?;
    debug!(
        major = %class.major_name,
        family = %class.family,
        subtype = spec.subtype_code(),
        start,
        count,
        "composing batch"
    );

    let records = match &spec {
        FamilySpec::TileBare {
            subtype_code,
            magazine_offset,
            units_per_magazine,
            tile_size,
            tile_batch,
        } => {
            let mut records = Vec::with_capacity(count as usize);
            for slot in MagazineSlots::new(start, end, *units_per_magazine) {
                let position = magazine_offset + slot.magazine_index;
                let magazine =
                    catalog
                        .magazines
                        .get(position)
                        .ok_or(LabelError::OutOfRange {
                            table: "magazine",
                            index: position,
                            len: catalog.magazines.len(),
                        })?;
                let mut record =
                    LabelRecord::new(slot.index, slot.serial, &class.major_code, subtype_code);
                record.full_serial = format!(
                    "{}{}{}{:0width$}",
                    class.major_code,
                    subtype_code,
                    magazine,
                    slot.serial,
                    width = SERIAL_WIDTH
                );
                record.magazine_code = Some(magazine.clone());
                record.tile_size = *tile_size;
                record.tile_batch = *tile_batch;
                records.push(record);
            }
            records
        }
        _ => (start..=end)
            .map(|index| sequential_record(class, &spec, index))
            .collect(),
    };

    ensure_distinct(&records)?;
    for record in &records {
        trace!(index = record.index, full_serial = %record.full_serial, "composed label");
    }

    Ok(Batch {
        class: class.clone(),
        start,
        count,
        records,
    })
}

fn sequential_record(class: &ComponentClass, spec: &FamilySpec, index: u32) -> LabelRecord {
    let subtype_code = spec.subtype_code();
    let mut record = LabelRecord::new(index, index, &class.major_code, subtype_code);
    record.full_serial = format!(
        "{}{}{:0width$}",
        class.major_code,
        subtype_code,
        index,
        width = SERIAL_WIDTH
    );
    match spec {
        FamilySpec::Catalog { stage, .. } => record.stage = *stage,
        FamilySpec::Module {
            mac_code,
            roc_version,
            stage,
            ..
        } => {
            record.mac_code = Some(mac_code.clone());
            record.roc_version = Some(roc_version.clone());
            record.stage = *stage;
        }
        FamilySpec::Hexaboard { roc_version, .. } => {
            record.roc_version = Some(roc_version.clone());
        }
        FamilySpec::TileBare { .. } | FamilySpec::TileComposite { .. } => {}
    }
    record
}

/// Reject a batch in which two records share a full serial.
fn ensure_distinct(records: &[LabelRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.full_serial.as_str()) {
            return Err(LabelError::DuplicateSerial {
                serial: record.full_serial.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_model::Family;

    fn class(family: Family) -> ComponentClass {
        ComponentClass {
            major_name: "Engine".to_string(),
            major_code: "EL".to_string(),
            major_serial_number: 10,
            subtype_code: "V3".to_string(),
            subtype_serial_number: Some(1),
            family,
        }
    }

    #[test]
    fn zero_start_is_rejected() {
        let err = validate_range(&class(Family::General), 0, 14).unwrap_err();
        assert_eq!(err, LabelError::InvalidStart);
    }

    #[test]
    fn count_must_be_multiple_of_unit() {
        let err = validate_range(&class(Family::Paired), 1, 3).unwrap_err();
        assert!(matches!(err, LabelError::InvalidCount { unit: 2, .. }));
        assert_eq!(validate_range(&class(Family::Paired), 1, 4), Ok(4));
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = validate_range(&class(Family::General), 1, 0).unwrap_err();
        assert!(matches!(err, LabelError::InvalidCount { count: 0, .. }));
    }

    #[test]
    fn range_overflow_is_rejected() {
        let err = validate_range(&class(Family::Paired), u32::MAX, 2).unwrap_err();
        assert!(matches!(err, LabelError::SerialOverflow { .. }));
    }

    #[test]
    fn duplicate_serials_are_detected() {
        let mut a = LabelRecord::new(1, 1, "EL", "V3");
        a.full_serial = "ELV300001".to_string();
        let b = a.clone();
        let err = ensure_distinct(&[a, b]).unwrap_err();
        assert_eq!(
            err,
            LabelError::DuplicateSerial {
                serial: "ELV300001".to_string()
            }
        );
    }
}
