//! Integration tests for overlap detection and committing batches.

use label_history::{
    Authorization, ConfirmStage, FileHistory, HistoryEntry, HistoryStore, PrintHistory, authorize,
    check_overlap, commit,
};
use label_model::{Batch, ComponentClass, Family, LabelRecord};
use tempfile::tempdir;

fn batch(serials: &[&str]) -> Batch {
    let records = serials
        .iter()
        .enumerate()
        .map(|(i, serial)| {
            let mut record = LabelRecord::new(i as u32 + 1, i as u32 + 1, "EL", "V3");
            record.full_serial = (*serial).to_string();
            record
        })
        .collect();
    Batch {
        class: ComponentClass {
            major_name: "LD Engine".to_string(),
            major_code: "EL".to_string(),
            major_serial_number: 10,
            subtype_code: "V3".to_string(),
            subtype_serial_number: Some(1),
            family: Family::General,
        },
        start: 1,
        count: serials.len() as u32,
        records,
    }
}

fn history(serials: &[&str]) -> PrintHistory {
    serials.iter().map(|s| HistoryEntry::new(*s)).collect()
}

#[test]
fn empty_history_never_overlaps() {
    let overlap = check_overlap(&batch(&["ELV300001", "ELV300002"]), &PrintHistory::new());
    assert!(!overlap.has_overlap);
    assert!(overlap.colliding.is_empty());
}

#[test]
fn empty_batch_never_overlaps() {
    let overlap = check_overlap(&batch(&[]), &history(&["ELV300001"]));
    assert!(!overlap.has_overlap);
}

#[test]
fn single_collision_is_reported() {
    let overlap = check_overlap(
        &batch(&["ELV300001", "ELV300002", "ELV300003"]),
        &history(&["ELV300002", "MLF300001"]),
    );
    assert!(overlap.has_overlap);
    assert_eq!(overlap.colliding, vec!["ELV300002".to_string()]);
}

#[test]
fn collisions_follow_batch_order_per_occurrence() {
    let overlap = check_overlap(&batch(&["C", "A", "B", "A"]), &history(&["A", "C"]));
    assert_eq!(
        overlap.colliding,
        vec!["C".to_string(), "A".to_string(), "A".to_string()]
    );
}

#[test]
fn check_does_not_mutate_history() {
    let past = history(&["A"]);
    let _ = check_overlap(&batch(&["A", "B"]), &past);
    assert_eq!(past.len(), 1);
    assert!(!past.contains("B"));
}

#[test]
fn commit_is_append_only_and_keeps_duplicates() {
    let mut store = history(&["A", "B"]);
    commit(&batch(&["B", "C"]), &mut store).expect("commit");

    let serials: Vec<&str> = store.entries().iter().map(|e| e.serial.as_str()).collect();
    assert_eq!(serials, vec!["A", "B", "B", "C"]);
    assert_eq!(store.distinct_len(), 3);
    let last = &store.entries()[3];
    assert_eq!(last.batch.as_deref(), Some("ELV3:1+2"));
    assert!(last.printed_at.is_some());
}

#[test]
fn file_ledger_survives_reload() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("printed.jsonl");

    let mut store = FileHistory::new(&path);
    commit(&batch(&["ELV300001", "ELV300002"]), &mut store).expect("first commit");
    commit(&batch(&["ELV300002"]), &mut store).expect("second commit");

    let reopened = FileHistory::new(&path).load().expect("load");
    assert_eq!(reopened.len(), 3);
    assert_eq!(reopened.distinct_len(), 2);

    let overlap = check_overlap(&batch(&["ELV300002", "ELV300003"]), &reopened);
    assert_eq!(overlap.colliding, vec!["ELV300002".to_string()]);
}

#[test]
fn declined_override_leaves_ledger_untouched() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("printed.jsonl");
    let mut store = FileHistory::new(&path);
    commit(&batch(&["ELV300001"]), &mut store).expect("commit");

    let again = batch(&["ELV300001"]);
    let overlap = check_overlap(&again, &store.load().expect("load"));
    let mut confirmer = |stage: ConfirmStage, _: &[String]| stage == ConfirmStage::Duplicates;
    let decision = authorize(&overlap, &mut confirmer);
    assert_eq!(
        decision,
        Authorization::Declined {
            stage: ConfirmStage::FinalWarning
        }
    );
    if decision.may_print() {
        commit(&again, &mut store).expect("commit");
    }
    assert_eq!(store.load().expect("load").len(), 1);
}
