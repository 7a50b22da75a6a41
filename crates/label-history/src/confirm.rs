//! Two-stage operator override for batches that repeat printed serials.

use tracing::{info, warn};

use crate::guard::Overlap;

/// The two questions put to the operator, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmStage {
    /// "These serials were already printed. Continue anyway?"
    Duplicates,
    /// "You will print true duplicates. Are you sure?"
    FinalWarning,
}

impl ConfirmStage {
    pub fn title(self) -> &'static str {
        match self {
            Self::Duplicates => "Warning!",
            Self::FinalWarning => "Final Warning!",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::Duplicates => "Continue anyway?",
            Self::FinalWarning => concat!(
                "You are risking printing the same label twice ",
                "which could cause major confusion. Are you sure?"
            ),
        }
    }
}

/// Asks the operator a yes/no question about colliding serials.
pub trait DuplicateConfirmer {
    fn confirm(&mut self, stage: ConfirmStage, colliding: &[String]) -> bool;
}

impl<F> DuplicateConfirmer for F
where
    F: FnMut(ConfirmStage, &[String]) -> bool,
{
    fn confirm(&mut self, stage: ConfirmStage, colliding: &[String]) -> bool {
        self(stage, colliding)
    }
}

/// Outcome of the overlap decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// Nothing in the batch was printed before.
    Clear,
    /// The operator answered yes twice.
    Overridden { duplicates: usize },
    /// The operator answered no; nothing may be printed or recorded.
    Declined { stage: ConfirmStage },
}

impl Authorization {
    pub fn may_print(self) -> bool {
        !matches!(self, Self::Declined { .. })
    }
}

/// Ask for confirmation when `overlap` is non-empty. Only two affirmative
/// answers allow printing.
pub fn authorize<C: DuplicateConfirmer + ?Sized>(
    overlap: &Overlap,
    confirmer: &mut C,
) -> Authorization {
    if !overlap.has_overlap {
        return Authorization::Clear;
    }
    for stage in [ConfirmStage::Duplicates, ConfirmStage::FinalWarning] {
        if !confirmer.confirm(stage, &overlap.colliding) {
            info!(?stage, "operator declined duplicate print");
            return Authorization::Declined { stage };
        }
    }
    warn!(
        duplicates = overlap.colliding.len(),
        "operator approved printing duplicate serials"
    );
    Authorization::Overridden {
        duplicates: overlap.colliding.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(serials: &[&str]) -> Overlap {
        Overlap {
            has_overlap: !serials.is_empty(),
            colliding: serials.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn no_overlap_never_asks() {
        let mut asked = 0;
        let mut confirmer = |_: ConfirmStage, _: &[String]| {
            asked += 1;
            false
        };
        let outcome = authorize(&overlap(&[]), &mut confirmer);
        assert_eq!(outcome, Authorization::Clear);
        assert_eq!(asked, 0);
    }

    #[test]
    fn first_no_stops_at_first_stage() {
        let mut stages = Vec::new();
        let mut confirmer = |stage: ConfirmStage, _: &[String]| {
            stages.push(stage);
            false
        };
        let outcome = authorize(&overlap(&["A"]), &mut confirmer);
        assert_eq!(
            outcome,
            Authorization::Declined {
                stage: ConfirmStage::Duplicates
            }
        );
        assert_eq!(stages, vec![ConfirmStage::Duplicates]);
    }

    #[test]
    fn second_no_declines() {
        let mut confirmer = |stage: ConfirmStage, _: &[String]| stage == ConfirmStage::Duplicates;
        let outcome = authorize(&overlap(&["A", "B"]), &mut confirmer);
        assert_eq!(
            outcome,
            Authorization::Declined {
                stage: ConfirmStage::FinalWarning
            }
        );
        assert!(!outcome.may_print());
    }

    #[test]
    fn two_yes_answers_override() {
        let mut seen = Vec::new();
        let mut confirmer = |_: ConfirmStage, colliding: &[String]| {
            seen.push(colliding.len());
            true
        };
        let outcome = authorize(&overlap(&["A", "B"]), &mut confirmer);
        assert_eq!(outcome, Authorization::Overridden { duplicates: 2 });
        assert!(outcome.may_print());
        assert_eq!(seen, vec![2, 2]);
    }
}
