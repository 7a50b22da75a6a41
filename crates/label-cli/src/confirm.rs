//! Operator prompts on the terminal.

use std::io::{BufRead, Write};

use label_history::{ConfirmStage, DuplicateConfirmer};
use tracing::warn;

/// Number of colliding serials listed before the rest are summarized.
const LISTED_COLLISIONS: usize = 20;

/// Asks the duplicate questions on `output` and reads `y`/`yes` answers
/// from `input`. Anything else, including end of input, is a no.
pub struct PromptConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, stage: ConfirmStage, colliding: &[String]) -> std::io::Result<bool> {
        writeln!(self.output, "{}", stage.title())?;
        if stage == ConfirmStage::Duplicates {
            writeln!(self.output, "These serials were already printed:")?;
            for serial in colliding.iter().take(LISTED_COLLISIONS) {
                writeln!(self.output, "  {serial}")?;
            }
            if colliding.len() > LISTED_COLLISIONS {
                writeln!(
                    self.output,
                    "  ... and {} more",
                    colliding.len() - LISTED_COLLISIONS
                )?;
            }
        }
        write!(self.output, "{} [y/N]: ", stage.question())?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

impl<R: BufRead, W: Write> DuplicateConfirmer for PromptConfirmer<R, W> {
    fn confirm(&mut self, stage: ConfirmStage, colliding: &[String]) -> bool {
        match self.ask(stage, colliding) {
            Ok(answer) => answer,
            Err(error) => {
                warn!(%error, "could not read operator answer, treating as no");
                false
            }
        }
    }
}

/// Answers yes to every question (`--assume-yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl DuplicateConfirmer for AssumeYes {
    fn confirm(&mut self, stage: ConfirmStage, colliding: &[String]) -> bool {
        warn!(
            ?stage,
            duplicates = colliding.len(),
            "duplicate print confirmed by --assume-yes"
        );
        true
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
