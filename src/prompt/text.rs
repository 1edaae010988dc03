//! Terminal renderer for the calibration prompt.
//!
//! Stands in for the platform's modal dialog in the CLI: draws a card with
//! the calibration instructions and a live `Compass accuracy:` line colored
//! from the accuracy palette.

use crate::accuracy::{display_color, display_name, AccuracyLevel};
use crate::prompt::presenter::{PresentationError, PromptPresenter};
use crate::prompt::{CALIBRATION_HINT, PROMPT_TITLE};

const ANSI_RESET: &str = "\x1b[0m";

/// Renders the prompt to stderr so it interleaves cleanly with event output
/// on stdout.
pub struct TextPresenter {
    visible: bool,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self { visible: false }
    }

    fn accuracy_line(level: Option<AccuracyLevel>) -> String {
        format!(
            "Compass accuracy: {}{}{}",
            display_color(level).ansi_fg(),
            display_name(level),
            ANSI_RESET
        )
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptPresenter for TextPresenter {
    fn show(&mut self, level: Option<AccuracyLevel>) -> Result<(), PresentationError> {
        eprintln!();
        eprintln!("+----------------------------------------------------------+");
        eprintln!("|  {PROMPT_TITLE}");
        eprintln!("|");
        eprintln!("|  {CALIBRATION_HINT}");
        eprintln!("|");
        eprintln!("|  {}", Self::accuracy_line(level));
        eprintln!("+----------------------------------------------------------+");
        eprintln!();
        self.visible = true;
        Ok(())
    }

    fn update(&mut self, level: Option<AccuracyLevel>) -> Result<(), PresentationError> {
        if self.visible {
            eprintln!("{}", Self::accuracy_line(level));
        }
        Ok(())
    }

    fn hide(&mut self) -> Result<(), PresentationError> {
        if self.visible {
            eprintln!("Compass calibrated, dismissing prompt.");
            self.visible = false;
        }
        Ok(())
    }
}
