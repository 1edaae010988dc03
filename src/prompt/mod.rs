//! Calibration prompt driver.
//!
//! When the monitor decides the compass is out of tolerance, it issues
//! show/update/hide commands for a modal calibration prompt. Rendering is
//! behind the [`PromptPresenter`] trait; the [`PromptDriver`] marshals
//! commands onto a dedicated presentation thread so the evaluation path
//! never blocks on (or crashes with) the UI.

pub mod driver;
pub mod presenter;
pub mod text;

// Re-export commonly used types
pub use driver::{PromptCommand, PromptDriver};
pub use presenter::{PresentationError, PromptPresenter};
pub use text::TextPresenter;

/// Title shown on the calibration prompt.
pub const PROMPT_TITLE: &str = "Compass calibration required";

/// Instruction text shown on the calibration prompt.
pub const CALIBRATION_HINT: &str =
    "Tilt and move your phone 3 times in a figure-of-eight motion like this.";
