//! Presenter seam for the calibration prompt.

use crate::accuracy::AccuracyLevel;

/// Failure while showing, updating, or hiding the prompt.
///
/// Presentation failures are cosmetic: the monitor logs them and keeps
/// emitting accuracy events. They are never retried.
#[derive(Debug)]
pub enum PresentationError {
    /// The presentation thread is gone
    Disconnected,
    /// The presenter itself failed to render
    RenderFailed(String),
}

impl std::fmt::Display for PresentationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresentationError::Disconnected => {
                write!(f, "Prompt presentation thread is disconnected")
            }
            PresentationError::RenderFailed(msg) => write!(f, "Prompt render failed: {msg}"),
        }
    }
}

impl std::error::Error for PresentationError {}

/// Renders the calibration prompt. All methods are invoked on the driver's
/// presentation thread, never on the evaluation path.
pub trait PromptPresenter: Send {
    /// Display the prompt with the given current accuracy.
    fn show(&mut self, level: Option<AccuracyLevel>) -> Result<(), PresentationError>;

    /// Refresh the live accuracy line of an already-visible prompt.
    fn update(&mut self, level: Option<AccuracyLevel>) -> Result<(), PresentationError>;

    /// Dismiss the prompt if visible.
    fn hide(&mut self) -> Result<(), PresentationError>;
}
