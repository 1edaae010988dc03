//! Presentation-thread command driver for the calibration prompt.
//!
//! The monitor's evaluation pass runs under a lock and must not execute UI
//! code. The driver gives it a fire-and-forget command queue: `show`,
//! `update`, and `hide` only enqueue, and a dedicated presentation thread
//! applies the commands to the [`PromptPresenter`] in order.

use crate::accuracy::AccuracyLevel;
use crate::prompt::presenter::{PresentationError, PromptPresenter};
use crossbeam_channel::{unbounded, Sender};
use std::thread::JoinHandle;

/// A command for the presentation thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCommand {
    Show(Option<AccuracyLevel>),
    Update(Option<AccuracyLevel>),
    Hide,
    Shutdown,
}

/// Drives a presenter on its own thread.
pub struct PromptDriver {
    sender: Sender<PromptCommand>,
    handle: Option<JoinHandle<()>>,
}

impl PromptDriver {
    /// Spawn a presentation thread around the given presenter.
    pub fn new(mut presenter: Box<dyn PromptPresenter>) -> Self {
        let (sender, receiver) = unbounded::<PromptCommand>();
        let handle = std::thread::spawn(move || {
            for command in receiver.iter() {
                let result = match command {
                    PromptCommand::Show(level) => presenter.show(level),
                    PromptCommand::Update(level) => presenter.update(level),
                    PromptCommand::Hide => presenter.hide(),
                    PromptCommand::Shutdown => break,
                };
                if let Err(e) = result {
                    // Cosmetic failure: logged, not retried
                    tracing::error!("Prompt presentation failed: {e}");
                }
            }
        });
        Self {
            sender,
            handle: Some(handle),
        }
    }

    /// Enqueue a show command.
    pub fn show(&self, level: Option<AccuracyLevel>) -> Result<(), PresentationError> {
        self.send(PromptCommand::Show(level))
    }

    /// Enqueue an update of the live accuracy line.
    pub fn update(&self, level: Option<AccuracyLevel>) -> Result<(), PresentationError> {
        self.send(PromptCommand::Update(level))
    }

    /// Enqueue a hide command.
    pub fn hide(&self) -> Result<(), PresentationError> {
        self.send(PromptCommand::Hide)
    }

    fn send(&self, command: PromptCommand) -> Result<(), PresentationError> {
        self.sender
            .send(command)
            .map_err(|_| PresentationError::Disconnected)
    }
}

impl Drop for PromptDriver {
    fn drop(&mut self) {
        let _ = self.sender.send(PromptCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
