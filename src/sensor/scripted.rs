//! Scripted accuracy playback for demos and tests.
//!
//! Plays a sequence of accuracy levels through a [`SensorReporter`] on its
//! own thread, holding each level for a configured duration. Scripts are
//! written as comma-separated `level[:seconds]` steps, e.g.
//! `"low:2,medium:1,high"`.

use crate::accuracy::AccuracyLevel;
use crate::sensor::feed::SensorReporter;
use crate::sensor::types::AccuracyReading;
use std::thread::JoinHandle;
use std::time::Duration;

/// One step of a playback script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    pub level: AccuracyLevel,
    pub hold: Duration,
}

/// Errors parsing a playback script.
#[derive(Debug)]
pub enum ScriptError {
    Empty,
    BadHold(String),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::Empty => write!(f, "Script contains no steps"),
            ScriptError::BadHold(s) => write!(f, "Invalid hold duration: {s}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parse a `level[:seconds]` comma-separated script. Hold defaults to 1s.
///
/// Level tokens follow the codec's rules, so an unrecognized token plays
/// back as `high` rather than failing.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for part in script.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (token, hold) = match part.split_once(':') {
            Some((token, secs)) => {
                let secs: f64 = secs
                    .trim()
                    .parse()
                    .map_err(|_| ScriptError::BadHold(secs.to_string()))?;
                (token, Duration::from_secs_f64(secs))
            }
            None => (part, Duration::from_secs(1)),
        };
        steps.push(ScriptStep {
            level: AccuracyLevel::from_text(Some(token)),
            hold,
        });
    }
    if steps.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(steps)
}

/// Plays a script through a reporter on a background thread.
pub struct ScriptedPlayback {
    handle: Option<JoinHandle<()>>,
}

impl ScriptedPlayback {
    /// Start playing the steps. Each level is reported immediately, then
    /// held for its duration before the next step.
    pub fn start(reporter: SensorReporter, steps: Vec<ScriptStep>) -> Self {
        let handle = std::thread::spawn(move || {
            for step in steps {
                if reporter.report(AccuracyReading::new(step.level)).is_err() {
                    tracing::debug!("sensor feed gone, stopping playback");
                    return;
                }
                std::thread::sleep(step.hold);
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Check whether the script has finished playing.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Block until the script has finished playing.
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
