//! Monitor state and the single watch subscription slot.

use crate::accuracy::AccuracyLevel;
use crate::monitor::events::WatchEvent;
use crossbeam_channel::{Receiver, Sender};
use uuid::Uuid;

/// The monitor's mutable state, always mutated under one lock.
///
/// `is_inaccurate` is recomputed in full from the requirement and the
/// current accuracy on every evaluation pass; it is never patched
/// incrementally.
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    /// Last accuracy level observed; `None` until the sensor first reports
    pub previous_accuracy: Option<AccuracyLevel>,
    /// Result of the last evaluation pass
    pub is_inaccurate: bool,
    /// Whether a calibration prompt has been shown for the current
    /// continuous inaccurate episode
    pub has_shown_prompt: bool,
    /// Whether a calibration prompt is currently displayed
    pub prompt_visible: bool,
}

impl MonitorState {
    /// Clear episode history (watch start, watch stop, episode end).
    pub fn reset_episode(&mut self) {
        self.has_shown_prompt = false;
    }
}

/// The single outstanding watch subscription.
///
/// At most one watch exists at a time; starting a new one replaces the slot
/// and the old receiver simply disconnects without a terminal event.
#[derive(Debug, Clone)]
pub struct Watch {
    /// Opaque subscription identifier
    pub id: Uuid,
    /// Minimum acceptable accuracy for the duration of this watch
    pub required_accuracy: AccuracyLevel,
    /// Emitter for this watch's lifecycle events
    pub sender: Sender<WatchEvent>,
}

/// Caller-side handle to an active watch.
#[derive(Debug)]
pub struct WatchHandle {
    /// Opaque subscription identifier
    pub id: Uuid,
    /// Stream of lifecycle events for this watch
    pub events: Receiver<WatchEvent>,
}
