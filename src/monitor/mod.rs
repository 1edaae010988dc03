//! Accuracy monitoring core.
//!
//! This module contains:
//! - The monitor state value and the single watch slot
//! - Typed watch lifecycle events
//! - The evaluation engine that turns raw sensor readings into events and
//!   calibration-prompt transitions

pub mod engine;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use engine::{AccuracyMonitor, MonitorError};
pub use events::{CurrentAccuracyResult, WatchEvent};
pub use state::{MonitorState, Watch, WatchHandle};
