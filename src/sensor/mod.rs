//! Sensor seam for the compass accuracy monitor.
//!
//! The OS sensor service is an external collaborator; this module models its
//! boundary as a channel hub ([`SensorFeed`]) that any reading producer can
//! feed through a cloneable [`SensorReporter`]. A scripted playback producer
//! is included for demos and tests.

pub mod feed;
pub mod scripted;
pub mod types;

// Re-export commonly used types
pub use feed::{AccuracyListener, FeedError, SensorFeed, SensorReporter};
pub use scripted::{parse_script, ScriptError, ScriptStep, ScriptedPlayback};
pub use types::AccuracyReading;
