//! Compass Accuracy Monitor - magnetometer accuracy watchdog.
//!
//! This library continuously evaluates whether the magnetometer's
//! self-reported accuracy meets a caller-chosen requirement and drives a
//! calibration-prompt lifecycle when it does not.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Compass Accuracy Monitor                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐       │
//! │  │ SensorFeed  │──▶│    Dedup    │──▶│  Evaluate   │       │
//! │  │ (readings)  │   │    gate     │   │ (vs. req.)  │       │
//! │  └─────────────┘   └─────────────┘   └──────┬──────┘       │
//! │                                             │              │
//! │                          ┌──────────────────┼──────┐       │
//! │                          ▼                         ▼       │
//! │                   ┌─────────────┐         ┌─────────────┐  │
//! │                   │ WatchEvent  │         │ Calibration │  │
//! │                   │   stream    │         │   prompt    │  │
//! │                   └─────────────┘         └─────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use compass_accuracy_monitor::{AccuracyMonitor, MonitorSettings, SensorFeed};
//!
//! let monitor = AccuracyMonitor::new(MonitorSettings::default());
//! let feed = Arc::new(SensorFeed::new());
//! monitor.connect_source(feed.clone());
//!
//! let watch = monitor.start_monitoring(Some("high"));
//! for event in watch.events.iter() {
//!     println!("{}", serde_json::to_string(&event).unwrap());
//! }
//! ```

pub mod accuracy;
pub mod config;
pub mod monitor;
pub mod prompt;
pub mod sensor;
pub mod stats;

// Re-export key types at crate root for convenience
pub use accuracy::{display_color, display_name, text_of, AccuracyLevel, Color};
pub use config::{ConfigError, MonitorSettings};
pub use monitor::{
    AccuracyMonitor, CurrentAccuracyResult, MonitorError, MonitorState, Watch, WatchEvent,
    WatchHandle,
};
pub use prompt::{
    PresentationError, PromptCommand, PromptDriver, PromptPresenter, TextPresenter,
};
pub use sensor::{
    AccuracyListener, AccuracyReading, ScriptedPlayback, SensorFeed, SensorReporter,
};
pub use stats::{MonitorStats, SharedMonitorStats, StatsSnapshot};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
