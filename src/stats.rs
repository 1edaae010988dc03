//! Monitor statistics.
//!
//! Atomic counters describing what the monitor has seen and done in the
//! current process. Purely observational; nothing here feeds back into the
//! evaluation logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for the current monitor session.
#[derive(Debug)]
pub struct MonitorStats {
    /// Readings delivered by the sensor seam
    readings_observed: AtomicU64,
    /// Readings dropped by the dedup gate
    readings_deduped: AtomicU64,
    /// Watch events actually delivered to a subscriber
    events_emitted: AtomicU64,
    /// Calibration prompts shown
    prompts_shown: AtomicU64,
    /// Session start time
    session_start: DateTime<Utc>,
}

impl MonitorStats {
    /// Create a new stats block.
    pub fn new() -> Self {
        Self {
            readings_observed: AtomicU64::new(0),
            readings_deduped: AtomicU64::new(0),
            events_emitted: AtomicU64::new(0),
            prompts_shown: AtomicU64::new(0),
            session_start: Utc::now(),
        }
    }

    /// Record a reading delivered by the sensor seam.
    pub fn record_reading_observed(&self) {
        self.readings_observed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a reading dropped by the dedup gate.
    pub fn record_reading_deduped(&self) {
        self.readings_deduped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a watch event delivered to a subscriber.
    pub fn record_event_emitted(&self) {
        self.events_emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a calibration prompt being shown.
    pub fn record_prompt_shown(&self) {
        self.prompts_shown.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current statistics.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            readings_observed: self.readings_observed.load(Ordering::Relaxed),
            readings_deduped: self.readings_deduped.load(Ordering::Relaxed),
            events_emitted: self.events_emitted.load(Ordering::Relaxed),
            prompts_shown: self.prompts_shown.load(Ordering::Relaxed),
            session_start: self.session_start,
            session_duration_secs: (Utc::now() - self.session_start).num_seconds().max(0) as u64,
        }
    }

    /// Get a summary string for display.
    pub fn summary(&self) -> String {
        let stats = self.stats();
        format!(
            "Monitor Statistics:\n\
             - Readings observed: {}\n\
             - Readings deduplicated: {}\n\
             - Watch events emitted: {}\n\
             - Calibration prompts shown: {}\n\
             - Session duration: {} seconds",
            stats.readings_observed,
            stats.readings_deduped,
            stats.events_emitted,
            stats.prompts_shown,
            stats.session_duration_secs
        )
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.readings_observed.store(0, Ordering::Relaxed);
        self.readings_deduped.store(0, Ordering::Relaxed);
        self.events_emitted.store(0, Ordering::Relaxed);
        self.prompts_shown.store(0, Ordering::Relaxed);
    }
}

impl Default for MonitorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of monitor statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub readings_observed: u64,
    pub readings_deduped: u64,
    pub events_emitted: u64,
    pub prompts_shown: u64,
    pub session_start: DateTime<Utc>,
    pub session_duration_secs: u64,
}

/// Thread-safe shared stats block.
pub type SharedMonitorStats = Arc<MonitorStats>;
