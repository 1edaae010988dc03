//! Raw accuracy readings as delivered by the sensor seam.

use crate::accuracy::AccuracyLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single "magnetometer accuracy reported" event.
///
/// Carries the native sensor-status code rather than a decoded level so the
/// seam can pass through values the current vocabulary does not know; the
/// monitor decodes and treats out-of-range codes as unknown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AccuracyReading {
    /// Native sensor-status code (0..=3 for the known scale)
    pub native_accuracy: i32,
    /// Timestamp when the reading was reported
    pub timestamp: DateTime<Utc>,
}

impl AccuracyReading {
    /// Create a reading from a raw native code, stamped now.
    pub fn from_native(native_accuracy: i32) -> Self {
        Self {
            native_accuracy,
            timestamp: Utc::now(),
        }
    }

    /// Create a reading for a known level, stamped now.
    pub fn new(level: AccuracyLevel) -> Self {
        Self::from_native(level.native())
    }

    /// Decode the native code; `None` for codes outside the known scale.
    pub fn level(&self) -> Option<AccuracyLevel> {
        AccuracyLevel::from_native(self.native_accuracy)
    }
}
