//! Typed watch lifecycle events.
//!
//! Serialized payloads use camelCase field names and lowercase accuracy
//! tokens; an unknown accuracy serializes as the string `"unknown"`, which
//! is output-only vocabulary.

use crate::accuracy::{text_of, AccuracyLevel};
use serde::{Serialize, Serializer};

fn unknown_if_none<S>(level: &Option<AccuracyLevel>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(text_of(*level))
}

/// An event delivered on a watch subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Emitted synchronously when monitoring starts.
    Started {
        #[serde(rename = "requiredAccuracy")]
        required_accuracy: AccuracyLevel,
        #[serde(rename = "currentAccuracy", serialize_with = "unknown_if_none")]
        current_accuracy: Option<AccuracyLevel>,
    },
    /// Emitted by every evaluation pass while a watch is active.
    AccuracyChanged {
        #[serde(rename = "requiredAccuracy")]
        required_accuracy: AccuracyLevel,
        #[serde(rename = "currentAccuracy", serialize_with = "unknown_if_none")]
        current_accuracy: Option<AccuracyLevel>,
        #[serde(rename = "previousAccuracy", serialize_with = "unknown_if_none")]
        previous_accuracy: Option<AccuracyLevel>,
        #[serde(rename = "isInaccurate")]
        is_inaccurate: bool,
    },
}

/// Response payload for `getCurrentAccuracy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentAccuracyResult {
    #[serde(rename = "currentAccuracy", serialize_with = "unknown_if_none")]
    pub current_accuracy: Option<AccuracyLevel>,
}
