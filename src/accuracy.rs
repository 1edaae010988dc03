//! Accuracy level vocabulary and codecs.
//!
//! The magnetometer reports its confidence on an ordered four-step scale.
//! This module maps between the caller-facing string tokens, the native
//! integer codes the sensor service uses, and the human-facing labels and
//! colors used by the calibration prompt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered magnetometer accuracy classification.
///
/// Derived `Ord` follows declaration order: `Unreliable < Low < Medium < High`.
/// That ordering is the sole basis for the sufficiency test in the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyLevel {
    /// More than ~15 degrees of heading error
    Unreliable = 0,
    /// Less than ~15 degrees of heading error
    Low = 1,
    /// Less than ~10 degrees of heading error
    Medium = 2,
    /// Less than ~5 degrees of heading error
    High = 3,
}

impl AccuracyLevel {
    /// All levels, lowest to highest.
    pub const ALL: [AccuracyLevel; 4] = [
        AccuracyLevel::Unreliable,
        AccuracyLevel::Low,
        AccuracyLevel::Medium,
        AccuracyLevel::High,
    ];

    /// Decode a native sensor-status code. Out-of-range codes are unknown.
    pub fn from_native(code: i32) -> Option<Self> {
        match code {
            0 => Some(AccuracyLevel::Unreliable),
            1 => Some(AccuracyLevel::Low),
            2 => Some(AccuracyLevel::Medium),
            3 => Some(AccuracyLevel::High),
            _ => None,
        }
    }

    /// The native sensor-status code for this level.
    pub fn native(self) -> i32 {
        self as i32
    }

    /// Decode a caller-supplied accuracy token.
    ///
    /// Case-insensitive. A missing or unrecognized token decodes to `High`:
    /// an unknown requirement must demand the strictest accuracy, not the
    /// loosest. This never fails.
    pub fn from_text(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return AccuracyLevel::High;
        };
        match token.to_lowercase().as_str() {
            "unreliable" => AccuracyLevel::Unreliable,
            "low" => AccuracyLevel::Low,
            "medium" => AccuracyLevel::Medium,
            "high" => AccuracyLevel::High,
            _ => AccuracyLevel::High,
        }
    }

    /// The lowercase wire token for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            AccuracyLevel::Unreliable => "unreliable",
            AccuracyLevel::Low => "low",
            AccuracyLevel::Medium => "medium",
            AccuracyLevel::High => "high",
        }
    }
}

impl fmt::Display for AccuracyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire token for a possibly-unknown level. `"unknown"` is output-only:
/// it is never accepted as input by [`AccuracyLevel::from_text`].
pub fn text_of(level: Option<AccuracyLevel>) -> &'static str {
    level.map_or("unknown", AccuracyLevel::as_str)
}

/// Upper-case label for human-facing text (prompt, logs).
pub fn display_name(level: Option<AccuracyLevel>) -> &'static str {
    match level {
        Some(AccuracyLevel::High) => "HIGH",
        Some(AccuracyLevel::Medium) => "MEDIUM",
        Some(AccuracyLevel::Low) => "LOW",
        Some(AccuracyLevel::Unreliable) => "UNRELIABLE",
        None => "UNKNOWN",
    }
}

/// An RGB color from the prompt palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const ORANGE: Color = Color { r: 255, g: 165, b: 0 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GRAY: Color = Color { r: 128, g: 128, b: 128 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// ANSI truecolor foreground escape for terminal rendering.
    pub fn ansi_fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Fixed accuracy color palette used by the calibration prompt.
pub fn display_color(level: Option<AccuracyLevel>) -> Color {
    match level {
        Some(AccuracyLevel::High) => Color::GREEN,
        Some(AccuracyLevel::Medium) => Color::ORANGE,
        Some(AccuracyLevel::Low) => Color::RED,
        Some(AccuracyLevel::Unreliable) => Color::GRAY,
        None => Color::BLACK,
    }
}
