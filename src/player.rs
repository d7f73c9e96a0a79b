// SPDX-License-Identifier: MPL-2.0
//! Playhead state and keyboard seek support.
//!
//! The playhead stands in for the playback engine's position register:
//! seek handlers apply a relative adjustment and the playhead itself owns
//! the clamping at its bounds, mirroring how a native media element clamps
//! `currentTime` regardless of what callers request.

use crate::config::DEFAULT_SEEK_STEP_SECS;

/// Smallest accepted keyboard seek step, in seconds.
pub const MIN_SEEK_STEP_SECS: f32 = 1.0;
/// Largest accepted keyboard seek step, in seconds.
pub const MAX_SEEK_STEP_SECS: f32 = 60.0;

/// Validated arrow-key seek step.
///
/// Persisted configs cannot request nonsensical increments; values outside
/// the supported range are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep(f32);

impl SeekStep {
    #[must_use]
    pub fn new(secs: f32) -> Self {
        // NaN and infinities from a hand-edited config fall back to the
        // default instead of poisoning every subsequent seek.
        if !secs.is_finite() {
            return Self(DEFAULT_SEEK_STEP_SECS);
        }
        Self(secs.clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self::new(DEFAULT_SEEK_STEP_SECS)
    }
}

/// Direction of a relative seek requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Backward,
    Forward,
}

impl SeekDirection {
    /// Signed seek delta in seconds for this direction.
    #[must_use]
    pub fn signed_step(self, step: SeekStep) -> f64 {
        match self {
            SeekDirection::Backward => -f64::from(step.value()),
            SeekDirection::Forward => f64::from(step.value()),
        }
    }
}

/// Current playback position, with optional known duration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Playhead {
    position_secs: f64,
    duration_secs: Option<f64>,
}

impl Playhead {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Playhead with a known total duration; seeks past the end clamp to it.
    #[must_use]
    pub fn with_duration(duration_secs: f64) -> Self {
        Self {
            position_secs: 0.0,
            duration_secs: Some(duration_secs),
        }
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Applies a relative adjustment, clamping at the playhead's own bounds.
    pub fn seek_by(&mut self, delta_secs: f64) {
        let mut target = self.position_secs + delta_secs;
        if target < 0.0 {
            target = 0.0;
        }
        if let Some(duration) = self.duration_secs {
            if target > duration {
                target = duration;
            }
        }
        self.position_secs = target;
    }
}

/// Formats a position in seconds as `m:ss` (or `h:mm:ss` past an hour).
#[must_use]
pub fn format_timestamp(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
