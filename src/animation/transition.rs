//! Transition template: the easing curve and sampling rate shared by every
//! transition a behavior starts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Describes how a property transition is sampled.
///
/// A behavior copies [`TransitionTemplate::DEFAULT`] when it is constructed
/// and keeps its own copy afterwards, so reconfiguring one instance never
/// affects another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
pub struct TransitionTemplate {
    /// Keyframe rate used to convert durations to frame counts.
    #[schemars(title = "Frame Rate", range(min = 1.0, max = 240.0), extend("step" = 1.0))]
    pub frame_rate: f32,
    /// Easing curve applied to normalized progress.
    pub easing: EasingFunction,
}

impl TransitionTemplate {
    /// Process-wide default: exponential ease-in-out at 60 frames/s.
    pub const DEFAULT: TransitionTemplate = TransitionTemplate {
        frame_rate: 60.0,
        easing: EasingFunction::DEFAULT,
    };

    /// Same template with a different easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Last keyframe of a transition lasting `duration_ms`.
    #[must_use]
    pub fn end_frame(&self, duration_ms: f64) -> f64 {
        f64::from(self.frame_rate) * duration_ms.max(0.0) / 1000.0
    }

    /// Keyframe reached `elapsed_ms` after the start.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: f64) -> f64 {
        f64::from(self.frame_rate) * elapsed_ms.max(0.0) / 1000.0
    }
}

impl Default for TransitionTemplate {
    fn default() -> Self {
        Self::DEFAULT
    }
}
