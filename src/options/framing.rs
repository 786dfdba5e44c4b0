use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::framing::FramingMode;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Framing", inline)]
#[serde(default)]
/// Framing and idle-recentering parameters.
///
/// Angles are radians, durations milliseconds.
pub struct FramingConfig {
    /// How the fitted radius treats the camera's radius limits.
    #[schemars(title = "Mode")]
    pub mode: FramingMode,
    /// Multiplier applied to the bounding-sphere radius before fitting.
    #[schemars(title = "Radius Offset", range(min = 0.5, max = 4.0), extend("step" = 0.05))]
    pub radius_offset: f32,
    /// Target elevation angle above the horizontal plane.
    #[schemars(skip)]
    pub elevation: f32,
    /// Vertical focus within the target's box (0 = bottom, 1 = top).
    #[schemars(title = "Vertical Framing", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub position_y: f32,
    /// Elevation the camera returns to after dropping below the ground
    /// plane.
    #[schemars(title = "Default Elevation", range(min = -1.5, max = 1.5), extend("step" = 0.05))]
    pub default_elevation: f32,
    /// Length of the elevation-return transition. Negative disables the
    /// return.
    #[schemars(title = "Elevation Return Time", range(min = -1.0, max = 10000.0), extend("step" = 100.0))]
    pub elevation_return_time: f64,
    /// Idle time required before the elevation return starts.
    #[schemars(title = "Elevation Return Wait", range(min = 0.0, max = 10000.0), extend("step" = 100.0))]
    pub elevation_return_wait_time: f64,
    /// Only a zoom pressed against a radius limit interrupts animation.
    #[schemars(title = "Zoom Stops Animation")]
    pub zoom_stops_animation: bool,
    /// Length of the radius transition when framing a target.
    #[schemars(title = "Framing Time", range(min = 0.0, max = 10000.0), extend("step" = 100.0))]
    pub framing_time: f64,
    /// Also transition the orbit center to the framing focus point.
    #[schemars(title = "Animate Focus Point")]
    pub animate_focus_point: bool,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            mode: FramingMode::FitFrustumSides,
            radius_offset: 1.0,
            elevation: 0.0,
            position_y: 0.5,
            default_elevation: 0.3,
            elevation_return_time: 1500.0,
            elevation_return_wait_time: 1000.0,
            zoom_stops_animation: false,
            framing_time: 1500.0,
            animate_focus_point: false,
        }
    }
}

impl FramingConfig {
    /// Whether the idle elevation return is enabled.
    #[must_use]
    pub fn returns_to_default_elevation(&self) -> bool {
        self.elevation_return_time >= 0.0
    }
}
