//! Camera distance from a bounding sphere and the frustum's slope.
//!
//! Pure functions. Given identical inputs they return bit-identical results;
//! no fused multiply-add or platform intrinsics are involved.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the computed radius interacts with the camera's radius limits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FramingMode {
    /// Never frame closer than the camera's lower radius limit, however
    /// small the target.
    IgnoreBoundsSize,
    /// Fit the target to the frustum sides and move the lower radius limit
    /// to just below the fitted distance.
    #[default]
    FitFrustumSides,
}

/// Tangent of the frustum half-angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumSlope {
    /// Horizontal slope.
    pub x: f32,
    /// Vertical slope.
    pub y: f32,
}

/// Frustum slopes for a vertical field of view (radians) and a viewport
/// aspect ratio expressed as height / width.
#[must_use]
pub fn frustum_slope(fovy: f32, aspect_ratio: f32) -> FrustumSlope {
    let y = (fovy / 2.0).tan();
    FrustumSlope {
        x: y / aspect_ratio,
        y,
    }
}

/// Distance at which a sphere of diameter `diagonal_length`, scaled by
/// `radius_offset`, touches the tighter of the two frustum constraints.
///
/// In [`FramingMode::IgnoreBoundsSize`] the result is raised to
/// `lower_limit`; in every mode it is capped at `upper_limit`.
#[must_use]
pub fn framing_radius(
    diagonal_length: f32,
    radius_offset: f32,
    slope: FrustumSlope,
    lower_limit: Option<f32>,
    upper_limit: Option<f32>,
    mode: FramingMode,
) -> f32 {
    let radius_without_framing = diagonal_length * 0.5;
    let radius = radius_without_framing * radius_offset;

    let horizontal = radius * (1.0 + 1.0 / (slope.x * slope.x)).sqrt();
    let vertical = radius * (1.0 + 1.0 / (slope.y * slope.y)).sqrt();
    let mut distance = horizontal.max(vertical);

    if mode == FramingMode::IgnoreBoundsSize {
        if let Some(lower) = lower_limit {
            distance = distance.max(lower);
        }
    }
    if let Some(upper) = upper_limit {
        distance = distance.min(upper);
    }
    distance
}

/// Height of the framing focus: `fraction` of the way from the bottom to
/// the top of a box whose local Y range is `min_y..max_y`, placed at
/// `world_y`.
#[must_use]
pub fn framing_target_height(
    world_y: f32,
    min_y: f32,
    max_y: f32,
    fraction: f32,
) -> f32 {
    let bottom = world_y + min_y;
    let top = world_y + max_y;
    bottom + (top - bottom) * fraction
}
