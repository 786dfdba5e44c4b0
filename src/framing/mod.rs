//! Camera framing and idle elevation recentering.
//!
//! - [`geometry`] turns a bounding sphere and the frustum slope into a
//!   camera radius
//! - [`interaction`] decides, once per frame, whether the user is driving
//!   the camera
//! - [`FramingBehavior`] is the state machine hosts attach to a camera

mod behavior;
mod controller;
pub mod geometry;
pub mod interaction;

pub use behavior::{CameraBehavior, FramingBehavior};
pub use controller::{FramingPhase, ZoomRequest};
pub use geometry::{
    framing_radius, framing_target_height, frustum_slope, FramingMode,
    FrustumSlope,
};
pub use interaction::InteractionTracker;
