//! Polls camera inertia and pointer state to tell whether the user is
//! driving the camera.

use crate::camera::CameraState;

/// Interaction state sampled once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionTracker {
    /// Whether a pointer button is currently held.
    pointer_down: bool,
    /// Clock reading of the last detected interaction; `-∞` means never.
    last_interaction_ms: f64,
    /// Radius observed on the previous frame.
    last_radius: Option<f32>,
}

impl Default for InteractionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionTracker {
    /// Tracker that has never seen an interaction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointer_down: false,
            last_interaction_ms: f64::NEG_INFINITY,
            last_radius: None,
        }
    }

    /// Record a pointer press or release.
    pub fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }

    /// Whether a pointer button is held.
    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Any inertial offset is non-zero, or a pointer is down.
    #[must_use]
    pub fn is_user_moving(&self, camera: &CameraState) -> bool {
        !camera.inertial.is_idle() || self.pointer_down
    }

    /// The inertial radius offset is non-zero.
    #[must_use]
    pub fn is_user_zooming(&self, camera: &CameraState) -> bool {
        camera.inertial.radius != 0.0
    }

    /// Sample this frame's radius and decide whether the current zoom input
    /// is exempt from interrupting running animations.
    ///
    /// With `zoom_stops_animation` set, only a saturated zoom is exempt: the
    /// radius did not move since the previous call while a zoom offset is
    /// present, so the camera is pressed against a radius limit and is not
    /// really moving. Otherwise every zoom is exempt.
    ///
    /// Updates the remembered radius; call exactly once per frame.
    pub fn should_animation_stop_for_interaction(
        &mut self,
        camera: &CameraState,
        zoom_stops_animation: bool,
    ) -> bool {
        let previous = self.last_radius.replace(camera.radius);
        if zoom_stops_animation {
            previous == Some(camera.radius) && self.is_user_zooming(camera)
        } else {
            self.is_user_zooming(camera)
        }
    }

    /// Record an interaction at `now_ms`.
    pub fn mark_interaction(&mut self, now_ms: f64) {
        self.last_interaction_ms = now_ms;
    }

    /// Clock reading of the last interaction (`-∞` if none).
    #[must_use]
    pub fn last_interaction_ms(&self) -> f64 {
        self.last_interaction_ms
    }

    /// Milliseconds since the last interaction (`+∞` if none).
    #[must_use]
    pub fn idle_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.last_interaction_ms
    }
}
