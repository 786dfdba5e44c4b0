use std::f32::consts::PI;
use std::rc::Rc;

use glam::{Mat4, Vec2, Vec3};

use crate::animation::{AnimationHandle, CameraProperty, TweenValue};
use crate::scene::{FramingTarget, Observable};

/// Inertial offsets below this magnitude snap to zero.
const INERTIA_EPSILON: f32 = 0.001;

/// Keeps beta strictly inside `(0, π)` so the orbit never flips.
const BETA_EPSILON: f32 = 0.01;

/// Per-frame motion still to be applied to the orbit, decaying with
/// inertia. Any non-zero component means the camera is being driven by the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InertialOffsets {
    /// Azimuth delta (radians per frame).
    pub alpha: f32,
    /// Polar delta (radians per frame).
    pub beta: f32,
    /// Radius delta (world units per frame, positive zooms in).
    pub radius: f32,
    /// Target pan delta in the camera's right/up plane.
    pub panning: Vec2,
}

impl InertialOffsets {
    /// Whether every component is exactly zero.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.alpha == 0.0
            && self.beta == 0.0
            && self.radius == 0.0
            && self.panning.x == 0.0
            && self.panning.y == 0.0
    }

    fn decay(&mut self, inertia: f32) {
        self.alpha = decay_component(self.alpha, inertia);
        self.beta = decay_component(self.beta, inertia);
        self.radius = decay_component(self.radius, inertia);
        self.panning.x = decay_component(self.panning.x, inertia);
        self.panning.y = decay_component(self.panning.y, inertia);
    }
}

fn decay_component(value: f32, inertia: f32) -> f32 {
    let next = value * inertia;
    if next.abs() < INERTIA_EPSILON {
        0.0
    } else {
        next
    }
}

/// Orbit parameters of an arc-rotate camera.
///
/// The camera sits on a sphere of `radius` around `target`; `alpha` is the
/// azimuth and `beta` the polar angle measured from +Y, so `beta = π/2`
/// is the horizontal plane and `beta > π/2` is below it.
#[derive(Debug, Clone)]
pub struct CameraState {
    /// Azimuth in radians.
    pub alpha: f32,
    /// Polar angle in radians.
    pub beta: f32,
    /// Distance from the eye to `target`.
    pub radius: f32,
    /// Orbit center in world space.
    pub target: Vec3,
    /// Closest allowed radius.
    pub lower_radius_limit: Option<f32>,
    /// Farthest allowed radius.
    pub upper_radius_limit: Option<f32>,
    /// Pending inertial motion.
    pub inertial: InertialOffsets,
    /// Fraction of inertial motion kept each frame.
    pub inertia: f32,
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Viewport width in physical pixels.
    pub width: u32,
    /// Viewport height in physical pixels.
    pub height: u32,
    /// Transitions queued directly on the camera by other subsystems.
    pub animations: Vec<AnimationHandle>,
    /// Mesh the camera is locked on, if any.
    pub target_mesh: Option<Rc<dyn FramingTarget>>,
}

impl CameraState {
    /// Orbit at `radius` around `target` with default projection settings.
    #[must_use]
    pub fn new(alpha: f32, beta: f32, radius: f32, target: Vec3) -> Self {
        Self {
            alpha,
            beta,
            radius,
            target,
            lower_radius_limit: None,
            upper_radius_limit: None,
            inertial: InertialOffsets::default(),
            inertia: 0.9,
            fovy: 0.8,
            width: 1280,
            height: 720,
            animations: Vec::new(),
            target_mesh: None,
        }
    }

    /// Viewport height divided by width, as used by the framing math.
    ///
    /// A degenerate viewport reads as square.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.height as f32 / self.width as f32
        }
    }

    /// Update the viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// `radius` clamped into the configured limits.
    #[must_use]
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        let mut radius = radius;
        if let Some(lower) = self.lower_radius_limit {
            radius = radius.max(lower);
        }
        if let Some(upper) = self.upper_radius_limit {
            radius = radius.min(upper);
        }
        radius
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_a, cos_a) = self.alpha.sin_cos();
        let (sin_b, cos_b) = self.beta.sin_cos();
        self.target
            + Vec3::new(cos_a * sin_b, cos_b, sin_a * sin_b) * self.radius
    }

    /// Right-handed view matrix looking from [`eye`](Self::eye) at the
    /// target.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Current value of an animatable property.
    #[must_use]
    pub fn get(&self, property: CameraProperty) -> TweenValue {
        match property {
            CameraProperty::Alpha => TweenValue::Scalar(self.alpha),
            CameraProperty::Beta => TweenValue::Scalar(self.beta),
            CameraProperty::Radius => TweenValue::Scalar(self.radius),
            CameraProperty::Target => TweenValue::Vector(self.target),
        }
    }

    /// Write an animatable property. Mismatched value kinds are ignored.
    pub fn set(&mut self, property: CameraProperty, value: TweenValue) {
        match (property, value) {
            (CameraProperty::Alpha, TweenValue::Scalar(v)) => self.alpha = v,
            (CameraProperty::Beta, TweenValue::Scalar(v)) => self.beta = v,
            (CameraProperty::Radius, TweenValue::Scalar(v)) => self.radius = v,
            (CameraProperty::Target, TweenValue::Vector(v)) => self.target = v,
            _ => log::warn!("ignoring {value:?} written to {property:?}"),
        }
    }

    /// Apply one frame of inertial motion, then enforce limits.
    fn integrate_inertia(&mut self) {
        if !self.inertial.is_idle() {
            self.alpha += self.inertial.alpha;
            self.beta += self.inertial.beta;
            self.radius -= self.inertial.radius;

            let (sin_a, cos_a) = self.alpha.sin_cos();
            let right = Vec3::new(-sin_a, 0.0, cos_a);
            self.target += right * self.inertial.panning.x
                + Vec3::Y * self.inertial.panning.y;

            self.inertial.decay(self.inertia);
        }
        self.beta = self.beta.clamp(BETA_EPSILON, PI - BETA_EPSILON);
        self.radius = self.clamp_radius(self.radius);
    }
}

/// Arc-rotate camera: orbit state plus the two channels behaviors hook.
pub struct ArcRotateCamera {
    /// Orbit and projection state.
    pub state: CameraState,
    /// Fired once per frame after inputs and inertia have been applied.
    pub on_after_check_inputs: Observable<CameraState>,
    /// Fired when [`set_target_mesh`](Self::set_target_mesh) replaces the
    /// locked mesh.
    pub on_mesh_target_changed: Observable<CameraState>,
}

impl ArcRotateCamera {
    /// Camera with no observers.
    #[must_use]
    pub fn new(state: CameraState) -> Self {
        Self {
            state,
            on_after_check_inputs: Observable::new(),
            on_mesh_target_changed: Observable::new(),
        }
    }

    /// Per-frame input step: integrate inertia, clamp to limits, then
    /// notify `on_after_check_inputs`.
    pub fn check_inputs(&mut self) {
        self.state.integrate_inertia();
        self.on_after_check_inputs.notify(&mut self.state);
    }

    /// Lock onto `mesh`, recenter on its world position and notify
    /// `on_mesh_target_changed`.
    pub fn set_target_mesh(&mut self, mesh: Rc<dyn FramingTarget>) {
        self.state.target = mesh.world_position();
        self.state.target_mesh = Some(mesh);
        self.on_mesh_target_changed.notify(&mut self.state);
    }

    /// Queue an orbit rotation.
    pub fn rotate(&mut self, delta: Vec2) {
        self.state.inertial.alpha += delta.x;
        self.state.inertial.beta += delta.y;
    }

    /// Queue a target pan.
    pub fn pan(&mut self, delta: Vec2) {
        self.state.inertial.panning += delta;
    }

    /// Queue a zoom step (positive moves closer).
    pub fn zoom(&mut self, delta: f32) {
        self.state.inertial.radius += delta;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::scene::{BoundingBox, TargetMesh};

    #[test]
    fn aspect_ratio_is_height_over_width() {
        let mut state = CameraState::new(0.0, FRAC_PI_2, 10.0, Vec3::ZERO);
        state.resize(200, 100);
        assert_eq!(state.aspect_ratio(), 0.5);
        state.resize(0, 100);
        assert_eq!(state.aspect_ratio(), 1.0);
    }

    #[test]
    fn eye_on_horizontal_plane() {
        let state = CameraState::new(0.0, FRAC_PI_2, 10.0, Vec3::ZERO);
        let eye = state.eye();
        assert!((eye - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn zoom_inertia_decays_and_respects_limits() {
        let mut state = CameraState::new(0.0, 1.0, 10.0, Vec3::ZERO);
        state.lower_radius_limit = Some(9.5);
        let mut camera = ArcRotateCamera::new(state);
        camera.zoom(1.0);

        camera.check_inputs();
        assert_eq!(camera.state.radius, 9.5);
        assert!((camera.state.inertial.radius - 0.9).abs() < 1e-6);

        for _ in 0..200 {
            camera.check_inputs();
        }
        assert_eq!(camera.state.inertial.radius, 0.0);
        assert!(camera.state.inertial.is_idle());
        assert_eq!(camera.state.radius, 9.5);
    }

    #[test]
    fn after_check_inputs_fires_every_frame() {
        let mut camera =
            ArcRotateCamera::new(CameraState::new(0.0, 1.0, 10.0, Vec3::ZERO));
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let _ = camera
            .on_after_check_inputs
            .add(move |_| seen.set(seen.get() + 1));
        camera.check_inputs();
        camera.check_inputs();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn set_target_mesh_recenters_and_notifies() {
        let mut camera =
            ArcRotateCamera::new(CameraState::new(0.0, 1.0, 10.0, Vec3::ZERO));
        let notified = Rc::new(Cell::new(false));
        let flag = Rc::clone(&notified);
        let _ = camera.on_mesh_target_changed.add(move |state| {
            flag.set(state.target_mesh.is_some());
        });

        let mesh = TargetMesh::new(
            "box",
            BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
            Vec3::new(0.0, 4.0, 0.0),
        );
        camera.set_target_mesh(Rc::new(mesh));
        assert!(notified.get());
        assert_eq!(camera.state.target, Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn property_access_round_trips() {
        let mut state = CameraState::new(0.0, 1.0, 10.0, Vec3::ZERO);
        state.set(CameraProperty::Radius, TweenValue::Scalar(4.0));
        state.set(CameraProperty::Target, TweenValue::Vector(Vec3::ONE));
        // Wrong kind is dropped.
        state.set(CameraProperty::Beta, TweenValue::Vector(Vec3::ONE));
        assert_eq!(state.get(CameraProperty::Radius), TweenValue::Scalar(4.0));
        assert_eq!(state.target, Vec3::ONE);
        assert_eq!(state.beta, 1.0);
    }
}
