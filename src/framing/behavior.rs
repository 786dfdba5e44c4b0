//! Host-facing framing behavior: attach/detach lifecycle, explicit zoom
//! entry points and configuration accessors.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::controller::{
    Attachment, FramingController, FramingPhase, ObserverHandles, ZoomRequest,
};
use super::geometry::FramingMode;
use crate::animation::TransitionTemplate;
use crate::camera::{ArcRotateCamera, CameraState};
use crate::error::FramingError;
use crate::options::{FramingConfig, FramingOptions};
use crate::scene::{BoundingBox, FramingTarget, PointerEvent, Scene};

/// A behavior that plugs into an [`ArcRotateCamera`] through its observer
/// channels.
pub trait CameraBehavior {
    /// Name for logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Register with `camera` and `scene`.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::AlreadyAttached`] when the behavior is
    /// already attached to a camera.
    fn attach(
        &self,
        camera: &ArcRotateCamera,
        scene: &Scene,
    ) -> Result<(), FramingError>;

    /// Unregister from `camera` and `scene`, cancelling anything in flight.
    fn detach(&self, camera: &mut ArcRotateCamera, scene: &Scene);
}

/// Frames target meshes and recenters the camera above the ground plane
/// after the user has been idle.
///
/// Cheap to clone; clones share the same state. Observer closures hold
/// only weak references, so dropping every clone stops the behavior even
/// without [`detach`](CameraBehavior::detach).
#[derive(Clone)]
pub struct FramingBehavior {
    controller: Rc<RefCell<FramingController>>,
}

impl Default for FramingBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FramingBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let controller = self.controller.borrow();
        f.debug_struct("FramingBehavior")
            .field("config", &controller.config)
            .field("attached", &controller.is_attached())
            .finish_non_exhaustive()
    }
}

impl FramingBehavior {
    /// Behavior name.
    pub const NAME: &'static str = "Framing";

    /// Behavior with default configuration and the default transition.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(FramingConfig::default(), TransitionTemplate::DEFAULT)
    }

    /// Behavior with `config` and the default transition.
    #[must_use]
    pub fn with_config(config: FramingConfig) -> Self {
        Self::with_options(config, TransitionTemplate::DEFAULT)
    }

    /// Behavior with the default configuration and a custom transition.
    #[must_use]
    pub fn with_template(template: TransitionTemplate) -> Self {
        Self::with_options(FramingConfig::default(), template)
    }

    /// Behavior configured from loaded options.
    #[must_use]
    pub fn from_options(options: &FramingOptions) -> Self {
        Self::with_options(options.framing, options.transition)
    }

    fn with_options(config: FramingConfig, template: TransitionTemplate) -> Self {
        let controller = Rc::new_cyclic(|this| {
            RefCell::new(FramingController::new(this.clone(), config, template))
        });
        Self { controller }
    }

    /// Whether the behavior is attached to a camera.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.controller.borrow().is_attached()
    }

    /// Frame `target`: transition the radius so it fits the view.
    ///
    /// Returns `false` and starts nothing when detached or when the framing
    /// height is not finite.
    pub fn zoom_on_mesh(
        &self,
        camera: &mut CameraState,
        target: &dyn FramingTarget,
        request: ZoomRequest,
    ) -> bool {
        self.controller
            .borrow_mut()
            .zoom_on_mesh(camera, target, request)
    }

    /// Frame a world-space box. The box center's X/Z is the anchor when
    /// the request focuses on the target.
    pub fn zoom_on_bounding_box(
        &self,
        camera: &mut CameraState,
        world_bounds: &BoundingBox,
        request: ZoomRequest,
    ) -> bool {
        self.controller
            .borrow_mut()
            .zoom_on_bounding_box(camera, world_bounds, request)
    }

    /// Cancel every transition this behavior started, plus the camera's
    /// queued ones. Idempotent.
    pub fn stop_all_animations(&self, camera: &mut CameraState) {
        self.controller.borrow_mut().stop_all_animations(camera);
    }

    /// Whether the user is driving the camera right now.
    #[must_use]
    pub fn is_user_moving(&self, camera: &CameraState) -> bool {
        self.controller.borrow().is_user_moving(camera)
    }

    /// Clock reading of the last detected interaction; `None` when
    /// detached.
    #[must_use]
    pub fn last_interaction_ms(&self) -> Option<f64> {
        self.controller.borrow().last_interaction_ms()
    }

    /// Current state-machine phase.
    #[must_use]
    pub fn phase(&self) -> FramingPhase {
        self.controller.borrow().phase()
    }

    /// Whether an elevation return holds the lock.
    #[must_use]
    pub fn is_elevation_return_active(&self) -> bool {
        self.controller.borrow().is_elevation_return_active()
    }

    // -- Configuration ----------------------------------------------------

    /// Snapshot of the configuration.
    #[must_use]
    pub fn config(&self) -> FramingConfig {
        self.controller.borrow().config
    }

    /// Replace the whole configuration.
    pub fn set_config(&self, config: FramingConfig) {
        self.controller.borrow_mut().config = config;
    }

    /// Replace configuration and transition from loaded options.
    pub fn apply_options(&self, options: &FramingOptions) {
        let mut controller = self.controller.borrow_mut();
        controller.config = options.framing;
        controller.template = options.transition;
    }

    /// Current configuration and transition as options.
    #[must_use]
    pub fn options(&self) -> FramingOptions {
        let controller = self.controller.borrow();
        FramingOptions {
            framing: controller.config,
            transition: controller.template,
        }
    }

    /// This instance's transition template.
    #[must_use]
    pub fn transition_template(&self) -> TransitionTemplate {
        self.controller.borrow().template
    }

    /// Replace this instance's transition template. Other instances keep
    /// theirs.
    pub fn set_transition_template(&self, template: TransitionTemplate) {
        self.controller.borrow_mut().template = template;
    }

    /// Framing mode.
    #[must_use]
    pub fn mode(&self) -> FramingMode {
        self.config().mode
    }

    /// Set the framing mode.
    pub fn set_mode(&self, mode: FramingMode) {
        self.controller.borrow_mut().config.mode = mode;
    }

    /// Radius offset factor.
    #[must_use]
    pub fn radius_offset(&self) -> f32 {
        self.config().radius_offset
    }

    /// Set the radius offset factor.
    pub fn set_radius_offset(&self, radius_offset: f32) {
        self.controller.borrow_mut().config.radius_offset = radius_offset;
    }

    /// Stored target elevation.
    #[must_use]
    pub fn elevation(&self) -> f32 {
        self.config().elevation
    }

    /// Set the stored target elevation.
    pub fn set_elevation(&self, elevation: f32) {
        self.controller.borrow_mut().config.elevation = elevation;
    }

    /// Vertical framing fraction.
    #[must_use]
    pub fn position_y(&self) -> f32 {
        self.config().position_y
    }

    /// Set the vertical framing fraction.
    pub fn set_position_y(&self, position_y: f32) {
        self.controller.borrow_mut().config.position_y = position_y;
    }

    /// Elevation restored after the camera drops below the ground plane.
    #[must_use]
    pub fn default_elevation(&self) -> f32 {
        self.config().default_elevation
    }

    /// Set the default elevation.
    pub fn set_default_elevation(&self, default_elevation: f32) {
        self.controller.borrow_mut().config.default_elevation = default_elevation;
    }

    /// Elevation-return duration; negative disables the return.
    #[must_use]
    pub fn elevation_return_time(&self) -> f64 {
        self.config().elevation_return_time
    }

    /// Set the elevation-return duration.
    pub fn set_elevation_return_time(&self, ms: f64) {
        self.controller.borrow_mut().config.elevation_return_time = ms;
    }

    /// Idle time before the elevation return starts.
    #[must_use]
    pub fn elevation_return_wait_time(&self) -> f64 {
        self.config().elevation_return_wait_time
    }

    /// Set the idle wait before the elevation return.
    pub fn set_elevation_return_wait_time(&self, ms: f64) {
        self.controller.borrow_mut().config.elevation_return_wait_time = ms;
    }

    /// Whether only saturated zooms interrupt animation.
    #[must_use]
    pub fn zoom_stops_animation(&self) -> bool {
        self.config().zoom_stops_animation
    }

    /// Set the zoom-stops-animation flag.
    pub fn set_zoom_stops_animation(&self, flag: bool) {
        self.controller.borrow_mut().config.zoom_stops_animation = flag;
    }

    /// Framing transition duration.
    #[must_use]
    pub fn framing_time(&self) -> f64 {
        self.config().framing_time
    }

    /// Set the framing transition duration.
    pub fn set_framing_time(&self, ms: f64) {
        self.controller.borrow_mut().config.framing_time = ms;
    }

    fn weak(&self) -> Weak<RefCell<FramingController>> {
        Rc::downgrade(&self.controller)
    }
}

impl CameraBehavior for FramingBehavior {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn attach(
        &self,
        camera: &ArcRotateCamera,
        scene: &Scene,
    ) -> Result<(), FramingError> {
        if self.is_attached() {
            return Err(FramingError::AlreadyAttached);
        }

        let weak = self.weak();
        let pre_pointer = scene.on_pre_pointer.add(move |event: &mut PointerEvent| {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().handle_pointer(event);
            }
        });

        let weak = self.weak();
        let target_changed =
            camera.on_mesh_target_changed.add(move |state: &mut CameraState| {
                let (Some(controller), Some(mesh)) =
                    (weak.upgrade(), state.target_mesh.clone())
                else {
                    return;
                };
                let _ = controller.borrow_mut().zoom_on_mesh(
                    state,
                    mesh.as_ref(),
                    ZoomRequest::default(),
                );
            });

        let weak = self.weak();
        let after_check_inputs =
            camera.on_after_check_inputs.add(move |state: &mut CameraState| {
                if let Some(controller) = weak.upgrade() {
                    controller.borrow_mut().tick(state);
                }
            });

        let observers = ObserverHandles {
            pre_pointer,
            target_changed,
            after_check_inputs,
        };
        self.controller.borrow_mut().attach(Attachment::new(
            scene.clock(),
            scene.animation_engine(),
            observers,
        ));
        log::info!("{} behavior attached", Self::NAME);
        Ok(())
    }

    fn detach(&self, camera: &mut ArcRotateCamera, scene: &Scene) {
        let Some(attachment) =
            self.controller.borrow_mut().detach(&mut camera.state)
        else {
            log::warn!("{} behavior detached while not attached", Self::NAME);
            return;
        };
        let observers = attachment.observers;
        let _ = scene.on_pre_pointer.remove(observers.pre_pointer);
        let _ = camera.on_mesh_target_changed.remove(observers.target_changed);
        let _ = camera
            .on_after_check_inputs
            .remove(observers.after_check_inputs);
        log::info!("{} behavior detached", Self::NAME);
    }
}
