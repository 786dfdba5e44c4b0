//! Framing state machine.
//!
//! Two entry points drive it: the per-frame tick (after camera inputs) and
//! target changes. Every frame the interaction gate runs before the idle
//! elevation-return gate, so fresh user input always wins over a pending
//! auto-return.

use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;
use std::rc::{Rc, Weak};

use glam::Vec3;

use super::geometry::{self, FramingMode};
use super::interaction::InteractionTracker;
use crate::animation::{
    AnimationCoordinator, AnimationEngine, CameraProperty, CompletionCallback,
    TransitionTemplate, TweenValue,
};
use crate::camera::CameraState;
use crate::options::FramingConfig;
use crate::scene::{
    BoundingBox, FramingTarget, ObserverHandle, PointerEvent, PointerEventKind,
};
use crate::util::clock::Clock;

/// Gap kept between the fitted radius and the lower radius limit in
/// [`FramingMode::FitFrustumSides`], so the camera never rests exactly on
/// its own limit.
const LOWER_LIMIT_MARGIN: f32 = 0.1;

/// What the controller is currently animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramingPhase {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A radius transition toward a fitted distance is running.
    Framing,
    /// The polar angle is returning to the default elevation.
    ReturningToDefaultElevation,
}

/// Parameters of one framing request.
///
/// Defaults: radius fitted to the target, lower limit untouched, vertical
/// framing from the config, focus on the world origin's X/Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRequest {
    /// Explicit radius, bypassing the fit.
    pub radius: Option<f32>,
    /// Also set the lower radius limit to the resolved radius.
    pub apply_to_lower_limit: bool,
    /// Vertical framing fraction; `None` uses `position_y` from the config.
    pub framing_fraction: Option<f32>,
    /// Focus on X/Z = 0 instead of the target's own X/Z.
    pub focus_on_origin_xz: bool,
}

impl Default for ZoomRequest {
    fn default() -> Self {
        Self {
            radius: None,
            apply_to_lower_limit: false,
            framing_fraction: None,
            focus_on_origin_xz: true,
        }
    }
}

impl ZoomRequest {
    /// Request an explicit radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Write the resolved radius into the lower radius limit.
    #[must_use]
    pub fn applying_to_lower_limit(mut self) -> Self {
        self.apply_to_lower_limit = true;
        self
    }

    /// Override the vertical framing fraction.
    #[must_use]
    pub fn with_framing_fraction(mut self, fraction: f32) -> Self {
        self.framing_fraction = Some(fraction);
        self
    }

    /// Focus on the target's own X/Z.
    #[must_use]
    pub fn focusing_on_target_xz(mut self) -> Self {
        self.focus_on_origin_xz = false;
        self
    }
}

/// Size and placement of whatever is being framed.
#[derive(Debug, Clone, Copy)]
struct FramingSubject {
    diagonal: f32,
    anchor: Vec3,
    min_y: f32,
    max_y: f32,
}

/// Observer registrations made on attach.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObserverHandles {
    pub(crate) pre_pointer: ObserverHandle,
    pub(crate) target_changed: ObserverHandle,
    pub(crate) after_check_inputs: ObserverHandle,
}

/// State that exists only while attached to a camera.
pub(crate) struct Attachment {
    clock: Rc<dyn Clock>,
    animations: AnimationCoordinator,
    interaction: InteractionTracker,
    pub(crate) observers: ObserverHandles,
}

impl Attachment {
    pub(crate) fn new(
        clock: Rc<dyn Clock>,
        engine: Rc<dyn AnimationEngine>,
        observers: ObserverHandles,
    ) -> Self {
        Self {
            clock,
            animations: AnimationCoordinator::new(engine),
            interaction: InteractionTracker::new(),
            observers,
        }
    }
}

/// The framing state machine behind
/// [`FramingBehavior`](super::FramingBehavior).
pub(crate) struct FramingController {
    pub(crate) config: FramingConfig,
    pub(crate) template: TransitionTemplate,
    attachment: Option<Attachment>,
    /// Handle to ourselves, captured by completion callbacks.
    this: Weak<RefCell<FramingController>>,
}

impl FramingController {
    pub(crate) fn new(
        this: Weak<RefCell<FramingController>>,
        config: FramingConfig,
        template: TransitionTemplate,
    ) -> Self {
        Self {
            config,
            template,
            attachment: None,
            this,
        }
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub(crate) fn attach(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    /// Drop the attachment, cancelling everything it had in flight.
    pub(crate) fn detach(&mut self, camera: &mut CameraState) -> Option<Attachment> {
        let mut attachment = self.attachment.take()?;
        attachment.animations.cancel_all(camera);
        Some(attachment)
    }

    pub(crate) fn handle_pointer(&mut self, event: &PointerEvent) {
        let Some(attachment) = self.attachment.as_mut() else {
            return;
        };
        match event.kind {
            PointerEventKind::Down => attachment.interaction.set_pointer_down(true),
            PointerEventKind::Up => attachment.interaction.set_pointer_down(false),
            PointerEventKind::Move | PointerEventKind::Wheel => {}
        }
    }

    pub(crate) fn is_user_moving(&self, camera: &CameraState) -> bool {
        self.attachment
            .as_ref()
            .is_some_and(|a| a.interaction.is_user_moving(camera))
    }

    pub(crate) fn last_interaction_ms(&self) -> Option<f64> {
        self.attachment
            .as_ref()
            .map(|a| a.interaction.last_interaction_ms())
    }

    pub(crate) fn is_elevation_return_active(&self) -> bool {
        self.attachment
            .as_ref()
            .is_some_and(|a| a.animations.is_elevation_return_active())
    }

    #[cfg(test)]
    pub(crate) fn radius_transitions(&self) -> Vec<crate::animation::AnimationHandle> {
        self.attachment
            .as_ref()
            .map_or_else(Vec::new, |a| a.animations.running(CameraProperty::Radius))
    }

    pub(crate) fn phase(&self) -> FramingPhase {
        let Some(attachment) = self.attachment.as_ref() else {
            return FramingPhase::Idle;
        };
        if attachment.animations.is_elevation_return_active() {
            FramingPhase::ReturningToDefaultElevation
        } else if attachment.animations.is_animating(CameraProperty::Radius) {
            FramingPhase::Framing
        } else {
            FramingPhase::Idle
        }
    }

    /// Per-frame decision step.
    pub(crate) fn tick(&mut self, camera: &mut CameraState) {
        let on_returned = self.elevation_return_callback();
        let Some(attachment) = self.attachment.as_mut() else {
            return;
        };
        attachment.animations.prune_finished();
        let now = attachment.clock.now_ms();

        // Sampled every frame, before anything else reads the radius.
        let zoom_exempt = attachment
            .interaction
            .should_animation_stop_for_interaction(
                camera,
                self.config.zoom_stops_animation,
            );
        if attachment.interaction.is_user_moving(camera) && !zoom_exempt {
            attachment.interaction.mark_interaction(now);
            if !attachment.animations.is_empty()
                || attachment.animations.is_elevation_return_active()
            {
                log::debug!("user interaction, cancelling camera transitions");
            }
            attachment.animations.cancel_all(camera);
        }

        if !self.config.returns_to_default_elevation()
            || attachment.animations.is_elevation_return_active()
            || camera.beta <= FRAC_PI_2
            || attachment.interaction.idle_ms(now)
                < self.config.elevation_return_wait_time
        {
            return;
        }

        attachment.animations.cancel_all(camera);
        attachment.animations.lock_elevation_return();
        let default_beta = FRAC_PI_2 - self.config.default_elevation;
        log::debug!(
            "camera below ground (beta {:.3}), returning to {default_beta:.3}",
            camera.beta
        );
        let _ = attachment.animations.start_transition(
            camera,
            CameraProperty::Beta,
            TweenValue::Scalar(default_beta),
            self.config.elevation_return_time,
            &self.template,
            Some(on_returned),
        );
    }

    /// Releases the lock and clears anything queued alongside the return.
    fn elevation_return_callback(&self) -> CompletionCallback {
        let this = self.this.clone();
        Box::new(move |camera: &mut CameraState| {
            if let Some(controller) = this.upgrade() {
                controller.borrow_mut().finish_elevation_return(camera);
            }
        })
    }

    fn finish_elevation_return(&mut self, camera: &mut CameraState) {
        if let Some(attachment) = self.attachment.as_mut() {
            attachment.animations.release_elevation_return();
            attachment.animations.cancel_all(camera);
        }
    }

    pub(crate) fn stop_all_animations(&mut self, camera: &mut CameraState) {
        if let Some(attachment) = self.attachment.as_mut() {
            attachment.animations.cancel_all(camera);
        }
    }

    pub(crate) fn zoom_on_mesh(
        &mut self,
        camera: &mut CameraState,
        target: &dyn FramingTarget,
        request: ZoomRequest,
    ) -> bool {
        let bounds = target.bounding_box();
        let subject = FramingSubject {
            diagonal: target.bounding_diagonal_length(),
            anchor: target.world_position(),
            min_y: bounds.minimum.y,
            max_y: bounds.maximum.y,
        };
        self.frame(camera, subject, request)
    }

    pub(crate) fn zoom_on_bounding_box(
        &mut self,
        camera: &mut CameraState,
        world_bounds: &BoundingBox,
        request: ZoomRequest,
    ) -> bool {
        let center = world_bounds.center();
        let subject = FramingSubject {
            diagonal: world_bounds.diagonal_length(),
            anchor: Vec3::new(center.x, 0.0, center.z),
            min_y: world_bounds.minimum.y,
            max_y: world_bounds.maximum.y,
        };
        self.frame(camera, subject, request)
    }

    fn frame(
        &mut self,
        camera: &mut CameraState,
        subject: FramingSubject,
        request: ZoomRequest,
    ) -> bool {
        let Some(attachment) = self.attachment.as_mut() else {
            log::warn!("zoom requested on a detached framing behavior");
            return false;
        };

        let fraction = request.framing_fraction.unwrap_or(self.config.position_y);
        let focus_y = geometry::framing_target_height(
            subject.anchor.y,
            subject.min_y,
            subject.max_y,
            fraction,
        );
        if !focus_y.is_finite() {
            log::warn!("non-finite framing height, ignoring zoom request");
            return false;
        }

        let radius = if let Some(radius) = request.radius {
            radius
        } else {
            let slope = geometry::frustum_slope(camera.fovy, camera.aspect_ratio());
            let radius = geometry::framing_radius(
                subject.diagonal,
                self.config.radius_offset,
                slope,
                camera.lower_radius_limit,
                camera.upper_radius_limit,
                self.config.mode,
            );
            if self.config.mode == FramingMode::FitFrustumSides {
                camera.lower_radius_limit = Some(radius - LOWER_LIMIT_MARGIN);
            }
            radius
        };
        if request.apply_to_lower_limit {
            camera.lower_radius_limit = Some(radius);
        }

        let focus = if request.focus_on_origin_xz {
            Vec3::new(0.0, focus_y, 0.0)
        } else {
            Vec3::new(subject.anchor.x, focus_y, subject.anchor.z)
        };

        attachment.animations.cancel_property(CameraProperty::Radius);
        if self.config.animate_focus_point {
            attachment.animations.cancel_property(CameraProperty::Target);
            let _ = attachment.animations.start_transition(
                camera,
                CameraProperty::Target,
                TweenValue::Vector(focus),
                self.config.framing_time,
                &self.template,
                None,
            );
        }
        let _ = attachment.animations.start_transition(
            camera,
            CameraProperty::Radius,
            TweenValue::Scalar(radius),
            self.config.framing_time,
            &self.template,
            None,
        );
        log::debug!("framing at radius {radius:.3}, focus {focus}");
        true
    }
}
