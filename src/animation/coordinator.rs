//! Bookkeeping for the transitions a behavior has in flight.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::transition::TransitionTemplate;
use super::tweener::{
    AnimationEngine, AnimationHandle, CameraProperty, CompletionCallback,
    TweenValue,
};
use crate::camera::CameraState;

/// Owns the set of transitions started by one behavior.
///
/// Responsibilities:
/// - Start transitions through the animation engine and retain their
///   handles
/// - Cancel everything atomically, without firing completion callbacks
/// - Hold the elevation-return lock
///
/// Transitions on the same property are not exclusive here; callers cancel
/// with [`cancel_property`](Self::cancel_property) when they need that.
pub struct AnimationCoordinator {
    engine: Rc<dyn AnimationEngine>,
    /// Retained handles and the property each one drives.
    active: FxHashMap<AnimationHandle, CameraProperty>,
    /// Set while an elevation-return transition is in flight.
    elevation_return: bool,
}

impl AnimationCoordinator {
    /// Empty set driving `engine`.
    #[must_use]
    pub fn new(engine: Rc<dyn AnimationEngine>) -> Self {
        Self {
            engine,
            active: FxHashMap::default(),
            elevation_return: false,
        }
    }

    /// Start a transition from the current value of `property` and retain
    /// its handle.
    pub fn start_transition(
        &mut self,
        camera: &CameraState,
        property: CameraProperty,
        to: TweenValue,
        duration_ms: f64,
        template: &TransitionTemplate,
        on_complete: Option<CompletionCallback>,
    ) -> AnimationHandle {
        let handle = self.engine.transition_to(
            camera,
            property,
            to,
            template,
            duration_ms,
            on_complete,
        );
        let _ = self.active.insert(handle, property);
        log::debug!(
            "started {property:?} transition {handle:?} to {to:?} over {duration_ms}ms"
        );
        handle
    }

    /// Stop every retained transition and the camera's own queued ones.
    ///
    /// Completion callbacks are detached first, so nothing fires for a
    /// cancelled run. Also releases the elevation-return lock. Safe to call
    /// with nothing in flight.
    pub fn cancel_all(&mut self, camera: &mut CameraState) {
        camera.animations.clear();
        if !self.active.is_empty() {
            log::debug!("cancelling {} transition(s)", self.active.len());
        }
        for (handle, _) in self.active.drain() {
            let _ = self.engine.detach_on_complete(handle);
            let _ = self.engine.stop(handle);
        }
        self.elevation_return = false;
    }

    /// Stop retained transitions driving `property` only.
    pub fn cancel_property(&mut self, property: CameraProperty) {
        let engine = &self.engine;
        self.active.retain(|handle, p| {
            if *p != property {
                return true;
            }
            let _ = engine.detach_on_complete(*handle);
            let _ = engine.stop(*handle);
            false
        });
    }

    /// Forget handles whose transitions have finished.
    pub fn prune_finished(&mut self) {
        let engine = &self.engine;
        self.active.retain(|handle, _| engine.is_running(*handle));
    }

    /// Whether a retained transition on `property` is still running.
    #[must_use]
    pub fn is_animating(&self, property: CameraProperty) -> bool {
        self.active
            .iter()
            .any(|(handle, p)| *p == property && self.engine.is_running(*handle))
    }

    /// Handles of retained transitions on `property` that are still running.
    #[must_use]
    pub fn running(&self, property: CameraProperty) -> Vec<AnimationHandle> {
        let mut handles: Vec<AnimationHandle> = self
            .active
            .iter()
            .filter(|(handle, p)| **p == property && self.engine.is_running(**handle))
            .map(|(handle, _)| *handle)
            .collect();
        handles.sort_unstable();
        handles
    }

    /// Number of retained handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no handle is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether an elevation-return transition holds the lock.
    #[must_use]
    pub fn is_elevation_return_active(&self) -> bool {
        self.elevation_return
    }

    /// Take the elevation-return lock.
    pub fn lock_elevation_return(&mut self) {
        self.elevation_return = true;
    }

    /// Release the elevation-return lock.
    pub fn release_elevation_return(&mut self) {
        self.elevation_return = false;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec3;

    use super::*;
    use crate::animation::tweener::Tweener;
    use crate::util::clock::ManualClock;

    fn setup() -> (Rc<ManualClock>, Rc<Tweener>, AnimationCoordinator, CameraState)
    {
        let clock = Rc::new(ManualClock::new(0.0));
        let tweener = Rc::new(Tweener::new(clock.clone()));
        let coordinator = AnimationCoordinator::new(tweener.clone());
        let camera = CameraState::new(0.0, FRAC_PI_2, 10.0, Vec3::ZERO);
        (clock, tweener, coordinator, camera)
    }

    #[test]
    fn cancel_all_is_idempotent() {
        let (_clock, tweener, mut coordinator, mut camera) = setup();
        let _ = coordinator.start_transition(
            &camera,
            CameraProperty::Radius,
            TweenValue::Scalar(3.0),
            1000.0,
            &TransitionTemplate::DEFAULT,
            None,
        );
        coordinator.lock_elevation_return();

        coordinator.cancel_all(&mut camera);
        assert!(coordinator.is_empty());
        assert!(!coordinator.is_elevation_return_active());
        assert_eq!(tweener.running(), 0);

        coordinator.cancel_all(&mut camera);
        assert!(coordinator.is_empty());
        assert!(!coordinator.is_elevation_return_active());
        assert_eq!(tweener.running(), 0);
    }

    #[test]
    fn cancel_all_clears_camera_queue_and_skips_callbacks() {
        let (clock, tweener, mut coordinator, mut camera) = setup();
        let stray = tweener.transition_to(
            &camera,
            CameraProperty::Alpha,
            TweenValue::Scalar(1.0),
            &TransitionTemplate::DEFAULT,
            500.0,
            None,
        );
        camera.animations.push(stray);

        let _ = coordinator.start_transition(
            &camera,
            CameraProperty::Beta,
            TweenValue::Scalar(1.0),
            100.0,
            &TransitionTemplate::DEFAULT,
            Some(Box::new(|camera: &mut CameraState| camera.radius = -1.0)),
        );
        coordinator.cancel_all(&mut camera);
        assert!(camera.animations.is_empty());

        clock.advance(1000.0);
        tweener.advance(&mut camera);
        assert_eq!(camera.radius, 10.0);
    }

    #[test]
    fn cancel_property_leaves_others_running() {
        let (_clock, tweener, mut coordinator, camera) = setup();
        let radius = coordinator.start_transition(
            &camera,
            CameraProperty::Radius,
            TweenValue::Scalar(3.0),
            1000.0,
            &TransitionTemplate::DEFAULT,
            None,
        );
        let beta = coordinator.start_transition(
            &camera,
            CameraProperty::Beta,
            TweenValue::Scalar(1.0),
            1000.0,
            &TransitionTemplate::DEFAULT,
            None,
        );
        coordinator.cancel_property(CameraProperty::Radius);
        assert!(!tweener.is_running(radius));
        assert!(tweener.is_running(beta));
        assert!(coordinator.is_animating(CameraProperty::Beta));
        assert!(!coordinator.is_animating(CameraProperty::Radius));
        assert_eq!(coordinator.len(), 1);
    }

    #[test]
    fn finished_handles_are_pruned() {
        let (clock, tweener, mut coordinator, mut camera) = setup();
        let _ = coordinator.start_transition(
            &camera,
            CameraProperty::Radius,
            TweenValue::Scalar(3.0),
            100.0,
            &TransitionTemplate::DEFAULT,
            None,
        );
        clock.advance(200.0);
        tweener.advance(&mut camera);
        assert!(!coordinator.is_animating(CameraProperty::Radius));
        assert_eq!(coordinator.len(), 1);
        coordinator.prune_finished();
        assert!(coordinator.is_empty());
    }
}
