//! Default animation engine: eased property transitions on a camera.
//!
//! Transitions are started against the current property value, sampled on
//! every [`Tweener::advance`], and finish with an optional completion
//! callback. Completion callbacks run after the engine has released its
//! internal state, so they may start or stop transitions themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec3;

use super::transition::TransitionTemplate;
use crate::camera::CameraState;
use crate::util::clock::Clock;

/// Animatable camera property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraProperty {
    /// Azimuth angle.
    Alpha,
    /// Polar angle.
    Beta,
    /// Orbit radius.
    Radius,
    /// Orbit center.
    Target,
}

/// Value of an animatable property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    /// Angles and distances.
    Scalar(f32),
    /// Positions.
    Vector(Vec3),
}

impl TweenValue {
    /// Interpolate toward `to`. Mismatched kinds jump to `to`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        match (self, to) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a + (b - a) * t),
            (Self::Vector(a), Self::Vector(b)) => Self::Vector(a + (b - a) * t),
            _ => to,
        }
    }
}

/// Identifies one running transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

/// Runs once when a transition reaches its end value.
pub type CompletionCallback = Box<dyn FnOnce(&mut CameraState)>;

/// Interpolation engine consumed by the framing behavior.
pub trait AnimationEngine {
    /// Start transitioning `property` from its current value on `camera` to
    /// `to` over `duration_ms`.
    ///
    /// A non-positive duration completes on the next step.
    fn transition_to(
        &self,
        camera: &CameraState,
        property: CameraProperty,
        to: TweenValue,
        template: &TransitionTemplate,
        duration_ms: f64,
        on_complete: Option<CompletionCallback>,
    ) -> AnimationHandle;

    /// Stop a transition where it is. Returns `false` if it was not running.
    fn stop(&self, handle: AnimationHandle) -> bool;

    /// Drop the completion callback of a running transition.
    fn detach_on_complete(&self, handle: AnimationHandle) -> bool;

    /// Whether the transition is still in flight.
    fn is_running(&self, handle: AnimationHandle) -> bool;
}

/// One in-flight property transition.
struct Tween {
    handle: AnimationHandle,
    property: CameraProperty,
    from: TweenValue,
    to: TweenValue,
    start_ms: f64,
    end_frame: f64,
    template: TransitionTemplate,
    on_complete: Option<CompletionCallback>,
}

impl Tween {
    /// Normalized progress (0.0 to 1.0).
    fn progress(&self, now_ms: f64) -> f32 {
        if self.end_frame <= 0.0 {
            return 1.0;
        }
        let frame = self.template.frame_at(now_ms - self.start_ms);
        (frame / self.end_frame).min(1.0) as f32
    }

    fn value_at(&self, progress: f32) -> TweenValue {
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.template.easing.evaluate(progress))
    }
}

/// Clock-driven [`AnimationEngine`].
///
/// The host calls [`advance`](Self::advance) once per frame with the
/// camera the transitions write to.
pub struct Tweener {
    clock: Rc<dyn Clock>,
    next_id: Cell<u64>,
    tweens: RefCell<Vec<Tween>>,
}

impl Tweener {
    /// Engine reading time from `clock`.
    #[must_use]
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            next_id: Cell::new(0),
            tweens: RefCell::new(Vec::new()),
        }
    }

    /// Number of transitions in flight.
    #[must_use]
    pub fn running(&self) -> usize {
        self.tweens.borrow().len()
    }

    /// Target value of a running transition.
    #[must_use]
    pub fn target_of(&self, handle: AnimationHandle) -> Option<TweenValue> {
        self.tweens
            .borrow()
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.to)
    }

    /// Sample every transition into `camera`, retire finished ones, then
    /// run their completion callbacks in start order.
    ///
    /// Transitions on the same property are applied in start order, so the
    /// most recent one wins.
    pub fn advance(&self, camera: &mut CameraState) {
        let now = self.clock.now_ms();
        let finished: Vec<Tween> = {
            let mut tweens = self.tweens.borrow_mut();
            for tween in tweens.iter() {
                camera.set(tween.property, tween.value_at(tween.progress(now)));
            }
            let (finished, running): (Vec<Tween>, Vec<Tween>) =
                std::mem::take(&mut *tweens)
                    .into_iter()
                    .partition(|t| t.progress(now) >= 1.0);
            *tweens = running;
            finished
        };

        for tween in finished {
            log::trace!("transition {:?} on {:?} complete", tween.handle, tween.property);
            if let Some(on_complete) = tween.on_complete {
                on_complete(camera);
            }
        }
    }
}

impl AnimationEngine for Tweener {
    fn transition_to(
        &self,
        camera: &CameraState,
        property: CameraProperty,
        to: TweenValue,
        template: &TransitionTemplate,
        duration_ms: f64,
        on_complete: Option<CompletionCallback>,
    ) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        self.tweens.borrow_mut().push(Tween {
            handle,
            property,
            from: camera.get(property),
            to,
            start_ms: self.clock.now_ms(),
            end_frame: template.end_frame(duration_ms),
            template: *template,
            on_complete,
        });
        handle
    }

    fn stop(&self, handle: AnimationHandle) -> bool {
        let mut tweens = self.tweens.borrow_mut();
        let before = tweens.len();
        tweens.retain(|t| t.handle != handle);
        tweens.len() != before
    }

    fn detach_on_complete(&self, handle: AnimationHandle) -> bool {
        self.tweens
            .borrow_mut()
            .iter_mut()
            .find(|t| t.handle == handle)
            .and_then(|t| t.on_complete.take())
            .is_some()
    }

    fn is_running(&self, handle: AnimationHandle) -> bool {
        self.tweens.borrow().iter().any(|t| t.handle == handle)
    }
}
