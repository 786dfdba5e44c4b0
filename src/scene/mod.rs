//! Host-side scene: the pointer channel, the clock and the animation engine
//! that camera behaviors plug into.

mod observable;
mod pointer;
mod target;

use std::rc::Rc;

pub use observable::{Observable, ObserverHandle};
pub use pointer::{MouseButton, PointerEvent, PointerEventKind};
pub use target::{BoundingBox, FramingTarget, TargetMesh};

use crate::animation::{AnimationEngine, Tweener};
use crate::camera::ArcRotateCamera;
use crate::util::clock::{Clock, SystemClock};

/// The scene a camera lives in.
///
/// Owns the monotonic clock and the animation engine. A frame is one call
/// to [`render_frame`](Self::render_frame).
pub struct Scene {
    /// Pointer notifications, delivered before camera input handling.
    pub on_pre_pointer: Observable<PointerEvent>,
    clock: Rc<dyn Clock>,
    tweener: Rc<Tweener>,
}

impl Scene {
    /// Scene reading time from `clock`.
    #[must_use]
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        let tweener = Rc::new(Tweener::new(Rc::clone(&clock)));
        Self {
            on_pre_pointer: Observable::new(),
            clock,
            tweener,
        }
    }

    /// Scene on the wall clock.
    #[must_use]
    pub fn with_system_clock() -> Self {
        Self::new(Rc::new(SystemClock::new()))
    }

    /// Shared monotonic clock.
    #[must_use]
    pub fn clock(&self) -> Rc<dyn Clock> {
        Rc::clone(&self.clock)
    }

    /// Current clock reading in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Animation engine as seen by behaviors.
    #[must_use]
    pub fn animation_engine(&self) -> Rc<dyn AnimationEngine> {
        self.tweener.clone()
    }

    /// The concrete engine, for inspection.
    #[must_use]
    pub fn tweener(&self) -> &Tweener {
        &self.tweener
    }

    /// Deliver a pointer event to pre-pointer observers.
    pub fn dispatch_pointer(&self, event: PointerEvent) {
        let mut event = event;
        self.on_pre_pointer.notify(&mut event);
    }

    /// One frame: advance transitions, then run the camera's input step.
    pub fn render_frame(&self, camera: &mut ArcRotateCamera) {
        self.tweener.advance(&mut camera.state);
        camera.check_inputs();
    }
}
