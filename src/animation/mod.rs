//! Camera property transitions.
//!
//! [`Tweener`] is the interpolation engine; [`AnimationCoordinator`] tracks
//! which transitions a behavior owns so it can cancel them as a unit.

pub mod coordinator;
pub mod transition;
pub mod tweener;

pub use coordinator::AnimationCoordinator;
pub use transition::TransitionTemplate;
pub use tweener::{
    AnimationEngine, AnimationHandle, CameraProperty, CompletionCallback,
    TweenValue, Tweener,
};
