//! Arc-rotate camera model.
//!
//! The host owns the camera; behaviors observe it through its channels and
//! mutate its [`CameraState`] from inside their callbacks.

mod core;

pub use self::core::{ArcRotateCamera, CameraState, InertialOffsets};
