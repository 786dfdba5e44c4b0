//! Shared utilities: the monotonic clock and easing curves.

pub mod clock;
pub mod easing;
