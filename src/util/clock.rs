//! Monotonic time sources for transitions and idle tracking.

use std::cell::Cell;

use web_time::Instant;

/// Monotonic time source in milliseconds.
///
/// Only differences between readings are meaningful.
pub trait Clock {
    /// Current monotonic time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Wall-clock backed [`Clock`] (delegates to `performance.now()` on WASM).
pub struct SystemClock {
    /// Reading origin; `now_ms` counts from here.
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose zero is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually advanced [`Clock`] for fixed-timestep hosts and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`.
    #[must_use]
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Move the clock forward by `delta_ms`. Negative deltas are ignored.
    pub fn advance(&self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.now.set(self.now.get() + delta_ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
