//! Easing functions for camera transitions.
//!
//! Curves map normalized progress in `[0, 1]` to eased progress in `[0, 1]`.
//! The framing transitions default to an exponential ease-in-out.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control point.
        c1: f32,
        /// Second inner control point.
        c2: f32,
    },
    /// Exponential ease-in for the first half, mirrored ease-out for the
    /// second half.
    ExponentialInOut {
        /// Curve steepness. Values `<= 0` degrade to linear.
        exponent: f32,
    },
}

impl EasingFunction {
    /// Default easing: symmetric exponential ease-in-out, exponent 2.
    pub const DEFAULT: EasingFunction =
        EasingFunction::ExponentialInOut { exponent: 2.0 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Every curve maps 0 to 0 and 1 to
    /// 1 exactly.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
            EasingFunction::ExponentialInOut { exponent } => {
                if t >= 0.5 {
                    (1.0 - exponential_in((1.0 - t) * 2.0, exponent)) * 0.5 + 0.5
                } else {
                    exponential_in(t * 2.0, exponent) * 0.5
                }
            }
        }
    }
}

/// Ease-in half of the exponential curve over the full `[0, 1]` range.
#[inline]
fn exponential_in(t: f32, exponent: f32) -> f32 {
    if exponent <= 0.0 {
        return t;
    }
    ((exponent * t).exp() - 1.0) / (exponent.exp() - 1.0)
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_hermite_ease_out_shape() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!(hermite.evaluate(0.25) > 0.25);
    }

    #[test]
    fn test_exponential_in_out_endpoints_are_exact() {
        let exp = EasingFunction::DEFAULT;
        assert_eq!(exp.evaluate(0.0), 0.0);
        assert_eq!(exp.evaluate(1.0), 1.0);
        assert!((exp.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_exponential_in_out_is_symmetric() {
        let exp = EasingFunction::ExponentialInOut { exponent: 4.0 };
        for t in [0.1_f32, 0.2, 0.3, 0.4] {
            let low = exp.evaluate(t);
            let high = exp.evaluate(1.0 - t);
            assert!((low + high - 1.0).abs() < 1e-5, "t={t}");
            // Slow start
            assert!(low < t);
        }
    }

    #[test]
    fn test_non_positive_exponent_is_linear() {
        let exp = EasingFunction::ExponentialInOut { exponent: 0.0 };
        assert!((exp.evaluate(0.25) - 0.25).abs() < 1e-6);
        assert!((exp.evaluate(0.75) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
        assert_eq!(EasingFunction::DEFAULT.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_round_trips_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let text = toml::to_string(&Wrapper {
            easing: EasingFunction::DEFAULT,
        })
        .unwrap();
        assert!(text.contains("exponential_in_out"));
        let parsed: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(parsed.easing, EasingFunction::DEFAULT);
    }
}
