//! Easing functions for scripted panel motion.
//!
//! Every curve maps linear progress in [0, 1] onto eased progress in
//! [0, 1] with `f(0) = 0` and `f(1) = 1`.

use std::f32::consts::{FRAC_PI_2, PI};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing). Stepping a linear curve gives a
    /// fixed increment per frame.
    Linear,
    /// Half-sine ease-in-out: `(sin(πt − π/2) + 1) / 2`.
    HalfSine,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing function: the half-sine curve used for ring rotation.
    pub const DEFAULT: EasingFunction = EasingFunction::HalfSine;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::HalfSine => {
                ((PI * t - FRAC_PI_2).sin() + 1.0) / 2.0
            }
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
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
    fn test_half_sine_endpoints() {
        let ease = EasingFunction::HalfSine;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert!((ease.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((ease.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_half_sine_is_symmetric() {
        let ease = EasingFunction::HalfSine;
        for t in [0.1, 0.2, 0.3, 0.4] {
            let sum = ease.evaluate(t) + ease.evaluate(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-5, "t={t}, sum={sum}");
        }
    }

    #[test]
    fn test_half_sine_slow_start() {
        // Ease-in-out: early progress lags behind linear.
        let ease = EasingFunction::HalfSine;
        assert!(ease.evaluate(0.1) < 0.1);
        assert!(ease.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_half_sine() {
        assert_eq!(EasingFunction::default(), EasingFunction::HalfSine);
    }
}
