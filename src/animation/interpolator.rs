//! Frame-stepped eased progress for scripted ring rotation.

use super::easing::EasingFunction;
use crate::error::RotundaError;

/// Restartable progress generator over a fixed budget of frames.
///
/// Progress is `frame / max`. While it is below 1 the value is eased and
/// cached in `current`; once it reaches 1 the raw ratio is returned so the
/// caller can detect completion. Time never enters the calculation: one
/// call to [`next`](Self::next) is one rendered frame.
///
/// ```ignore
/// let mut interp = Interpolator::new(40)?;
/// while interp.interpolation() <= 1.0 {
///     apply(interp.delta());
///     interp.next();
/// }
/// interp.reset();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    max: u32,
    frame: u32,
    current: f32,
    prev: f32,
    easing: EasingFunction,
}

impl Interpolator {
    /// Create an interpolator with the default half-sine easing.
    pub fn new(max: u32) -> Result<Self, RotundaError> {
        Self::with_easing(max, EasingFunction::DEFAULT)
    }

    /// Create an interpolator with a specific easing curve.
    pub fn with_easing(
        max: u32,
        easing: EasingFunction,
    ) -> Result<Self, RotundaError> {
        if max == 0 {
            return Err(RotundaError::InvalidFrameBudget);
        }
        Ok(Self {
            max,
            frame: 0,
            current: 0.0,
            prev: 0.0,
            easing,
        })
    }

    /// Frames stepped since construction or the last reset.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Eased progress for the current frame, or the raw ratio (`>= 1`)
    /// once the budget is spent.
    ///
    /// Repeated calls within one frame return the same value.
    pub fn interpolation(&mut self) -> f32 {
        let p = self.frame as f32 / self.max as f32;
        if p >= 1.0 {
            return p;
        }
        self.current = self.easing.evaluate(p);
        self.current
    }

    /// Eased increment contributed since the previous [`next`](Self::next).
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.current - self.prev
    }

    /// Advance one frame. Does not recompute the eased value.
    pub fn next(&mut self) {
        self.prev = self.current;
        self.frame += 1;
    }

    /// Rearm for another cycle. `current` is left as-is and is re-derived
    /// by the next [`interpolation`](Self::interpolation) call.
    pub fn reset(&mut self) {
        self.prev = 0.0;
        self.frame = 0;
    }
}
