//! Frame-stepped easing used to script ring rotation between drops.

pub mod easing;
pub mod interpolator;

pub use easing::EasingFunction;
pub use interpolator::Interpolator;
