//! Placement of subjects around the stage.
//!
//! Subject `i` sits at angle `a = 2π·i / N` on a circle of radius `r`
//! whose centre is `(0, 0, -r)`, so subject 0 is at the origin facing the
//! camera. A subject's position is derived from its orientation: rotating
//! the orientation about Y walks the panel along the circle.

use std::f32::consts::TAU;

use glam::{Mat3, Vec3};

use crate::error::RotundaError;

/// Circle on which subjects are laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    count: usize,
    radius: f32,
}

impl RingLayout {
    /// Create a ring for `count` subjects at the given radius.
    pub fn new(count: usize, radius: f32) -> Result<Self, RotundaError> {
        if count == 0 {
            return Err(RotundaError::EmptySequence);
        }
        Ok(Self { count, radius })
    }

    /// Size the ring so the widest panel, repeated `N` times with
    /// `spacing` slack, fills the circumference.
    pub fn from_widths(
        widths: &[f32],
        spacing: f32,
    ) -> Result<Self, RotundaError> {
        let max = widths.iter().copied().fold(0.0_f32, f32::max);
        let circumference = max * widths.len() as f32 * spacing;
        Self::new(widths.len(), circumference / TAU)
    }

    /// Radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Angular spacing between adjacent subjects (`2π / N`).
    #[must_use]
    pub fn angle(&self) -> f32 {
        TAU / self.count as f32
    }

    /// Centre of the circle.
    #[must_use]
    pub fn centre(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -self.radius)
    }

    /// Position and yaw of slot `i`.
    #[must_use]
    pub fn slot(&self, i: usize) -> (Vec3, f32) {
        let a = self.angle() * i as f32;
        let position = Vec3::new(
            self.radius * a.sin(),
            0.0,
            self.radius * a.cos() - self.radius,
        );
        (position, a)
    }

    /// Rotate an orientation by `-(angle · delta)` about Y.
    #[must_use]
    pub fn rotate(&self, rotation: Mat3, delta: f32) -> Mat3 {
        Mat3::from_rotation_y(-(self.angle() * delta)) * rotation
    }

    /// Ring position implied by an orientation.
    ///
    /// Reads row 0 of the matrix: `x = r·m[0][2]`, `z = r·m[0][0] − r`.
    #[must_use]
    pub fn position_for(&self, rotation: Mat3) -> Vec3 {
        let r = self.radius;
        Vec3::new(r * rotation.z_axis.x, 0.0, r * rotation.x_axis.x - r)
    }
}
