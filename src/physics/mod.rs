//! Physics collaborator contract.
//!
//! The presentation core never asks for collision results. It only creates
//! bodies, joins them, flips them between static and dynamic, and writes
//! transforms for bodies it is scripting. `RapierWorld` does this with a
//! full rigid-body engine (feature `rapier`); [`KinematicWorld`] is a
//! dependency-free stand-in used by tests and light hosts.

#[cfg(feature = "rapier")]
mod rapier;
mod world;

use glam::{Mat3, Vec3};
#[cfg(feature = "rapier")]
pub use rapier::RapierWorld;
pub use world::KinematicWorld;

use crate::error::RotundaError;

/// Opaque reference to a body owned by a [`PhysicsBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(u32);

impl BodyHandle {
    /// Wrap a backend-specific slot index.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Backend-specific slot index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Whether a body is moved by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    /// Immovable; only scripted writes change its transform.
    #[default]
    Static,
    /// Gravity-affected.
    Dynamic,
}

/// Initial state of a new body: an oriented box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    /// World-space centre.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Mat3,
    /// Half size of the box along each local axis.
    pub half_extents: Vec3,
    /// Static or dynamic.
    pub kind: BodyType,
}

impl BodyDesc {
    /// Whether the extents describe a usable box.
    #[must_use]
    pub fn has_valid_bounds(&self) -> bool {
        self.half_extents.is_finite() && self.half_extents.min_element() > 0.0
    }
}

/// Operations the presentation needs from a physics engine.
pub trait PhysicsBackend {
    /// Create a body and return its handle.
    fn create_body(
        &mut self,
        desc: &BodyDesc,
    ) -> Result<BodyHandle, RotundaError>;

    /// Join two bodies with a ball joint pivoting about the world-space
    /// `anchor`.
    fn create_joint(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        anchor: Vec3,
    ) -> Result<(), RotundaError>;

    /// Switch a body between static and dynamic.
    fn set_body_type(
        &mut self,
        handle: BodyHandle,
        kind: BodyType,
    ) -> Result<(), RotundaError>;

    /// Current body type.
    fn body_type(&self, handle: BodyHandle) -> Result<BodyType, RotundaError>;

    /// Current orientation as a rotation matrix.
    fn body_rotation(&self, handle: BodyHandle) -> Result<Mat3, RotundaError>;

    /// Overwrite the orientation.
    fn set_body_rotation(
        &mut self,
        handle: BodyHandle,
        rotation: Mat3,
    ) -> Result<(), RotundaError>;

    /// Current world-space position.
    fn body_position(&self, handle: BodyHandle) -> Result<Vec3, RotundaError>;

    /// Overwrite the position.
    fn set_body_position(
        &mut self,
        handle: BodyHandle,
        position: Vec3,
    ) -> Result<(), RotundaError>;

    /// Advance the simulation by `dt` seconds.
    fn step(&mut self, dt: f32);
}
