use glam::{Mat3, Vec3};

use super::{BodyDesc, BodyHandle, BodyType, PhysicsBackend};
use crate::error::RotundaError;
use crate::options::PhysicsOptions;

#[derive(Debug, Clone)]
struct Body {
    kind: BodyType,
    position: Vec3,
    rotation: Mat3,
    velocity: Vec3,
    half_extents: Vec3,
    /// Held in place by a joint.
    jointed: bool,
}

/// Minimal drop-and-settle simulation.
///
/// Dynamic bodies fall under constant gravity and come to rest on a
/// horizontal floor plane. There is no collision between bodies and no
/// angular motion, and a jointed body simply hangs where it was created.
/// Use `RapierWorld` for contacts and real joints.
#[derive(Debug, Clone)]
pub struct KinematicWorld {
    bodies: Vec<Body>,
    gravity: Vec3,
    floor_y: f32,
}

impl KinematicWorld {
    /// Create an empty world.
    #[must_use]
    pub fn new(options: &PhysicsOptions) -> Self {
        Self {
            bodies: Vec::new(),
            gravity: Vec3::new(0.0, options.gravity, 0.0),
            floor_y: options.floor_y,
        }
    }

    fn body(&self, handle: BodyHandle) -> Result<&Body, RotundaError> {
        self.bodies
            .get(handle.index() as usize)
            .ok_or(RotundaError::UnknownBody(handle))
    }

    fn body_mut(
        &mut self,
        handle: BodyHandle,
    ) -> Result<&mut Body, RotundaError> {
        self.bodies
            .get_mut(handle.index() as usize)
            .ok_or(RotundaError::UnknownBody(handle))
    }
}

impl PhysicsBackend for KinematicWorld {
    fn create_body(
        &mut self,
        desc: &BodyDesc,
    ) -> Result<BodyHandle, RotundaError> {
        if !desc.has_valid_bounds() {
            return Err(RotundaError::InvalidBounds(format!(
                "half extents {}",
                desc.half_extents
            )));
        }
        let handle = BodyHandle::from_index(self.bodies.len() as u32);
        self.bodies.push(Body {
            kind: desc.kind,
            position: desc.position,
            rotation: desc.rotation,
            velocity: Vec3::ZERO,
            half_extents: desc.half_extents,
            jointed: false,
        });
        Ok(handle)
    }

    fn create_joint(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        _anchor: Vec3,
    ) -> Result<(), RotundaError> {
        let _ = self.body(b)?;
        self.body_mut(a)?.jointed = true;
        self.body_mut(b)?.jointed = true;
        Ok(())
    }

    fn set_body_type(
        &mut self,
        handle: BodyHandle,
        kind: BodyType,
    ) -> Result<(), RotundaError> {
        let body = self.body_mut(handle)?;
        body.kind = kind;
        if kind == BodyType::Static {
            body.velocity = Vec3::ZERO;
        }
        Ok(())
    }

    fn body_type(&self, handle: BodyHandle) -> Result<BodyType, RotundaError> {
        Ok(self.body(handle)?.kind)
    }

    fn body_rotation(&self, handle: BodyHandle) -> Result<Mat3, RotundaError> {
        Ok(self.body(handle)?.rotation)
    }

    fn set_body_rotation(
        &mut self,
        handle: BodyHandle,
        rotation: Mat3,
    ) -> Result<(), RotundaError> {
        self.body_mut(handle)?.rotation = rotation;
        Ok(())
    }

    fn body_position(&self, handle: BodyHandle) -> Result<Vec3, RotundaError> {
        Ok(self.body(handle)?.position)
    }

    fn set_body_position(
        &mut self,
        handle: BodyHandle,
        position: Vec3,
    ) -> Result<(), RotundaError> {
        self.body_mut(handle)?.position = position;
        Ok(())
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        let floor_y = self.floor_y;
        for body in &mut self.bodies {
            if body.kind == BodyType::Static || body.jointed {
                continue;
            }
            // Semi-implicit Euler: velocity first, then position.
            body.velocity += self.gravity * dt;
            body.position += body.velocity * dt;

            let rest_y = floor_y + body.half_extents.y;
            if body.position.y <= rest_y {
                body.position.y = rest_y;
                body.velocity = Vec3::ZERO;
            }
        }
    }
}
