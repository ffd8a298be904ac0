//! Rigid-body backend on top of Rapier.
//!
//! Every body gets a cuboid collider from its half extents, so falling
//! panels land on subjects, on each other and on the hanging platform.

use glam::{Mat3, Quat, Vec3};
use rapier3d::na::{
    Isometry3, Point3, Quaternion, Translation3, UnitQuaternion, Vector3,
};
use rapier3d::prelude::*;

use super::{BodyDesc, BodyHandle, BodyType, PhysicsBackend};
use crate::error::RotundaError;
use crate::options::PhysicsOptions;

/// Longest interval integrated in one solver pass; longer frames are split.
const MAX_SUBSTEP: f32 = 1.0 / 60.0;
/// Upper bound on solver passes per frame after a long stall.
const MAX_SUBSTEPS: u32 = 8;

/// Physics world backed by `rapier3d`.
pub struct RapierWorld {
    gravity: Vector3<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    /// Slot `i` holds the Rapier handle behind `BodyHandle(i)`.
    handles: Vec<RigidBodyHandle>,
}

impl RapierWorld {
    /// Create an empty world with the configured gravity.
    #[must_use]
    pub fn new(options: &PhysicsOptions) -> Self {
        Self {
            gravity: Vector3::new(0.0, options.gravity, 0.0),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            handles: Vec::new(),
        }
    }

    fn rigid_body_handle(
        &self,
        handle: BodyHandle,
    ) -> Result<RigidBodyHandle, RotundaError> {
        self.handles
            .get(handle.index() as usize)
            .copied()
            .ok_or(RotundaError::UnknownBody(handle))
    }

    fn body(&self, handle: BodyHandle) -> Result<&RigidBody, RotundaError> {
        let rb = self.rigid_body_handle(handle)?;
        self.rigid_body_set
            .get(rb)
            .ok_or(RotundaError::UnknownBody(handle))
    }

    fn body_mut(
        &mut self,
        handle: BodyHandle,
    ) -> Result<&mut RigidBody, RotundaError> {
        let rb = self.rigid_body_handle(handle)?;
        self.rigid_body_set
            .get_mut(rb)
            .ok_or(RotundaError::UnknownBody(handle))
    }

    fn integrate(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }
}

fn rigid_body_type(kind: BodyType) -> RigidBodyType {
    match kind {
        BodyType::Static => RigidBodyType::Fixed,
        BodyType::Dynamic => RigidBodyType::Dynamic,
    }
}

fn to_vector(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}

fn to_point(v: Vec3) -> Point3<f32> {
    Point3::new(v.x, v.y, v.z)
}

fn to_rotation(m: Mat3) -> UnitQuaternion<f32> {
    let q = Quat::from_mat3(&m);
    UnitQuaternion::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z))
}

fn from_vector(v: &Vector3<f32>) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

fn from_rotation(r: &UnitQuaternion<f32>) -> Mat3 {
    // Stored as [i, j, k, w].
    let c = r.coords;
    Mat3::from_quat(Quat::from_xyzw(c[0], c[1], c[2], c[3]))
}

impl PhysicsBackend for RapierWorld {
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
        let isometry = Isometry3::from_parts(
            Translation3::from(to_vector(desc.position)),
            to_rotation(desc.rotation),
        );
        let body = RigidBodyBuilder::new(rigid_body_type(desc.kind))
            .position(isometry)
            .build();
        let rb = self.rigid_body_set.insert(body);

        let he = desc.half_extents;
        let collider = ColliderBuilder::cuboid(he.x, he.y, he.z).build();
        let _ = self.collider_set.insert_with_parent(
            collider,
            rb,
            &mut self.rigid_body_set,
        );

        let handle = BodyHandle::from_index(self.handles.len() as u32);
        self.handles.push(rb);
        Ok(handle)
    }

    fn create_joint(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        anchor: Vec3,
    ) -> Result<(), RotundaError> {
        let anchor = to_point(anchor);
        let local = |h| {
            self.body(h)
                .map(|rb| rb.position().inverse_transform_point(&anchor))
        };
        let joint = SphericalJointBuilder::new()
            .local_anchor1(local(a)?)
            .local_anchor2(local(b)?);
        let rb_a = self.rigid_body_handle(a)?;
        let rb_b = self.rigid_body_handle(b)?;
        let _ = self.impulse_joint_set.insert(rb_a, rb_b, joint, true);
        Ok(())
    }

    fn set_body_type(
        &mut self,
        handle: BodyHandle,
        kind: BodyType,
    ) -> Result<(), RotundaError> {
        self.body_mut(handle)?
            .set_body_type(rigid_body_type(kind), true);
        Ok(())
    }

    fn body_type(&self, handle: BodyHandle) -> Result<BodyType, RotundaError> {
        Ok(if self.body(handle)?.is_dynamic() {
            BodyType::Dynamic
        } else {
            BodyType::Static
        })
    }

    fn body_rotation(&self, handle: BodyHandle) -> Result<Mat3, RotundaError> {
        Ok(from_rotation(self.body(handle)?.rotation()))
    }

    fn set_body_rotation(
        &mut self,
        handle: BodyHandle,
        rotation: Mat3,
    ) -> Result<(), RotundaError> {
        self.body_mut(handle)?
            .set_rotation(to_rotation(rotation), true);
        Ok(())
    }

    fn body_position(&self, handle: BodyHandle) -> Result<Vec3, RotundaError> {
        Ok(from_vector(self.body(handle)?.translation()))
    }

    fn set_body_position(
        &mut self,
        handle: BodyHandle,
        position: Vec3,
    ) -> Result<(), RotundaError> {
        self.body_mut(handle)?
            .set_translation(to_vector(position), true);
        Ok(())
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        let substeps =
            ((dt / MAX_SUBSTEP).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let sub_dt = (dt / substeps as f32).min(MAX_SUBSTEP);
        for _ in 0..substeps {
            self.integrate(sub_dt);
        }
    }
}
