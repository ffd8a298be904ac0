//! The scene side of the presentation.
//!
//! [`Stage`] owns every panel visual, the scene groups, the table that
//! binds each visual to its physics body and the platform hung beneath the
//! ring. The state machine only ever sees [`BodyHandle`]s handed out from
//! here; visuals never leave this layer.

mod node;
pub mod ring;
mod visual;

use glam::{Mat3, Quat, Vec3};
pub use node::Node;
pub use ring::RingLayout;
use rustc_hash::FxHashMap;
pub use visual::{Group, PanelVisual, TextMetrics, VisualId};

use crate::error::RotundaError;
use crate::options::{Options, RingOptions};
use crate::physics::{BodyDesc, BodyHandle, BodyType, PhysicsBackend};

/// Half thickness of the platform slab.
const PLATFORM_HALF_HEIGHT: f32 = 0.25;
/// Half size of the roof block.
const ROOF_HALF_EXTENT: f32 = 0.5;
/// Platform overhang beyond the ring, on top of two text depths.
const PLATFORM_MARGIN: f32 = 3.0;

/// The platform under the ring and the fixed roof it swings from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rig {
    /// Dynamic slab that catches dropped panels.
    pub platform: BodyHandle,
    /// Static block above the ring centre.
    pub roof: BodyHandle,
}

/// Panels, groups and the visual → body binding table.
#[derive(Debug, Clone)]
pub struct Stage {
    nodes: Vec<Node>,
    ring: RingLayout,
    ring_options: RingOptions,
    metrics: TextMetrics,
    visuals: Vec<PanelVisual>,
    bodies: FxHashMap<VisualId, BodyHandle>,
    subjects: Vec<VisualId>,
    rig: Rig,
}

impl Stage {
    /// Hang the platform beneath the ring, then lay out one static subject
    /// per node around it.
    pub fn build(
        options: &Options,
        physics: &mut impl PhysicsBackend,
    ) -> Result<Self, RotundaError> {
        let nodes = options.nodes.clone();
        let metrics = TextMetrics::new(&options.text);
        let widths: Vec<f32> =
            nodes.iter().map(|n| metrics.width(&n.subject)).collect();
        let ring = RingLayout::from_widths(&widths, options.ring.spacing)?;

        let rig = Self::hang_platform(&ring, options, physics)?;
        let mut stage = Self {
            nodes,
            ring,
            ring_options: options.ring.clone(),
            metrics,
            visuals: Vec::new(),
            bodies: FxHashMap::default(),
            subjects: Vec::new(),
            rig,
        };

        for i in 0..stage.nodes.len() {
            let (position, yaw) = stage.ring.slot(i);
            let label = stage.nodes[i].subject.clone();
            let id = stage.add_visual(label, position, yaw, Group::Subjects);
            let _ = stage.give_body(id, BodyType::Static, physics)?;
            stage.subjects.push(id);
        }

        log::debug!(
            "stage built: {} subjects, ring radius {:.2}",
            stage.subjects.len(),
            stage.ring.radius()
        );
        Ok(stage)
    }

    /// The presented nodes, in order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Subject ring layout.
    #[must_use]
    pub fn ring(&self) -> &RingLayout {
        &self.ring
    }

    /// All panels, in creation order.
    #[must_use]
    pub fn visuals(&self) -> &[PanelVisual] {
        &self.visuals
    }

    /// Look up a panel.
    #[must_use]
    pub fn visual(&self, id: VisualId) -> Option<&PanelVisual> {
        self.visuals.get(id.0 as usize)
    }

    /// Platform and roof bodies.
    #[must_use]
    pub fn rig(&self) -> Rig {
        self.rig
    }

    /// End points of the cord from the roof down to the platform.
    pub fn cord(
        &self,
        physics: &impl PhysicsBackend,
    ) -> Result<(Vec3, Vec3), RotundaError> {
        Ok((
            physics.body_position(self.rig.roof)?,
            physics.body_position(self.rig.platform)?,
        ))
    }

    /// Ids of panels in a group.
    pub fn group(&self, group: Group) -> impl Iterator<Item = VisualId> + '_ {
        self.visuals
            .iter()
            .filter(move |v| v.group == group)
            .map(|v| v.id)
    }

    /// Body bound to a panel, if one was created.
    #[must_use]
    pub fn body_of(&self, id: VisualId) -> Option<BodyHandle> {
        self.bodies.get(&id).copied()
    }

    /// Body of the subject at ring ordinal `i`.
    #[must_use]
    pub fn subject_body(&self, i: usize) -> Option<BodyHandle> {
        self.subjects.get(i).and_then(|&id| self.body_of(id))
    }

    /// Create the content panel for node `index` above its subject and
    /// hand it to physics as a dynamic body.
    pub fn spawn_content(
        &mut self,
        index: usize,
        physics: &mut impl PhysicsBackend,
    ) -> Result<VisualId, RotundaError> {
        let (node, subject) = self
            .nodes
            .get(index)
            .zip(self.subjects.get(index))
            .ok_or(RotundaError::NodeOutOfRange(index))?;
        let group = if node.clickable {
            Group::Clickables
        } else {
            Group::Scene
        };
        let label = node.content.clone();
        let above = self
            .visual(*subject)
            .map_or(Vec3::ZERO, |v| v.position)
            + Vec3::Y * self.ring_options.content_drop_height;

        let id =
            self.add_visual(label, above, self.ring_options.content_yaw, group);
        let _ = self.give_body(id, BodyType::Dynamic, physics)?;
        Ok(id)
    }

    /// Create a body for a panel and record the binding.
    pub fn give_body(
        &mut self,
        id: VisualId,
        kind: BodyType,
        physics: &mut impl PhysicsBackend,
    ) -> Result<BodyHandle, RotundaError> {
        let visual = self.visuals.get(id.0 as usize).ok_or_else(|| {
            RotundaError::InvalidBounds(format!("no visual {}", id.0))
        })?;
        let desc = BodyDesc {
            position: visual.position,
            rotation: Mat3::from_quat(visual.orientation),
            half_extents: visual.half_extents,
            kind,
        };
        if !desc.has_valid_bounds() {
            return Err(RotundaError::InvalidBounds(format!(
                "'{}' half extents {}",
                visual.label, visual.half_extents
            )));
        }

        let handle = physics.create_body(&desc)?;
        let _ = self.bodies.insert(id, handle);
        log::debug!(
            "body {} bound to '{}' ({kind:?})",
            handle.index(),
            visual.label
        );
        Ok(handle)
    }

    /// Copy every bound body's transform back onto its panel.
    pub fn sync_from_physics(
        &mut self,
        physics: &impl PhysicsBackend,
    ) -> Result<(), RotundaError> {
        for visual in &mut self.visuals {
            let Some(&handle) = self.bodies.get(&visual.id) else {
                continue;
            };
            visual.position = physics.body_position(handle)?;
            visual.orientation =
                Quat::from_mat3(&physics.body_rotation(handle)?);
        }
        Ok(())
    }

    fn hang_platform(
        ring: &RingLayout,
        options: &Options,
        physics: &mut impl PhysicsBackend,
    ) -> Result<Rig, RotundaError> {
        let centre = ring.centre();
        let reach =
            ring.radius() + options.text.depth * 2.0 + PLATFORM_MARGIN;
        let platform_at =
            Vec3::new(centre.x, options.physics.floor_y, centre.z);
        let roof_at = Vec3::new(centre.x, options.physics.roof_y, centre.z);

        let platform = physics.create_body(&BodyDesc {
            position: platform_at,
            rotation: Mat3::IDENTITY,
            half_extents: Vec3::new(reach, PLATFORM_HALF_HEIGHT, reach),
            kind: BodyType::Dynamic,
        })?;
        let roof = physics.create_body(&BodyDesc {
            position: roof_at,
            rotation: Mat3::IDENTITY,
            half_extents: Vec3::splat(ROOF_HALF_EXTENT),
            kind: BodyType::Static,
        })?;
        physics.create_joint(platform, roof, (platform_at + roof_at) * 0.5)?;
        Ok(Rig { platform, roof })
    }

    fn add_visual(
        &mut self,
        label: String,
        position: Vec3,
        yaw: f32,
        group: Group,
    ) -> VisualId {
        let id = VisualId(self.visuals.len() as u32);
        let half_extents = self.metrics.half_extents(&label);
        self.visuals.push(PanelVisual {
            id,
            label,
            position,
            orientation: Quat::from_rotation_y(yaw),
            half_extents,
            group,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::KinematicWorld;

    fn setup() -> (Stage, KinematicWorld) {
        let options = Options::default();
        let mut physics = KinematicWorld::new(&options.physics);
        let stage = Stage::build(&options, &mut physics).unwrap();
        (stage, physics)
    }

    #[test]
    fn test_build_places_static_subjects() {
        let (stage, physics) = setup();
        assert!(stage.subject_body(6).is_none());
        for i in 0..6 {
            let body = stage.subject_body(i).unwrap();
            assert_eq!(physics.body_type(body).unwrap(), BodyType::Static);
            let (slot, _) = stage.ring().slot(i);
            let pos = physics.body_position(body).unwrap();
            assert!((pos - slot).length() < 1e-5);
        }
    }

    #[test]
    fn test_platform_hangs_under_ring() {
        let (stage, mut physics) = setup();
        let Rig { platform, roof } = stage.rig();
        assert_eq!(physics.body_type(platform).unwrap(), BodyType::Dynamic);
        assert_eq!(physics.body_type(roof).unwrap(), BodyType::Static);
        // Rig bodies are not panels.
        assert_eq!(stage.visuals().len(), 6);

        for _ in 0..60 {
            physics.step(1.0 / 60.0);
        }
        let (top, bottom) = stage.cord(&physics).unwrap();
        let centre = stage.ring().centre();
        assert_eq!(top, Vec3::new(centre.x, 25.0, centre.z));
        assert_eq!(bottom, Vec3::new(centre.x, -8.0, centre.z));
    }

    #[test]
    fn test_spawn_content_groups_by_clickable() {
        let (mut stage, mut physics) = setup();
        let clickable = stage.spawn_content(0, &mut physics).unwrap();
        let plain = stage.spawn_content(2, &mut physics).unwrap();

        assert_eq!(stage.visual(clickable).unwrap().group, Group::Clickables);
        assert_eq!(stage.visual(plain).unwrap().group, Group::Scene);
        let clickables: Vec<_> = stage.group(Group::Clickables).collect();
        assert_eq!(clickables, [clickable]);

        let body = stage.body_of(clickable).unwrap();
        assert_eq!(physics.body_type(body).unwrap(), BodyType::Dynamic);
        let y = physics.body_position(body).unwrap().y;
        assert_eq!(y, 22.0);
    }

    #[test]
    fn test_spawn_content_out_of_range() {
        let (mut stage, mut physics) = setup();
        assert!(matches!(
            stage.spawn_content(6, &mut physics),
            Err(RotundaError::NodeOutOfRange(6))
        ));
    }

    #[test]
    fn test_sync_copies_body_transforms() {
        let (mut stage, mut physics) = setup();
        let id = stage.spawn_content(1, &mut physics).unwrap();
        physics.step(0.5);
        stage.sync_from_physics(&physics).unwrap();

        let body = stage.body_of(id).unwrap();
        let visual = stage.visual(id).unwrap();
        assert_eq!(visual.position, physics.body_position(body).unwrap());
        assert!(visual.position.y < 22.0);
    }

    #[test]
    fn test_empty_label_fails_fast() {
        let mut options = Options::default();
        options.nodes = vec![Node::new("", "content", false)];
        let mut physics = KinematicWorld::new(&options.physics);
        assert!(matches!(
            Stage::build(&options, &mut physics),
            Err(RotundaError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_no_nodes_rejected() {
        let mut options = Options::default();
        options.nodes.clear();
        let mut physics = KinematicWorld::new(&options.physics);
        assert!(matches!(
            Stage::build(&options, &mut physics),
            Err(RotundaError::EmptySequence)
        ));
    }

    #[cfg(feature = "rapier")]
    #[test]
    fn test_content_lands_instead_of_falling_through() {
        use crate::physics::RapierWorld;

        let options = Options::default();
        let mut physics = RapierWorld::new(&options.physics);
        let mut stage = Stage::build(&options, &mut physics).unwrap();
        let id = stage.spawn_content(0, &mut physics).unwrap();
        for _ in 0..300 {
            physics.step(1.0 / 60.0);
        }
        stage.sync_from_physics(&physics).unwrap();

        let y = stage.visual(id).unwrap().position.y;
        assert!(y < 22.0);
        assert!(y > options.physics.floor_y, "content fell through at {y}");
    }
}
