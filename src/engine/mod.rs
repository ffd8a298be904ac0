//! The presentation engine: one owner for stage, physics and sequencing.

pub mod command;

use std::path::Path;

pub use command::PresentationCommand;
use glam::Vec2;

use crate::animation::Interpolator;
use crate::error::RotundaError;
use crate::options::Options;
#[cfg(not(feature = "rapier"))]
use crate::physics::KinematicWorld;
use crate::physics::PhysicsBackend;
#[cfg(feature = "rapier")]
use crate::physics::RapierWorld;
use crate::presentation::{PresentationState, PresentationStateMachine};
use crate::stage::Stage;

/// Physics backend used by [`PresentationEngine::new`].
#[cfg(feature = "rapier")]
pub type DefaultPhysics = RapierWorld;
/// Physics backend used by [`PresentationEngine::new`].
#[cfg(not(feature = "rapier"))]
pub type DefaultPhysics = KinematicWorld;

/// Runs a presentation frame by frame.
///
/// All mutable presentation state lives here and is only touched through
/// `&mut self`: [`execute`](Self::execute) records input, and
/// [`frame`](Self::frame) consumes it and advances the scene. A host
/// with input on another thread must forward commands to the thread that
/// calls `frame`.
pub struct PresentationEngine<P: PhysicsBackend = DefaultPhysics> {
    options: Options,
    stage: Stage,
    physics: P,
    machine: PresentationStateMachine,
    /// Latest unconsumed click; several clicks between frames count once.
    advance_requested: bool,
    pointer: Vec2,
    frame_count: u64,
}

impl PresentationEngine<DefaultPhysics> {
    /// Create an engine backed by [`DefaultPhysics`].
    pub fn new(options: Options) -> Result<Self, RotundaError> {
        let physics = DefaultPhysics::new(&options.physics);
        Self::with_physics(options, physics)
    }

    /// Load options from a TOML file and create an engine.
    pub fn from_file(path: &Path) -> Result<Self, RotundaError> {
        let options = Options::load(path)?;
        log::info!("Loaded presentation '{}'", path.display());
        Self::new(options)
    }
}

impl<P: PhysicsBackend> PresentationEngine<P> {
    /// Create an engine on top of an external physics backend.
    pub fn with_physics(
        options: Options,
        mut physics: P,
    ) -> Result<Self, RotundaError> {
        let stage = Stage::build(&options, &mut physics)?;
        let interpolator = Interpolator::with_easing(
            options.sequence.rotation_frames,
            options.sequence.easing,
        )?;
        let machine =
            PresentationStateMachine::new(stage.nodes().len(), interpolator)?;

        log::info!(
            "presentation ready: {} nodes, {} rotation frames",
            stage.nodes().len(),
            options.sequence.rotation_frames
        );
        Ok(Self {
            options,
            stage,
            physics,
            machine,
            advance_requested: false,
            pointer: Vec2::ZERO,
            frame_count: 0,
        })
    }

    /// Apply a command from the input layer.
    pub fn execute(&mut self, command: PresentationCommand) {
        match command {
            PresentationCommand::Advance => self.advance_requested = true,
            PresentationCommand::PointerMoved { ndc } => self.pointer = ndc,
        }
    }

    /// Run one frame: apply a pending click, step physics by `dt` seconds,
    /// copy body transforms onto panels, then tick the sequence.
    pub fn frame(&mut self, dt: f32) -> Result<(), RotundaError> {
        if std::mem::take(&mut self.advance_requested) {
            let _ = self.machine.click();
        }
        if dt > 0.0 {
            self.physics.step(dt);
        }
        self.stage.sync_from_physics(&self.physics)?;
        self.machine.tick(&mut self.stage, &mut self.physics)?;
        self.frame_count += 1;
        Ok(())
    }

    /// Current sequence state.
    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.machine.state()
    }

    /// Node in flight, or `None` before the first click.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.machine.index()
    }

    /// Whether the last node has been dropped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.machine.state().is_terminal()
    }

    /// Panels and groups.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Physics backend.
    #[must_use]
    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// Options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Last pointer position in normalized device coordinates.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Frames run so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Group;

    const DT: f32 = 1.0 / 60.0;

    fn engine() -> PresentationEngine {
        PresentationEngine::new(Options::default()).unwrap()
    }

    fn run_until_idle(engine: &mut PresentationEngine) {
        for _ in 0..200 {
            engine.frame(DT).unwrap();
            if !matches!(
                engine.state(),
                PresentationState::SubjectDropped
                    | PresentationState::ContentDrop
                    | PresentationState::SubjectDrop
            ) {
                return;
            }
        }
    }

    #[test]
    fn test_click_applies_on_next_frame() {
        let mut e = engine();
        e.execute(PresentationCommand::Advance);
        assert_eq!(e.state(), PresentationState::SubjectRotated);

        e.frame(DT).unwrap();
        // The click and the ContentDrop tick land in the same frame.
        assert_eq!(e.state(), PresentationState::ContentDropped);
        assert_eq!(e.index(), Some(0));
        assert_eq!(e.stage().group(Group::Clickables).count(), 1);
    }

    #[test]
    fn test_clicks_between_frames_coalesce() {
        let mut e = engine();
        e.execute(PresentationCommand::Advance);
        e.execute(PresentationCommand::Advance);
        e.frame(DT).unwrap();
        assert_eq!(e.state(), PresentationState::ContentDropped);
        e.frame(DT).unwrap();
        assert_eq!(e.state(), PresentationState::ContentDropped);
    }

    #[test]
    fn test_full_presentation_reaches_end() {
        let mut e = engine();
        let mut clicks = 0;
        while !e.is_finished() && clicks < 100 {
            e.execute(PresentationCommand::Advance);
            clicks += 1;
            run_until_idle(&mut e);
        }
        assert!(e.is_finished());
        assert_eq!(clicks, 12);
        assert_eq!(e.index(), Some(5));
        // Six subjects plus six content panels.
        assert_eq!(e.stage().visuals().len(), 12);
    }

    #[test]
    fn test_content_panels_fall() {
        let mut e = engine();
        e.execute(PresentationCommand::Advance);
        e.frame(DT).unwrap();
        let content = e.stage().visuals()[6].id;
        let start = e.stage().visual(content).unwrap().position.y;
        for _ in 0..30 {
            e.frame(DT).unwrap();
        }
        assert!(e.stage().visual(content).unwrap().position.y < start);
    }

    #[test]
    fn test_pointer_tracking() {
        let mut e = engine();
        e.execute(PresentationCommand::PointerMoved {
            ndc: Vec2::new(0.25, -0.5),
        });
        assert_eq!(e.pointer(), Vec2::new(0.25, -0.5));
        assert_eq!(e.state(), PresentationState::SubjectRotated);
    }

    #[test]
    fn test_runs_on_any_backend() {
        use crate::physics::KinematicWorld;

        let options = Options::default();
        let physics = KinematicWorld::new(&options.physics);
        let mut e = PresentationEngine::with_physics(options, physics).unwrap();
        e.execute(PresentationCommand::Advance);
        e.frame(DT).unwrap();
        assert_eq!(e.state(), PresentationState::ContentDropped);

        let (roof, platform) = e.stage().cord(e.physics()).unwrap();
        assert!(roof.y > platform.y);
    }

    #[test]
    fn test_from_file_keeps_loaded_options() {
        let dir = std::env::temp_dir()
            .join(format!("rotunda-engine-{}", std::process::id()));
        let path = dir.join("short.toml");
        let mut options = Options::default();
        options.sequence.rotation_frames = 8;
        options.nodes.truncate(2);
        options.save(&path).unwrap();

        let e = PresentationEngine::from_file(&path).unwrap();
        assert_eq!(e.options(), &options);
        assert_eq!(e.stage().nodes().len(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_zero_rotation_frames_rejected() {
        let mut options = Options::default();
        options.sequence.rotation_frames = 0;
        assert!(matches!(
            PresentationEngine::new(options),
            Err(RotundaError::InvalidFrameBudget)
        ));
    }
}
