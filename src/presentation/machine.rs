//! Click-through sequencing of drops and ring rotation.

use super::state::PresentationState;
use crate::animation::Interpolator;
use crate::error::RotundaError;
use crate::physics::{BodyType, PhysicsBackend};
use crate::stage::Stage;

/// Drives the presentation one tick at a time.
///
/// Clicks only change `state`/`index`; all scene and physics work happens
/// in [`tick`](Self::tick), one unit per call. The cursor starts before the
/// first node and a node's content is not revealed until the click that
/// selects it.
#[derive(Debug, Clone)]
pub struct PresentationStateMachine {
    state: PresentationState,
    index: Option<usize>,
    node_count: usize,
    interpolator: Interpolator,
}

impl PresentationStateMachine {
    /// Create a machine for `node_count` nodes using `interpolator` for the
    /// ring rotation.
    pub fn new(
        node_count: usize,
        interpolator: Interpolator,
    ) -> Result<Self, RotundaError> {
        if node_count == 0 {
            return Err(RotundaError::EmptySequence);
        }
        Ok(Self {
            state: PresentationState::default(),
            index: None,
            node_count,
            interpolator,
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Node in flight, or `None` before the first click.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Ring rotation progress.
    #[must_use]
    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// Apply a click. Returns whether it had any effect.
    ///
    /// Clicks are honoured only in `SubjectRotated` (start the next node)
    /// and `ContentDropped` (drop the subject). Anything else is discarded,
    /// not queued.
    pub fn click(&mut self) -> bool {
        if !self.state.accepts_click() {
            log::trace!("click ignored in {}", self.state);
            return false;
        }
        let next = if self.state == PresentationState::SubjectRotated {
            let last = self.node_count - 1;
            self.index = Some(self.index.map_or(0, |i| (i + 1).min(last)));
            PresentationState::ContentDrop
        } else {
            PresentationState::SubjectDrop
        };
        self.transition(next);
        true
    }

    /// Perform this frame's unit of work for the current state.
    pub fn tick(
        &mut self,
        stage: &mut Stage,
        physics: &mut impl PhysicsBackend,
    ) -> Result<(), RotundaError> {
        match self.state {
            PresentationState::ContentDrop => {
                let index = self.current()?;
                let _ = stage.spawn_content(index, physics)?;
                self.transition(PresentationState::ContentDropped);
            }
            PresentationState::SubjectDrop => {
                let index = self.current()?;
                let body = stage
                    .subject_body(index)
                    .ok_or(RotundaError::NodeOutOfRange(index))?;
                physics.set_body_type(body, BodyType::Dynamic)?;
                if index >= self.node_count - 1 {
                    self.transition(PresentationState::End);
                    log::info!(
                        "presentation finished after {} nodes",
                        index + 1
                    );
                } else {
                    self.transition(PresentationState::SubjectDropped);
                }
            }
            PresentationState::SubjectDropped => {
                let index = self.current()?;
                self.rotate_remaining(index, stage, physics)?;
            }
            PresentationState::ContentDropped
            | PresentationState::SubjectRotated
            | PresentationState::End => {}
        }
        Ok(())
    }

    /// One eased step of the ring rotation for every subject after `index`,
    /// or the hand-back to `SubjectRotated` once the budget is spent.
    fn rotate_remaining(
        &mut self,
        index: usize,
        stage: &Stage,
        physics: &mut impl PhysicsBackend,
    ) -> Result<(), RotundaError> {
        let progress = self.interpolator.interpolation();
        if progress > 1.0 {
            self.interpolator.reset();
            self.transition(PresentationState::SubjectRotated);
            return Ok(());
        }

        let delta = self.interpolator.delta();
        let ring = stage.ring();
        for ordinal in index + 1..self.node_count {
            let body = stage
                .subject_body(ordinal)
                .ok_or(RotundaError::NodeOutOfRange(ordinal))?;
            let rotation = ring.rotate(physics.body_rotation(body)?, delta);
            physics.set_body_position(body, ring.position_for(rotation))?;
            physics.set_body_rotation(body, rotation)?;
        }
        self.interpolator.next();
        Ok(())
    }

    fn current(&self) -> Result<usize, RotundaError> {
        // Only reachable through a click, which always sets the index.
        self.index.ok_or(RotundaError::NodeOutOfRange(0))
    }

    fn transition(&mut self, to: PresentationState) {
        log::debug!(
            "{} -> {} (index {:?})",
            self.state,
            to,
            self.index
        );
        self.state = to;
    }
}
