//! Sequence states and which of them accept clicks.

use std::fmt;

/// Where the click-through sequence currently is.
///
/// One cycle per node runs
/// `SubjectRotated → ContentDrop → ContentDropped → SubjectDrop →
/// SubjectDropped → SubjectRotated`, except for the last node, whose
/// `SubjectDrop` ends the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationState {
    /// Spawn the current node's content panel on the next tick.
    ContentDrop,
    /// Content is falling or resting; waiting for a click.
    ContentDropped,
    /// Release the current subject to physics on the next tick.
    SubjectDrop,
    /// Rotating the remaining subjects one slot toward the front.
    SubjectDropped,
    /// Idle with the next subject in front; waiting for a click.
    #[default]
    SubjectRotated,
    /// Every node has been presented.
    End,
}

impl PresentationState {
    /// Whether a click is accepted in this state.
    #[must_use]
    pub fn accepts_click(self) -> bool {
        matches!(self, Self::SubjectRotated | Self::ContentDropped)
    }

    /// Whether this state never transitions again.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::End
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ContentDrop => "content_drop",
            Self::ContentDropped => "content_dropped",
            Self::SubjectDrop => "subject_drop",
            Self::SubjectDropped => "subject_dropped",
            Self::SubjectRotated => "subject_rotated",
            Self::End => "end",
        }
    }
}

impl fmt::Display for PresentationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
