//! The presentation's complete interactive vocabulary.
//!
//! Whether it came from a click, a key press, or a script, every input the
//! engine reacts to is a `PresentationCommand` passed to
//! [`PresentationEngine::execute`](super::PresentationEngine::execute).

use glam::Vec2;

/// A request from the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresentationCommand {
    /// Click: start the next node or drop the current subject.
    Advance,
    /// Pointer moved, in normalized device coordinates.
    PointerMoved {
        /// x right, y up, both in [-1, 1].
        ndc: Vec2,
    },
}
