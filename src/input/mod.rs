//! Input handling: event types, click detection, and the input processor
//! that converts raw window events into presentation commands.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable actions.
pub mod keyboard;
/// Press/release click detection and pointer tracking.
pub(crate) mod mouse;
/// Converts raw events into presentation commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
