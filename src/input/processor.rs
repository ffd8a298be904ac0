//! Converts raw platform events into presentation commands.
//!
//! The `InputProcessor` owns all transient input state (pointer position,
//! press/drag tracking, viewport size) and the key-binding map. It is the
//! only thing that sits between raw window events and
//! [`PresentationEngine::execute`](crate::engine::PresentationEngine::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::{ClickResult, InputState};
use crate::engine::PresentationCommand;
use crate::options::InputOptions;

/// Converts raw window events into [`PresentationCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input.handle_event(event) {
///     engine.execute(cmd);
/// }
/// if let Some(cmd) = input.handle_key_press("Space") {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Pointer tracking and click detection.
    state: InputState,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Viewport size in physical pixels.
    viewport: Vec2,
    /// Bindings and drag threshold.
    options: InputOptions,
}

impl InputProcessor {
    /// Create a processor for a viewport of the given size.
    #[must_use]
    pub fn new(options: InputOptions, width: f32, height: f32) -> Self {
        Self {
            state: InputState::new(),
            mouse_pressed: false,
            viewport: Vec2::new(width, height),
            options,
        }
    }

    /// Current cursor position in normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    #[must_use]
    pub fn pointer_ndc(&self) -> Vec2 {
        let (x, y) = self.state.mouse_pos;
        if self.viewport.min_element() <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (x / self.viewport.x) * 2.0 - 1.0,
            -(y / self.viewport.y) * 2.0 + 1.0,
        )
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<PresentationCommand> {
        self.options.lookup(key).map(|action| match action {
            KeyAction::Advance => PresentationCommand::Advance,
        })
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<PresentationCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.state.handle_mouse_position(x, y);
                if self.mouse_pressed {
                    self.state.update_drag(self.options.drag_threshold);
                }
                Some(PresentationCommand::PointerMoved {
                    ndc: self.pointer_ndc(),
                })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Resized { width, height } => {
                self.viewport = Vec2::new(width, height);
                None
            }
        }
    }

    /// Mouse button press/release. A release that completes a click
    /// advances the presentation.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<PresentationCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.state.handle_mouse_down();
            self.mouse_pressed = true;
            return None;
        }

        self.mouse_pressed = false;
        match self.state.process_mouse_up() {
            ClickResult::Click => Some(PresentationCommand::Advance),
            ClickResult::NoAction => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> InputProcessor {
        InputProcessor::new(InputOptions::default(), 800.0, 600.0)
    }

    fn press(
        p: &mut InputProcessor,
        pressed: bool,
    ) -> Option<PresentationCommand> {
        p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        })
    }

    #[test]
    fn test_click_advances() {
        let mut p = processor();
        assert_eq!(press(&mut p, true), None);
        assert_eq!(press(&mut p, false), Some(PresentationCommand::Advance));
    }

    #[test]
    fn test_drag_does_not_advance() {
        let mut p = processor();
        let _ = press(&mut p, true);
        let _ = p.handle_event(InputEvent::CursorMoved { x: 200.0, y: 0.0 });
        assert_eq!(press(&mut p, false), None);
        assert!(!p.mouse_pressed);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut p = processor();
        for pressed in [true, false] {
            let cmd = p.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed,
            });
            assert_eq!(cmd, None);
        }
    }

    #[test]
    fn test_pointer_ndc() {
        let mut p = processor();
        let cmd =
            p.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert_eq!(
            cmd,
            Some(PresentationCommand::PointerMoved { ndc: Vec2::ZERO })
        );

        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(p.pointer_ndc(), Vec2::new(-1.0, 1.0));

        let _ = p.handle_event(InputEvent::Resized {
            width: 400.0,
            height: 300.0,
        });
        let _ = p.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert_eq!(p.pointer_ndc(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_key_bindings() {
        let p = processor();
        assert_eq!(
            p.handle_key_press("Space"),
            Some(PresentationCommand::Advance)
        );
        assert_eq!(p.handle_key_press("KeyQ"), None);
    }
}
