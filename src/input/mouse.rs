/// Result of processing a mouse-up event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// Press and release without a drag in between.
    Click,
    /// Drag, or a release with no matching press.
    NoAction,
}

/// Tracks mouse position and drag state between press and release.
#[derive(Debug, Clone)]
pub(crate) struct InputState {
    pub mouse_pos: (f32, f32),
    pub is_dragging: bool,
    press_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Create a new input state with no active press.
    pub fn new() -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            is_dragging: false,
            press_pos: None,
        }
    }

    /// Record where the press happened.
    pub fn handle_mouse_down(&mut self) {
        self.press_pos = Some(self.mouse_pos);
        self.is_dragging = false;
    }

    /// Update cursor position.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_pos = (x, y);
    }

    /// Mark a drag once the cursor has travelled `threshold` pixels from
    /// the press position.
    pub fn update_drag(&mut self, threshold: f32) {
        if let Some((px, py)) = self.press_pos {
            let (dx, dy) = (self.mouse_pos.0 - px, self.mouse_pos.1 - py);
            if dx.hypot(dy) > threshold {
                self.is_dragging = true;
            }
        }
    }

    /// Process a mouse-up event and return what kind of click happened.
    pub fn process_mouse_up(&mut self) -> ClickResult {
        let had_press = self.press_pos.take().is_some();
        let was_dragging = std::mem::replace(&mut self.is_dragging, false);

        if had_press && !was_dragging {
            ClickResult::Click
        } else {
            ClickResult::NoAction
        }
    }
}
