use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer and keyboard handling.
pub struct InputOptions {
    /// Pointer travel (pixels) while pressed before a release stops
    /// counting as a click.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 50.0))]
    pub drag_threshold: f32,
    /// Key string → action (`winit::keyboard::KeyCode` debug format).
    #[schemars(skip)]
    pub keybindings: HashMap<String, KeyAction>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            drag_threshold: 4.0,
            keybindings: HashMap::from([
                ("Space".into(), KeyAction::Advance),
                ("ArrowRight".into(), KeyAction::Advance),
                ("Enter".into(), KeyAction::Advance),
            ]),
        }
    }
}

impl InputOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.keybindings.get(key).copied()
    }
}
