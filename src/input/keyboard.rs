use serde::{Deserialize, Serialize};

/// Presentation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [input.keybindings]
/// Space = "advance"
/// PageDown = "advance"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Same as a click: start the next node or drop the current subject.
    Advance,
}
