use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Physics", inline)]
#[serde(default)]
/// Gravity and the hanging platform that catches dropped panels.
pub struct PhysicsOptions {
    /// Vertical acceleration (negative = down).
    #[schemars(title = "Gravity", range(min = -50.0, max = 0.0))]
    pub gravity: f32,
    /// Height of the platform that dropped panels settle on.
    #[schemars(title = "Platform Height", range(min = -30.0, max = 0.0))]
    pub floor_y: f32,
    /// Height of the fixed roof the platform hangs from.
    #[schemars(title = "Roof Height", range(min = 1.0, max = 60.0))]
    pub roof_y: f32,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            floor_y: -8.0,
            roof_y: 25.0,
        }
    }
}
