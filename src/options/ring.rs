use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ring", inline)]
#[serde(default)]
/// Layout of the subject ring and where content panels appear.
pub struct RingOptions {
    /// Circumference slack over the summed panel widths.
    #[schemars(title = "Spacing", range(min = 1.0, max = 3.0), extend("step" = 0.05))]
    pub spacing: f32,
    /// Height above its subject at which a content panel spawns.
    #[schemars(title = "Content Drop Height", range(min = 0.0, max = 60.0))]
    pub content_drop_height: f32,
    /// Yaw applied to content panels, in radians.
    #[schemars(skip)]
    pub content_yaw: f32,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            spacing: 1.1,
            content_drop_height: 22.0,
            content_yaw: std::f32::consts::PI / 18.0,
        }
    }
}
