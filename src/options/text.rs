use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Text", inline)]
#[serde(default)]
/// Extruded text metrics used to size panels.
pub struct TextOptions {
    /// Glyph height.
    #[schemars(title = "Size", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub size: f32,
    /// Extrusion depth.
    #[schemars(title = "Depth", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub depth: f32,
    /// Average glyph advance as a fraction of `size`.
    #[schemars(skip)]
    pub advance: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            size: 2.0,
            depth: 0.5,
            advance: 0.7,
        }
    }
}
