use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sequence", inline)]
#[serde(default)]
/// Timing of the scripted ring rotation.
pub struct SequenceOptions {
    /// Frames spent rotating the ring after each subject drop.
    #[schemars(title = "Rotation Frames", range(min = 1, max = 600))]
    pub rotation_frames: u32,
    /// Easing curve for the ring rotation.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            rotation_frames: 40,
            easing: EasingFunction::DEFAULT,
        }
    }
}
