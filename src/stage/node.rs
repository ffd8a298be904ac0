use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One step of the presentation: a ring label and the panel it reveals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Node {
    /// Short label shown on the ring.
    pub subject: String,
    /// Detail text revealed above the subject.
    pub content: String,
    /// Whether the content panel joins the clickable (hoverable) group.
    #[serde(default)]
    pub clickable: bool,
}

impl Node {
    /// Create a node.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        content: impl Into<String>,
        clickable: bool,
    ) -> Self {
        Self {
            subject: subject.into(),
            content: content.into(),
            clickable,
        }
    }
}
