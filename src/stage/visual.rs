use glam::{Quat, Vec3};

use crate::options::TextOptions;

/// Stable identifier of a panel on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub u32);

/// Scene group a panel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Ring labels.
    Subjects,
    /// Content panels that respond to hover.
    Clickables,
    /// Plain content panels.
    Scene,
}

/// A text panel as the renderer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelVisual {
    /// Identifier, also the key into the body binding table.
    pub id: VisualId,
    /// Rendered text.
    pub label: String,
    /// World-space centre.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// Half size of the panel's bounding box.
    pub half_extents: Vec3,
    /// Scene group.
    pub group: Group,
}

/// Bounding-box estimate for extruded, centred text.
///
/// Panels are sized from the glyph count rather than real font outlines:
/// width is `chars · size · advance`, height is `size`, depth is the
/// extrusion depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    size: f32,
    depth: f32,
    advance: f32,
}

impl TextMetrics {
    /// Metrics from text options.
    #[must_use]
    pub fn new(options: &TextOptions) -> Self {
        Self {
            size: options.size,
            depth: options.depth,
            advance: options.advance,
        }
    }

    /// Full width of a rendered label.
    #[must_use]
    pub fn width(&self, label: &str) -> f32 {
        label.chars().count() as f32 * self.size * self.advance
    }

    /// Half extents of a rendered label's bounding box.
    #[must_use]
    pub fn half_extents(&self, label: &str) -> Vec3 {
        Vec3::new(self.width(label), self.size, self.depth) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_extents() {
        let metrics = TextMetrics::new(&TextOptions {
            size: 2.0,
            depth: 0.5,
            advance: 0.5,
        });
        assert_eq!(metrics.width("Hello"), 5.0);
        assert_eq!(metrics.half_extents("Hello"), Vec3::new(2.5, 1.0, 0.25));
        // Multi-byte characters count once.
        assert_eq!(metrics.width("héllo"), 5.0);
    }

    #[test]
    fn test_empty_label_has_no_width() {
        let metrics = TextMetrics::new(&TextOptions::default());
        assert_eq!(metrics.width(""), 0.0);
    }
}
