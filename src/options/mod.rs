//! Presentation options with TOML preset support.
//!
//! Everything tweakable about a presentation (the node list, ring layout,
//! text metrics, rotation timing, physics and input handling) lives here.
//! Options serialize to/from TOML so a whole talk can be described in one
//! file.

mod input;
mod physics;
mod ring;
mod sequence;
mod text;

use std::path::Path;

pub use input::InputOptions;
pub use physics::PhysicsOptions;
pub use ring::RingOptions;
use schemars::JsonSchema;
pub use sequence::SequenceOptions;
use serde::{Deserialize, Serialize};
pub use text::TextOptions;

use crate::error::RotundaError;
use crate::stage::Node;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[sequence]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Ring rotation timing.
    pub sequence: SequenceOptions,
    /// Ring layout.
    pub ring: RingOptions,
    /// Panel text metrics.
    pub text: TextOptions,
    /// Drop simulation parameters.
    pub physics: PhysicsOptions,
    /// Pointer and keyboard handling.
    pub input: InputOptions,
    /// The ordered nodes to present.
    pub nodes: Vec<Node>,
}

impl Default for Options {
    fn default() -> Self {
        let nodes = [true, true, false, true, false, false]
            .into_iter()
            .map(|clickable| {
                Node::new("Hello World", "Hello World", clickable)
            })
            .collect();
        Self {
            sequence: SequenceOptions::default(),
            ring: RingOptions::default(),
            text: TextOptions::default(),
            physics: PhysicsOptions::default(),
            input: InputOptions::default(),
            nodes,
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RotundaError> {
        let content =
            std::fs::read_to_string(path).map_err(RotundaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RotundaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RotundaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RotundaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RotundaError::Io)?;
        }
        std::fs::write(path, content).map_err(RotundaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn default_nodes_match_clickable_pattern() {
        let opts = Options::default();
        let pattern: Vec<bool> =
            opts.nodes.iter().map(|n| n.clickable).collect();
        assert_eq!(pattern, [true, true, false, true, false, false]);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[sequence]
rotation_frames = 90
easing = "linear"

[[nodes]]
subject = "Intro"
content = "Welcome to the stage"
clickable = true

[[nodes]]
subject = "Outro"
content = "Thanks"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.sequence.rotation_frames, 90);
        assert_eq!(opts.sequence.easing, EasingFunction::Linear);
        assert_eq!(opts.nodes.len(), 2);
        assert_eq!(opts.nodes[0].subject, "Intro");
        assert!(!opts.nodes[1].clickable);
        // Everything else should be default
        assert_eq!(opts.ring.content_drop_height, 22.0);
        assert_eq!(opts.physics.gravity, -9.8);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.input.lookup("Space"), Some(KeyAction::Advance));
        assert_eq!(opts.input.lookup("KeyZ"), None);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("rotunda-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.sequence.rotation_frames = 12;
        opts.save(&dir.join("talk.toml")).unwrap();

        let loaded = Options::load(&dir.join("talk.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["talk".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("rotunda-bad-preset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[sequence\nrotation_frames = ").unwrap();

        assert!(matches!(
            Options::load(&path),
            Err(RotundaError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(RotundaError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("sequence"));
        assert!(props.contains_key("ring"));
        assert!(props.contains_key("physics"));
        assert!(props.contains_key("nodes"));

        // Skipped fields should be absent
        let ring = &props["ring"]["properties"];
        assert!(ring.get("spacing").is_some());
        assert!(ring.get("content_yaw").is_none());
        let input = &props["input"]["properties"];
        assert!(input.get("keybindings").is_none());
    }
}
