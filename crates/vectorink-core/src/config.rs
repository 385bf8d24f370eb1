//! Editor configuration snapshot: semantic tag registry and key bindings.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// A semantic tag that can be toggled on items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticTagConfig {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Extra semantic attribute fields the tag enables (e.g. `sem.dx`).
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl SemanticTagConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            description: None,
            attributes: Vec::new(),
        }
    }
}

/// Registry of semantic tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticsConfig {
    #[serde(default)]
    pub tags: Vec<SemanticTagConfig>,
}

/// Keys bound to the selection shortcuts. Names are normalised key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub delete: String,
    pub toggle_lock: String,
    pub to_idle: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            delete: "d".to_string(),
            toggle_lock: "b".to_string(),
            to_idle: "esc".to_string(),
        }
    }
}

/// Live editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub semantics: SemanticsConfig,
    pub keys: KeyBindings,
}

impl EditorConfig {
    /// Look up a semantic tag by name.
    pub fn find_tag(&self, name: &str) -> Option<&SemanticTagConfig> {
        self.semantics.tags.iter().find(|tag| tag.name == name)
    }

    /// Add a tag to the registry.
    pub fn with_tag(mut self, tag: SemanticTagConfig) -> Self {
        self.semantics.tags.push(tag);
        self
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a config from JSON. Missing sections take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Transient visual adjustment shown by the renderer while an interaction
/// is in progress. A new list replaces the previous one wholesale; the
/// interactions here only ever clear it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AdjustConfig {
    /// Highlight a box, e.g. the bounds being resized.
    Bbox { rect: Rect },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let config = EditorConfig::default();
        assert_eq!(config.keys.delete, "d");
        assert_eq!(config.keys.toggle_lock, "b");
        assert_eq!(config.keys.to_idle, "esc");
        assert!(config.semantics.tags.is_empty());
    }

    #[test]
    fn test_find_tag() {
        let config = EditorConfig::default()
            .with_tag(SemanticTagConfig::new("road"))
            .with_tag(SemanticTagConfig::new("building"));
        assert_eq!(config.find_tag("building").map(|t| t.name.as_str()), Some("building"));
        assert!(config.find_tag("river").is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let json = r##"{
            "semantics": { "tags": [ { "name": "road", "color": "#888888" } ] },
            "keys": { "delete": "x" }
        }"##;
        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.keys.delete, "x");
        assert_eq!(config.keys.to_idle, "esc");
        let road = config.find_tag("road").unwrap();
        assert_eq!(road.color.as_deref(), Some("#888888"));
        assert!(road.attributes.is_empty());
    }

    #[test]
    fn test_adjust_config_wire_form() {
        let json = r#"[ { "type": "bbox", "rect": { "x0": 0.0, "y0": 0.0, "x1": 4.0, "y1": 2.0 } } ]"#;
        let configs: Vec<AdjustConfig> = serde_json::from_str(json).unwrap();
        assert_eq!(
            configs,
            vec![AdjustConfig::Bbox {
                rect: Rect::new(0.0, 0.0, 4.0, 2.0)
            }]
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = EditorConfig::default().with_tag(SemanticTagConfig::new("label"));
        let back = EditorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
