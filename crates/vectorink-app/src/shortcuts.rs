//! Keyboard shortcut registry and documentation.

use vectorink_core::{EditorConfig, normalize_key};

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub description: &'static str,
}

impl Shortcut {
    /// A shortcut for `key`, stored under its normalised name.
    pub fn new(key: &str, description: &'static str) -> Self {
        Self {
            key: normalize_key(key),
            description,
        }
    }

    /// Format the key for display (e.g., "Esc", "D").
    pub fn format(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Registry of the shortcuts bound by an editor configuration.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Shortcuts for the bindings in `config`.
    pub fn all(config: &EditorConfig) -> Vec<Shortcut> {
        vec![
            Shortcut::new(
                config.keys.delete.as_str(),
                "Delete selection (bbox mode, or a single locked item)",
            ),
            Shortcut::new(config.keys.toggle_lock.as_str(), "Toggle lock on selection"),
            Shortcut::new(config.keys.to_idle.as_str(), "Return to idle and clear guides"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all(config: &EditorConfig) {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all(config) {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
