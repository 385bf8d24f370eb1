//! Raw input events and the inbound event queue.

use crate::handles::ResizeHandle;
use crate::intent::UiIntent;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Pointer event in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Down {
        position: Point,
        /// Resize handle under the pointer, resolved by the hit-testing layer.
        #[serde(default)]
        handle: Option<ResizeHandle>,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// Check if this is a press of the shortcut key `key`. Both names are
    /// normalised, so a binding may be written as `Escape` or `D`.
    pub fn is_shortcut(&self, key: &str) -> bool {
        match self {
            KeyEvent::Pressed(pressed) => normalize_key(pressed) == normalize_key(key),
            KeyEvent::Released(_) => false,
        }
    }
}

/// Normalise a platform key name to the binding form used in config
/// (`Escape` becomes `esc`, letters are lower-case).
pub fn normalize_key(key: &str) -> String {
    match key {
        "Escape" | "Esc" | "esc" => "esc".to_string(),
        other => other.to_lowercase(),
    }
}

/// An event from any of the raw input sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    Intent(UiIntent),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}

impl From<UiIntent> for InputEvent {
    fn from(intent: UiIntent) -> Self {
        InputEvent::Intent(intent)
    }
}

/// Inbound events from all sources, kept in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.events.push_back(event.into());
    }

    pub fn push_key(&mut self, event: KeyEvent) {
        self.events.push_back(event.into());
    }

    pub fn push_intent(&mut self, intent: UiIntent) {
        self.events.push_back(intent.into());
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<InputEvent> for InputQueue {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalisation() {
        assert_eq!(normalize_key("Escape"), "esc");
        assert_eq!(normalize_key("D"), "d");
        assert_eq!(normalize_key("b"), "b");
    }

    #[test]
    fn test_shortcut_matches_presses_only() {
        assert!(KeyEvent::Pressed("D".to_string()).is_shortcut("d"));
        assert!(KeyEvent::Pressed("Escape".to_string()).is_shortcut("esc"));
        assert!(!KeyEvent::Released("d".to_string()).is_shortcut("d"));
        assert!(!KeyEvent::Pressed("b".to_string()).is_shortcut("d"));
    }

    #[test]
    fn test_shortcut_binding_is_normalised() {
        assert!(KeyEvent::Pressed("Escape".to_string()).is_shortcut("Escape"));
        assert!(KeyEvent::Pressed("esc".to_string()).is_shortcut("Esc"));
        assert!(KeyEvent::Pressed("d".to_string()).is_shortcut("D"));
    }

    #[test]
    fn test_queue_keeps_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push_key(KeyEvent::Pressed("d".to_string()));
        queue.push_pointer(PointerEvent::Move { position: Point::new(1.0, 2.0) });
        queue.push_intent(UiIntent::ToggleLock);

        assert_eq!(queue.len(), 3);
        assert!(matches!(queue.pop(), Some(InputEvent::Key(_))));
        assert!(matches!(queue.pop(), Some(InputEvent::Pointer(_))));
        assert!(matches!(queue.pop(), Some(InputEvent::Intent(UiIntent::ToggleLock))));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pointer_down_json() {
        let event: InputEvent = serde_json::from_str(
            r#"{ "pointer": { "type": "down", "position": { "x": 30.0, "y": 30.0 }, "handle": "se-resize" } }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            InputEvent::Pointer(PointerEvent::Down {
                position: Point::new(30.0, 30.0),
                handle: Some(ResizeHandle::SouthEast),
            })
        );

        let err = serde_json::from_str::<InputEvent>(
            r#"{ "pointer": { "type": "down", "position": { "x": 0.0, "y": 0.0 }, "handle": "spin" } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid resizer: spin"));
    }
}
