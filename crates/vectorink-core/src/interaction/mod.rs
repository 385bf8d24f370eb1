//! Interaction components.
//!
//! Each component reads the latest snapshot and proposes actions; none of
//! them writes the document. Pointer drags are claimed through an explicit
//! [`ActiveCapture`] held by the [`Engine`](crate::engine::Engine), so only
//! one drag interaction can own the pointer at a time.

mod resize;
mod selection;

pub use resize::{ResizeItems, ResizeSession};
pub use selection::SelInteraction;

use crate::action::Action;
use crate::config::{AdjustConfig, EditorConfig};
use crate::document::{DocumentState, Mode};
use crate::handles::ResizeHandle;
use crate::input::InputEvent;
use kurbo::Point;

/// Read-only snapshots an interaction sees for one event.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub state: &'a DocumentState,
    pub config: &'a EditorConfig,
}

impl<'a> Sources<'a> {
    pub fn new(state: &'a DocumentState, config: &'a EditorConfig) -> Self {
        Self { state, config }
    }
}

/// What an interaction proposes in response to one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reaction {
    pub actions: Vec<Action>,
    pub next_mode: Option<Mode>,
    pub next_adjust_configs: Option<Vec<AdjustConfig>>,
}

impl Reaction {
    /// A reaction carrying a single action.
    pub fn action(action: Action) -> Self {
        Self {
            actions: vec![action],
            ..Self::default()
        }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.next_mode.is_none() && self.next_adjust_configs.is_none()
    }
}

/// Per-drag state of the interaction that owns the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveCapture {
    Resize(ResizeSession),
}

impl ActiveCapture {
    pub fn name(&self) -> &'static str {
        match self {
            ActiveCapture::Resize(_) => "resize",
        }
    }
}

/// An interaction component.
pub trait Interaction {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// React to any event, given the current snapshots.
    fn on_event(&self, _event: &InputEvent, _sources: &Sources<'_>) -> Reaction {
        Reaction::default()
    }

    /// Offered every pointer-down while no capture is open. Returning a
    /// capture claims the pointer until the next pointer-up.
    fn try_capture(
        &self,
        _position: Point,
        _handle: Option<ResizeHandle>,
        _sources: &Sources<'_>,
    ) -> Option<ActiveCapture> {
        None
    }

    /// Pointer moved while this interaction owns `capture`.
    fn on_capture_move(&self, _capture: &ActiveCapture, _position: Point) -> Reaction {
        Reaction::default()
    }
}
