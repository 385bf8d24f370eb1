//! Event dispatch: feeds every input event to the interaction components in
//! declaration order and merges what they propose.

use crate::action::Action;
use crate::config::AdjustConfig;
use crate::document::Mode;
use crate::handles::ResizeHandle;
use crate::input::{InputEvent, InputQueue, PointerEvent};
use crate::interaction::{ActiveCapture, Interaction, Reaction, ResizeItems, SelInteraction, Sources};
use kurbo::Point;

/// Merged output of one or more dispatched events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outbox {
    /// Document mutations, in emission order.
    pub actions: Vec<Action>,
    /// Requested mode transitions.
    pub modes: Vec<Mode>,
    /// Replacement adjustment lists, emitted alongside mode transitions.
    pub adjust_configs: Vec<Vec<AdjustConfig>>,
}

impl Outbox {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.modes.is_empty() && self.adjust_configs.is_empty()
    }

    fn absorb(&mut self, reaction: Reaction) {
        self.actions.extend(reaction.actions);
        self.modes.extend(reaction.next_mode);
        self.adjust_configs.extend(reaction.next_adjust_configs);
    }

    /// Append another outbox after this one.
    pub fn extend(&mut self, other: Outbox) {
        self.actions.extend(other.actions);
        self.modes.extend(other.modes);
        self.adjust_configs.extend(other.adjust_configs);
    }
}

/// The open pointer capture and the interaction that owns it.
struct Capture {
    owner: usize,
    capture: ActiveCapture,
}

/// Dispatches input events to the registered interactions.
pub struct Engine {
    interactions: Vec<Box<dyn Interaction>>,
    capture: Option<Capture>,
}

impl Default for Engine {
    /// An engine with the standard interactions: resize, then selection.
    fn default() -> Self {
        Self::new()
            .with_interaction(ResizeItems)
            .with_interaction(SelInteraction)
    }
}

impl Engine {
    /// Create an engine with no interactions.
    pub fn new() -> Self {
        Self {
            interactions: Vec::new(),
            capture: None,
        }
    }

    /// Register an interaction. Output is merged in registration order.
    pub fn with_interaction(mut self, interaction: impl Interaction + 'static) -> Self {
        self.interactions.push(Box::new(interaction));
        self
    }

    /// The capture currently owning the pointer, if any.
    pub fn active_capture(&self) -> Option<&ActiveCapture> {
        self.capture.as_ref().map(|c| &c.capture)
    }

    /// Check if a pointer drag is currently captured.
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Drop any open capture, e.g. after an external mode reset.
    pub fn reset_capture(&mut self) {
        self.end_capture("reset");
    }

    /// Dispatch one event against the given snapshots.
    ///
    /// Every interaction sees the event before this returns, so no two raw
    /// events interleave.
    pub fn dispatch(&mut self, event: &InputEvent, sources: &Sources<'_>) -> Outbox {
        log::trace!("Dispatching {:?}", event);
        let mut outbox = Outbox::default();

        if let InputEvent::Pointer(pointer) = event {
            match pointer {
                PointerEvent::Down { position, handle } => {
                    self.begin_capture(*position, *handle, sources)
                }
                PointerEvent::Move { position } => {
                    outbox.absorb(self.captured_move(*position, sources));
                }
                PointerEvent::Up { .. } => self.end_capture("pointer up"),
            }
        }

        for interaction in &self.interactions {
            outbox.absorb(interaction.on_event(event, sources));
        }

        if !outbox.modes.is_empty() {
            self.end_capture("mode transition");
        }
        for action in &outbox.actions {
            log::debug!("Emitting {}", action.name());
        }
        outbox
    }

    /// Drain `queue` in arrival order against one snapshot.
    pub fn run(&mut self, queue: &mut InputQueue, sources: &Sources<'_>) -> Outbox {
        let mut outbox = Outbox::default();
        while let Some(event) = queue.pop() {
            outbox.extend(self.dispatch(&event, sources));
        }
        outbox
    }

    fn begin_capture(&mut self, position: Point, handle: Option<ResizeHandle>, sources: &Sources<'_>) {
        if let Some(open) = &self.capture {
            log::warn!(
                "Pointer down while {} capture is open; ignoring",
                open.capture.name()
            );
            return;
        }
        self.capture = self
            .interactions
            .iter()
            .enumerate()
            .find_map(|(owner, interaction)| {
                interaction
                    .try_capture(position, handle, sources)
                    .map(|capture| Capture { owner, capture })
            });
        if let Some(open) = &self.capture {
            log::debug!(
                "{} captured the pointer ({})",
                self.interactions[open.owner].name(),
                open.capture.name()
            );
        }
    }

    fn captured_move(&mut self, position: Point, sources: &Sources<'_>) -> Reaction {
        let Some(open) = &self.capture else {
            return Reaction::default();
        };
        if sources.state.mode != Mode::Idle {
            self.end_capture("mode changed");
            return Reaction::default();
        }
        self.interactions[open.owner].on_capture_move(&open.capture, position)
    }

    fn end_capture(&mut self, reason: &str) {
        if let Some(open) = self.capture.take() {
            log::debug!("{} capture released: {}", open.capture.name(), reason);
        }
    }
}
