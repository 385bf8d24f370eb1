//! Resize of the selection by dragging one of its bounding-box handles.

use super::{ActiveCapture, Interaction, Reaction, Sources};
use crate::action::{Action, ResizeCommand};
use crate::document::{Item, Mode};
use crate::handles::{AxisConstraint, ResizeHandle, anchor_position, axis_constraint, handle_position};
use kurbo::{Point, Rect};

/// State captured when a resize drag starts. Fixed for the whole drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub handle: ResizeHandle,
    /// Selection bounds at drag start.
    pub bbox: Rect,
    pub start_pos: Point,
    pub anchor: Point,
    pub dir: AxisConstraint,
    pub start_items: Vec<Item>,
}

impl ResizeSession {
    /// Capture a session for `handle` on a selection bounded by `bbox`.
    pub fn begin(handle: ResizeHandle, bbox: Rect, start_items: Vec<Item>) -> Self {
        Self {
            handle,
            bbox,
            start_pos: handle_position(handle, bbox),
            anchor: anchor_position(handle, bbox),
            dir: axis_constraint(handle),
            start_items,
        }
    }

    /// The resize step for a pointer at `moving_pos`.
    pub fn command(&self, moving_pos: Point) -> ResizeCommand {
        ResizeCommand {
            moving_pos,
            start_pos: self.start_pos,
            anchor: self.anchor,
            dir: self.dir,
            start_items: self.start_items.clone(),
        }
    }
}

/// Turns handle drags into a stream of [`Action::ResizeItems`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeItems;

impl Interaction for ResizeItems {
    fn name(&self) -> &'static str {
        "resize-items"
    }

    fn try_capture(
        &self,
        _position: Point,
        handle: Option<ResizeHandle>,
        sources: &Sources<'_>,
    ) -> Option<ActiveCapture> {
        let handle = handle?;
        let state = sources.state;
        if state.mode != Mode::Idle {
            return None;
        }
        let Some(bbox) = state.selection_bounds() else {
            log::warn!("Resize handle {} pressed with no selection bounds", handle);
            return None;
        };
        log::debug!("Resize started on {} over {:?}", handle, bbox);
        Some(ActiveCapture::Resize(ResizeSession::begin(
            handle,
            bbox,
            state.selected_items(),
        )))
    }

    fn on_capture_move(&self, capture: &ActiveCapture, position: Point) -> Reaction {
        match capture {
            ActiveCapture::Resize(session) => {
                Reaction::action(Action::ResizeItems(session.command(position)))
            }
        }
    }
}
