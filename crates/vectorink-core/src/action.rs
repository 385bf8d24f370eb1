//! Document-mutation actions emitted by the interaction layer.
//!
//! Actions are proposals: the external reducer is the only writer of the
//! document and decides how (and whether) to apply them.

use crate::config::SemanticTagConfig;
use crate::document::{Item, ItemId};
use crate::field::{CoercionError, FieldValue};
use crate::handles::AxisConstraint;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Z-order change requested from the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZOp {
    /// Move to the back of the stack.
    Bottom,
    /// One layer towards the back.
    Dec,
    /// One layer towards the front.
    Inc,
    /// Move to the front of the stack.
    Top,
}

impl ZOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZOp::Bottom => "bottom",
            ZOp::Dec => "dec",
            ZOp::Inc => "inc",
            ZOp::Top => "top",
        }
    }
}

impl fmt::Display for ZOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that is not a z-order operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown z-order operation: {0:?}")]
pub struct UnknownZOp(pub String);

impl FromStr for ZOp {
    type Err = UnknownZOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom" => Ok(ZOp::Bottom),
            "dec" => Ok(ZOp::Dec),
            "inc" => Ok(ZOp::Inc),
            "top" => Ok(ZOp::Top),
            other => Err(UnknownZOp(other.to_string())),
        }
    }
}

/// One in-progress resize step.
///
/// The reducer scales every captured item about `anchor` by
/// `(moving_pos - anchor) / (start_pos - anchor)` on each axis enabled in
/// `dir`, leaving the other axis untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeCommand {
    pub moving_pos: Point,
    pub start_pos: Point,
    pub anchor: Point,
    pub dir: AxisConstraint,
    /// Selected items as they were when the drag started.
    pub start_items: Vec<Item>,
}

impl ResizeCommand {
    /// Per-axis scale factors. Constrained and zero-length axes yield 1.0.
    pub fn scale_factors(&self) -> Vec2 {
        fn axis(enabled: bool, moving: f64, start: f64, anchor: f64) -> f64 {
            let span = start - anchor;
            if !enabled || span.abs() < f64::EPSILON {
                1.0
            } else {
                (moving - anchor) / span
            }
        }
        Vec2::new(
            axis(self.dir.horizontal, self.moving_pos.x, self.start_pos.x, self.anchor.x),
            axis(self.dir.vertical, self.moving_pos.y, self.start_pos.y, self.anchor.y),
        )
    }

    /// The captured items with this step's scaling applied about the anchor.
    pub fn resized_items(&self) -> Vec<Item> {
        let scale = self.scale_factors();
        self.start_items
            .iter()
            .map(|item| item.scaled_about(self.anchor, scale.x, scale.y))
            .collect()
    }
}

/// A document-mutation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    /// Replace the selection.
    ChangeSelection { item_ids: Vec<ItemId> },
    /// Remove the given items.
    DeleteItems { item_ids: Vec<ItemId> },
    /// Flip the lock flag of the selected items.
    ToggleLock,
    /// Set a field on the selected items. A coercion failure is passed on
    /// for the reducer to reject.
    EditItem {
        field: String,
        value: Result<FieldValue, CoercionError>,
    },
    /// Restack the selected items.
    ChangeZIndex { op: ZOp },
    /// Toggle a semantic tag on the selected items. `None` when the tag name
    /// is not in the registry.
    ToggleSemanticTag { tag: Option<SemanticTagConfig> },
    /// One step of an interactive resize.
    ResizeItems(ResizeCommand),
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::ChangeSelection { .. } => "change-selection",
            Action::DeleteItems { .. } => "delete-items",
            Action::ToggleLock => "toggle-lock",
            Action::EditItem { .. } => "edit-item",
            Action::ChangeZIndex { .. } => "change-z-index",
            Action::ToggleSemanticTag { .. } => "toggle-semantic-tag",
            Action::ResizeItems(_) => "resize-items",
        }
    }
}
