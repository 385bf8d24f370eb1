//! Structured UI intents produced by panels such as the inspector.

use crate::action::ZOp;
use crate::document::ItemId;
use serde::{Deserialize, Serialize};

/// An intent raised by a panel widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiIntent {
    /// Select exactly these items.
    ChangeSel { item_ids: Vec<ItemId> },
    /// Delete the current selection.
    Delete,
    /// Delete the given items, regardless of selection.
    DeleteItems { item_ids: Vec<ItemId> },
    ToggleLock,
    /// Raw text typed into an editable field.
    Edit { field: String, value: String },
    ChangeZIndex { op: ZOp },
    ToggleSemanticTag { tag_name: String },
}
