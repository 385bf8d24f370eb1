//! Event-producing half of the inspector panel.
//!
//! Raw widget events become [`UiIntent`]s here; the per-render derived
//! values (z-order button enablement, the geometric tab rows) are computed
//! from the snapshot. Drawing the widgets is left to the UI toolkit.

use crate::action::{UnknownZOp, ZOp};
use crate::document::{DocumentState, ItemId, Selection};
use crate::intent::UiIntent;
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Inspector translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectorError {
    #[error(transparent)]
    UnknownZOp(#[from] UnknownZOp),
    #[error("field input event without a field name")]
    MissingField,
}

/// A raw event from an inspector widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WidgetEvent {
    /// Click on a z-order button; `op` is the button's operation token.
    ZButtonClick { op: String },
    /// Click on the lock/unlock toggle.
    ToggleLockClick,
    /// Input on an editable field.
    FieldInput {
        field: Option<String>,
        value: String,
    },
}

impl WidgetEvent {
    /// Translate into the corresponding UI intent.
    pub fn to_intent(&self) -> Result<UiIntent, InspectorError> {
        match self {
            WidgetEvent::ZButtonClick { op } => Ok(UiIntent::ChangeZIndex { op: op.parse()? }),
            WidgetEvent::ToggleLockClick => Ok(UiIntent::ToggleLock),
            WidgetEvent::FieldInput { field, value } => {
                let field = field.clone().ok_or(InspectorError::MissingField)?;
                Ok(UiIntent::Edit {
                    field,
                    value: value.clone(),
                })
            }
        }
    }
}

/// Whether the selection already occupies the bottom or top slice of the
/// stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZOrderFlags {
    pub at_bottom: bool,
    pub at_top: bool,
}

impl ZOrderFlags {
    /// Compare the selection, as a set, with the first and last N entries of
    /// `z_list` where N is the selection size. `None` for an empty selection.
    pub fn compute(selection: &Selection, z_list: &[ItemId]) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }
        let n = selection.len().min(z_list.len());
        let selected: HashSet<ItemId> = selection.iter().collect();
        let matches = |slice: &[ItemId]| {
            slice.len() == selected.len() && slice.iter().all(|id| selected.contains(id))
        };
        Some(Self {
            at_bottom: matches(&z_list[..n]),
            at_top: matches(&z_list[z_list.len() - n..]),
        })
    }

    /// Whether the button for `op` should be enabled.
    pub fn is_enabled(&self, op: ZOp) -> bool {
        match op {
            ZOp::Bottom | ZOp::Dec => !self.at_bottom,
            ZOp::Inc | ZOp::Top => !self.at_top,
        }
    }
}

/// One row of the geometric tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "row", rename_all = "kebab-case")]
pub enum InspectorRow {
    /// Read-only position and size of the selection bounds.
    PositionAndSize { x: f64, y: f64, width: f64, height: f64 },
    Fill { color: Option<String> },
    Stroke { color: Option<String>, width: f64 },
    Opacity { value: f64 },
    ZIndex { index: Option<usize>, flags: ZOrderFlags },
    Lock { locked: bool },
}

/// Rows shown for the single selected item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricTab {
    pub rows: Vec<InspectorRow>,
}

impl GeometricTab {
    /// Build the tab, or `None` unless exactly one item is selected.
    pub fn from_state(state: &DocumentState) -> Option<Self> {
        let item = state.single_selected()?;
        let mut rows = Vec::new();

        if let Some(bounds) = state.selection_bounds() {
            rows.push(position_and_size(bounds));
        }
        if item.has_fill() {
            rows.push(InspectorRow::Fill {
                color: item.fill.clone(),
            });
        }
        if item.has_stroke() {
            rows.push(InspectorRow::Stroke {
                color: item.stroke.clone(),
                width: item.stroke_width,
            });
        }
        rows.push(InspectorRow::Opacity { value: item.opacity });
        if let Some(flags) = ZOrderFlags::compute(&state.selection, &state.z_list) {
            let index = state.selection.first().and_then(|id| state.z_index(id));
            rows.push(InspectorRow::ZIndex { index, flags });
        }
        rows.push(InspectorRow::Lock { locked: item.locked });

        Some(Self { rows })
    }
}

fn position_and_size(bounds: Rect) -> InspectorRow {
    InspectorRow::PositionAndSize {
        x: round3(bounds.x0),
        y: round3(bounds.y0),
        width: round3(bounds.width()),
        height: round3(bounds.height()),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Item, ItemShape};
    use kurbo::Point;
    use uuid::Uuid;

    #[test]
    fn test_z_flags_bottom_slice() {
        let ids: Vec<ItemId> = (0..4).map(|_| Uuid::new_v4()).collect();
        let selection = Selection::from_ids([ids[1], ids[0]]);
        let flags = ZOrderFlags::compute(&selection, &ids).unwrap();
        assert!(flags.at_bottom);
        assert!(!flags.at_top);
        assert!(!flags.is_enabled(ZOp::Bottom));
        assert!(!flags.is_enabled(ZOp::Dec));
        assert!(flags.is_enabled(ZOp::Inc));
        assert!(flags.is_enabled(ZOp::Top));
    }

    #[test]
    fn test_z_flags_top_and_middle() {
        let ids: Vec<ItemId> = (0..4).map(|_| Uuid::new_v4()).collect();

        let top = ZOrderFlags::compute(&Selection::from_ids([ids[3], ids[2]]), &ids).unwrap();
        assert_eq!(top, ZOrderFlags { at_bottom: false, at_top: true });

        let middle = ZOrderFlags::compute(&Selection::from_ids([ids[1], ids[2]]), &ids).unwrap();
        assert_eq!(middle, ZOrderFlags { at_bottom: false, at_top: false });

        let all = ZOrderFlags::compute(&Selection::from_ids(ids.clone()), &ids).unwrap();
        assert_eq!(all, ZOrderFlags { at_bottom: true, at_top: true });
    }

    #[test]
    fn test_z_flags_empty_selection() {
        let ids = vec![Uuid::new_v4()];
        assert!(ZOrderFlags::compute(&Selection::new(), &ids).is_none());
    }

    #[test]
    fn test_widget_events_to_intents() {
        assert_eq!(
            WidgetEvent::ZButtonClick { op: "inc".to_string() }.to_intent(),
            Ok(UiIntent::ChangeZIndex { op: ZOp::Inc })
        );
        assert_eq!(WidgetEvent::ToggleLockClick.to_intent(), Ok(UiIntent::ToggleLock));
        assert_eq!(
            WidgetEvent::FieldInput {
                field: Some("opacity".to_string()),
                value: "0.3".to_string()
            }
            .to_intent(),
            Ok(UiIntent::Edit {
                field: "opacity".to_string(),
                value: "0.3".to_string()
            })
        );
    }

    #[test]
    fn test_widget_event_errors() {
        assert_eq!(
            WidgetEvent::ZButtonClick { op: "sideways".to_string() }.to_intent(),
            Err(InspectorError::UnknownZOp(UnknownZOp("sideways".to_string())))
        );
        assert_eq!(
            WidgetEvent::FieldInput { field: None, value: "1".to_string() }.to_intent(),
            Err(InspectorError::MissingField)
        );
    }

    #[test]
    fn test_geometric_tab_for_rect() {
        let back = Item::rect(0.0, 0.0, 1.0, 1.0);
        let item = Item::rect(1.0 / 3.0, 2.0, 10.0, 5.0).with_fill("#00ff00").with_locked(true);
        let id = item.id;
        let state = DocumentState::new().with_item(back).with_item(item).with_selection([id]);

        let tab = GeometricTab::from_state(&state).unwrap();
        assert_eq!(
            tab.rows,
            vec![
                InspectorRow::PositionAndSize { x: 0.333, y: 2.0, width: 10.0, height: 5.0 },
                InspectorRow::Fill { color: Some("#00ff00".to_string()) },
                InspectorRow::Stroke { color: None, width: 1.0 },
                InspectorRow::Opacity { value: 1.0 },
                InspectorRow::ZIndex {
                    index: Some(1),
                    flags: ZOrderFlags { at_bottom: false, at_top: true },
                },
                InspectorRow::Lock { locked: true },
            ]
        );
    }

    #[test]
    fn test_geometric_tab_for_line_has_no_fill() {
        let line = Item::new(ItemShape::Line {
            start: Point::ZERO,
            end: Point::new(4.0, 3.0),
        });
        let id = line.id;
        let state = DocumentState::new().with_item(line).with_selection([id]);

        let tab = GeometricTab::from_state(&state).unwrap();
        assert!(!tab.rows.iter().any(|row| matches!(row, InspectorRow::Fill { .. })));
        assert!(tab.rows.iter().any(|row| matches!(row, InspectorRow::Stroke { .. })));
    }

    #[test]
    fn test_geometric_tab_needs_single_selection() {
        let a = Item::rect(0.0, 0.0, 1.0, 1.0);
        let b = Item::rect(0.0, 0.0, 1.0, 1.0);
        let ids = [a.id, b.id];
        let state = DocumentState::new().with_item(a).with_item(b);

        assert!(GeometricTab::from_state(&state).is_none());
        assert!(GeometricTab::from_state(&state.with_selection(ids)).is_none());
    }
}
