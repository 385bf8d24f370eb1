//! Read-only document snapshot consumed by the interaction components.
//!
//! Every tick the external reducer produces a fresh [`DocumentState`]; the
//! interaction layer reads it and never mutates it.

use kurbo::{Affine, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use uuid::Uuid;

/// Unique identifier for items.
pub type ItemId = Uuid;

/// Estimated glyph advance relative to font size, for text bounds.
const TEXT_ADVANCE_RATIO: f64 = 0.6;

/// Geometric description of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ItemShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
    },
    Polygon {
        points: Vec<Point>,
    },
    Polyline {
        points: Vec<Point>,
    },
    Line {
        start: Point,
        end: Point,
    },
    Text {
        position: Point,
        content: String,
        font_size: f64,
    },
}

impl ItemShape {
    /// Closed shapes that can carry a fill.
    pub fn is_polygon_like(&self) -> bool {
        matches!(
            self,
            ItemShape::Rect { .. } | ItemShape::Ellipse { .. } | ItemShape::Polygon { .. }
        )
    }

    /// Open paths (stroke only).
    pub fn is_polyline_like(&self) -> bool {
        matches!(self, ItemShape::Polyline { .. } | ItemShape::Line { .. })
    }

    /// Axis-aligned bounding box in document coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            ItemShape::Rect { x, y, width, height } => {
                Rect::from_origin_size(Point::new(*x, *y), Size::new(*width, *height))
            }
            ItemShape::Ellipse { center, rx, ry } => {
                Rect::new(center.x - rx, center.y - ry, center.x + rx, center.y + ry)
            }
            ItemShape::Polygon { points } | ItemShape::Polyline { points } => {
                points_bounds(points)
            }
            ItemShape::Line { start, end } => Rect::from_points(*start, *end),
            ItemShape::Text { position, content, font_size } => {
                let width = content.chars().count() as f64 * font_size * TEXT_ADVANCE_RATIO;
                Rect::from_origin_size(*position, Size::new(width, *font_size))
            }
        }
    }

    /// Apply an affine transform. Ellipse radii and text only follow the
    /// scale/translation part.
    fn transform(&mut self, affine: Affine) {
        let coeffs = affine.as_coeffs();
        match self {
            ItemShape::Rect { x, y, width, height } => {
                let p0 = affine * Point::new(*x, *y);
                let p1 = affine * Point::new(*x + *width, *y + *height);
                let rect = Rect::from_points(p0, p1);
                *x = rect.x0;
                *y = rect.y0;
                *width = rect.width();
                *height = rect.height();
            }
            ItemShape::Ellipse { center, rx, ry } => {
                *center = affine * *center;
                *rx *= coeffs[0].abs();
                *ry *= coeffs[3].abs();
            }
            ItemShape::Polygon { points } | ItemShape::Polyline { points } => {
                for point in points.iter_mut() {
                    *point = affine * *point;
                }
            }
            ItemShape::Line { start, end } => {
                *start = affine * *start;
                *end = affine * *end;
            }
            ItemShape::Text { position, .. } => {
                *position = affine * *position;
            }
        }
    }
}

fn points_bounds(points: &[Point]) -> Rect {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };
    iter.fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
}

/// A drawable entity in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub shape: ItemShape,
    /// Fill colour; only meaningful for polygon-like shapes.
    #[serde(default)]
    pub fill: Option<String>,
    /// Stroke colour; meaningful for polygon- and polyline-like shapes.
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub locked: bool,
    /// Semantic tag names attached to this item.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    1.0
}

impl Item {
    /// Create a new unlocked item with default styling.
    pub fn new(shape: ItemShape) -> Self {
        Self {
            id: Uuid::new_v4(),
            shape,
            fill: None,
            stroke: None,
            stroke_width: default_stroke_width(),
            opacity: default_opacity(),
            locked: false,
            tags: BTreeSet::new(),
        }
    }

    /// Create a rectangle item.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ItemShape::Rect { x, y, width, height })
    }

    /// Set the locked flag.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Set the fill colour.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    /// Whether the fill attribute applies to this item.
    pub fn has_fill(&self) -> bool {
        self.shape.is_polygon_like()
    }

    /// Whether the stroke attributes apply to this item.
    pub fn has_stroke(&self) -> bool {
        self.shape.is_polygon_like() || self.shape.is_polyline_like()
    }

    /// Copy of this item scaled by `(sx, sy)` about `anchor`.
    pub fn scaled_about(&self, anchor: Point, sx: f64, sy: f64) -> Self {
        let affine = Affine::translate(anchor.to_vec2())
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate(-anchor.to_vec2());
        let mut item = self.clone();
        item.shape.transform(affine);
        item
    }
}

/// Interaction mode. At most one interaction owns pointer drags at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Idle,
    Resizing,
}

/// How the current selection is presented.
///
/// Supplied by the document-state collaborator; not derived here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Plain bounding-box selection.
    #[default]
    Bbox,
    /// Single item focus.
    Item,
}

/// The currently selected item ids.
///
/// Keeps insertion order (so there is a well-defined first id) but compares
/// as an unordered set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ItemId>", into = "Vec<ItemId>")]
pub struct Selection {
    ids: Vec<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection, dropping duplicate ids.
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut seen = HashSet::new();
        let ids = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        Self { ids }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// The earliest selected id.
    pub fn first(&self) -> Option<ItemId> {
        self.ids.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<ItemId> {
        self.ids.clone()
    }

    /// Check whether `candidate` names exactly the selected ids, ignoring
    /// order and duplicates.
    pub fn same_set(&self, candidate: &[ItemId]) -> bool {
        let candidate: HashSet<ItemId> = candidate.iter().copied().collect();
        candidate.len() == self.ids.len() && self.ids.iter().all(|id| candidate.contains(id))
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.same_set(&other.ids)
    }
}

impl Eq for Selection {}

impl From<Vec<ItemId>> for Selection {
    fn from(ids: Vec<ItemId>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<Selection> for Vec<ItemId> {
    fn from(selection: Selection) -> Self {
        selection.ids
    }
}

/// Immutable per-tick snapshot of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentState {
    /// All items, keyed by id.
    pub items: HashMap<ItemId, Item>,
    /// Stacking order, back to front.
    pub z_list: Vec<ItemId>,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub sel_mode: SelectionMode,
    #[serde(default)]
    pub mode: Mode,
}

impl DocumentState {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item on top of the stack. Used to build snapshots.
    pub fn with_item(mut self, item: Item) -> Self {
        self.z_list.push(item.id);
        self.items.insert(item.id, item);
        self
    }

    /// Replace the selection. Used to build snapshots.
    pub fn with_selection(mut self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.selection = Selection::from_ids(ids);
        self
    }

    pub fn with_sel_mode(mut self, sel_mode: SelectionMode) -> Self {
        self.sel_mode = sel_mode;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Selected items in selection order. Ids with no item are skipped.
    pub fn selected_items(&self) -> Vec<Item> {
        self.selection
            .iter()
            .filter_map(|id| self.items.get(&id))
            .cloned()
            .collect()
    }

    /// Bounding box of the selection, `None` when nothing is selected.
    pub fn selection_bounds(&self) -> Option<Rect> {
        self.selection
            .iter()
            .filter_map(|id| self.items.get(&id))
            .map(Item::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// The selected item when exactly one item is selected.
    pub fn single_selected(&self) -> Option<&Item> {
        if self.selection.len() != 1 {
            return None;
        }
        self.selection.first().and_then(|id| self.items.get(&id))
    }

    /// Position of `id` in the stacking order.
    pub fn z_index(&self, id: ItemId) -> Option<usize> {
        self.z_list.iter().position(|&z| z == id)
    }
}
