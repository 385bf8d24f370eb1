//! Resize handles on a selection bounding box and the geometry around them.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Geometry contract errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The identifier does not name one of the eight resize handles.
    #[error("Invalid resizer: {0}")]
    InvalidHandle(String),
}

/// One of the eight resize handles of a bounding box, named by compass direction.
///
/// The wire form matches the cursor names used by the pointer layer
/// (`nw-resize`, `n-resize`, ...). Parsing anything else fails with
/// [`GeometryError::InvalidHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ResizeHandle {
    #[serde(rename = "nw-resize")]
    NorthWest,
    #[serde(rename = "n-resize")]
    North,
    #[serde(rename = "ne-resize")]
    NorthEast,
    #[serde(rename = "e-resize")]
    East,
    #[serde(rename = "se-resize")]
    SouthEast,
    #[serde(rename = "s-resize")]
    South,
    #[serde(rename = "sw-resize")]
    SouthWest,
    #[serde(rename = "w-resize")]
    West,
}

impl ResizeHandle {
    /// All handles, clockwise from the top-left corner.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::NorthWest,
        ResizeHandle::North,
        ResizeHandle::NorthEast,
        ResizeHandle::East,
        ResizeHandle::SouthEast,
        ResizeHandle::South,
        ResizeHandle::SouthWest,
        ResizeHandle::West,
    ];

    /// The cursor-style identifier of this handle.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeHandle::NorthWest => "nw-resize",
            ResizeHandle::North => "n-resize",
            ResizeHandle::NorthEast => "ne-resize",
            ResizeHandle::East => "e-resize",
            ResizeHandle::SouthEast => "se-resize",
            ResizeHandle::South => "s-resize",
            ResizeHandle::SouthWest => "sw-resize",
            ResizeHandle::West => "w-resize",
        }
    }

    /// Check if this is one of the four corner handles.
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthWest
                | ResizeHandle::NorthEast
                | ResizeHandle::SouthWest
                | ResizeHandle::SouthEast
        )
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeHandle::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s)
            .ok_or_else(|| GeometryError::InvalidHandle(s.to_string()))
    }
}

impl TryFrom<String> for ResizeHandle {
    type Error = GeometryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which axes a handle is allowed to resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConstraint {
    pub horizontal: bool,
    pub vertical: bool,
}

impl AxisConstraint {
    pub const BOTH: Self = Self { horizontal: true, vertical: true };
    pub const VERTICAL: Self = Self { horizontal: false, vertical: true };
    pub const HORIZONTAL: Self = Self { horizontal: true, vertical: false };
}

/// The handle diagonally (corners) or axially (edges) opposite to `handle`.
pub fn opposite(handle: ResizeHandle) -> ResizeHandle {
    match handle {
        ResizeHandle::NorthWest => ResizeHandle::SouthEast,
        ResizeHandle::SouthEast => ResizeHandle::NorthWest,
        ResizeHandle::North => ResizeHandle::South,
        ResizeHandle::South => ResizeHandle::North,
        ResizeHandle::NorthEast => ResizeHandle::SouthWest,
        ResizeHandle::SouthWest => ResizeHandle::NorthEast,
        ResizeHandle::East => ResizeHandle::West,
        ResizeHandle::West => ResizeHandle::East,
    }
}

/// Document-coordinate reference point of a handle on `rect`.
///
/// Corners map to the corners of the box. Edge handles only carry the
/// coordinate of their own edge; the perpendicular coordinate is 0. The
/// point is a drag-origin reference, not the visual midpoint of the edge,
/// and the zeroed coordinate always lies on a constrained axis.
pub fn handle_position(handle: ResizeHandle, rect: Rect) -> Point {
    match handle {
        ResizeHandle::NorthWest => Point::new(rect.x0, rect.y0),
        ResizeHandle::North => Point::new(0.0, rect.y0),
        ResizeHandle::NorthEast => Point::new(rect.x1, rect.y0),
        ResizeHandle::West => Point::new(rect.x0, 0.0),
        ResizeHandle::East => Point::new(rect.x1, 0.0),
        ResizeHandle::SouthWest => Point::new(rect.x0, rect.y1),
        ResizeHandle::South => Point::new(0.0, rect.y1),
        ResizeHandle::SouthEast => Point::new(rect.x1, rect.y1),
    }
}

/// The point that stays fixed while `handle` is dragged.
pub fn anchor_position(handle: ResizeHandle, rect: Rect) -> Point {
    handle_position(opposite(handle), rect)
}

/// Axes `handle` may resize: corners both, `n`/`s` vertical, `e`/`w` horizontal.
pub fn axis_constraint(handle: ResizeHandle) -> AxisConstraint {
    match handle {
        ResizeHandle::NorthWest
        | ResizeHandle::NorthEast
        | ResizeHandle::SouthWest
        | ResizeHandle::SouthEast => AxisConstraint::BOTH,
        ResizeHandle::North | ResizeHandle::South => AxisConstraint::VERTICAL,
        ResizeHandle::East | ResizeHandle::West => AxisConstraint::HORIZONTAL,
    }
}
