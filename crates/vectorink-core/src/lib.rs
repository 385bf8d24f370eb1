//! VectorInk Core Library
//!
//! Platform-agnostic interaction engine for the VectorInk editor: turns
//! pointer, keyboard and inspector input into document-mutation actions.
//! The document itself is only read here; an external reducer applies the
//! emitted actions and produces the next snapshot.

pub mod action;
pub mod config;
pub mod document;
pub mod engine;
pub mod field;
pub mod handles;
pub mod input;
pub mod inspector;
pub mod intent;
pub mod interaction;

pub use action::{Action, ResizeCommand, UnknownZOp, ZOp};
pub use config::{AdjustConfig, EditorConfig, KeyBindings, SemanticTagConfig, SemanticsConfig};
pub use document::{DocumentState, Item, ItemId, ItemShape, Mode, Selection, SelectionMode};
pub use engine::{Engine, Outbox};
pub use field::{CoercionError, FieldKind, FieldValue, SerializableColor, coerce_field, field_kind};
pub use handles::{AxisConstraint, GeometryError, ResizeHandle, anchor_position, axis_constraint, handle_position, opposite};
pub use input::{InputEvent, InputQueue, KeyEvent, PointerEvent, normalize_key};
pub use inspector::{GeometricTab, InspectorError, InspectorRow, WidgetEvent, ZOrderFlags};
pub use intent::UiIntent;
pub use interaction::{ActiveCapture, Interaction, Reaction, ResizeItems, ResizeSession, SelInteraction, Sources};
