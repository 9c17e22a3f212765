//! TurtlePad Core Library
//!
//! Platform-agnostic turtle drawing engine and widget façade. Hosts plug in
//! a [`DrawingSurface`] and a [`Document`].

pub mod document;
pub mod library;
pub mod styles;
pub mod surface;
pub mod turtle;
pub mod ui;

pub use document::{Document, DocumentError, ElementKind, EventHandler, ListenerId, MemoryDocument, UiEvent};
pub use library::{Library, LibraryConfig};
pub use styles::{Geometry, StyleCategory, StyleSet, coerce_length, px};
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface, SurfaceError, SurfaceResult, arc_sweep};
pub use turtle::{ArcSide, Cursor, Turtle, DEFAULT_MOVE_DISTANCE, DEFAULT_TURN_DEGREES};
pub use ui::{Property, PropertyValue, Ui, UiError, UiResult};
