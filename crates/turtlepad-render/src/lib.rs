//! TurtlePad Render Library
//!
//! Drawing-surface backends for TurtlePad.
//! The default implementation records turtle strokes into a Vello scene.

mod color;

#[cfg(feature = "vello-renderer")]
mod vello_surface;

pub use color::parse_css_color;

#[cfg(feature = "vello-renderer")]
pub use vello_surface::VelloSurface;
