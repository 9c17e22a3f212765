//! The library handle: one turtle plus one widget façade.

use crate::document::Document;
use crate::surface::{DrawingSurface, SurfaceResult};
use crate::turtle::{DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH, Turtle};
use crate::ui::Ui;
use serde::{Deserialize, Serialize};

/// Construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Pen color applied to the surface at construction.
    pub pen_color: String,
    /// Pen width applied to the surface at construction.
    pub pen_width: f64,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 450.0,
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            pen_width: DEFAULT_PEN_WIDTH,
        }
    }
}

impl LibraryConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Everything a script can call, owned by the caller.
///
/// Scripts reach the turtle and the widgets through this handle rather than
/// through any global state.
#[derive(Debug)]
pub struct Library<S, D> {
    turtle: Turtle<S>,
    ui: Ui<D>,
}

impl<S: DrawingSurface, D: Document> Library<S, D> {
    /// Build a library drawing on `surface` and placing widgets in `document`.
    ///
    /// The configured pen is pushed to the surface so the surface and the
    /// cursor agree from the start.
    pub fn new(surface: S, document: D, config: &LibraryConfig) -> SurfaceResult<Self> {
        let mut turtle = Turtle::new(surface, config.width, config.height);
        turtle.pen_color(&config.pen_color)?;
        turtle.pen_width(config.pen_width)?;
        Ok(Self {
            turtle,
            ui: Ui::new(document),
        })
    }

    pub fn turtle(&self) -> &Turtle<S> {
        &self.turtle
    }

    pub fn turtle_mut(&mut self) -> &mut Turtle<S> {
        &mut self.turtle
    }

    pub fn ui(&self) -> &Ui<D> {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut Ui<D> {
        &mut self.ui
    }

    /// Split into the surface and the document.
    pub fn into_parts(self) -> (S, D) {
        (self.turtle.into_surface(), self.ui.into_document())
    }
}
