//! Vello-backed drawing surface.

use crate::color::parse_css_color;
use kurbo::{Affine, Arc, BezPath, Point, Rect, Shape as KurboShape, Stroke, Vec2};
use peniko::{Color, Fill};
use turtlepad_core::surface::{DrawingSurface, SurfaceResult, arc_sweep, point_on_circle};
use vello::Scene;

/// Flattening tolerance for arcs, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

/// Drawing surface that encodes every stroke and fill into a Vello scene.
///
/// Mirrors canvas path semantics: `begin_path` clears the current path,
/// and `stroke`/`fill` paint it without clearing it.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Path under construction.
    path: BezPath,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    /// Transform applied to everything painted (e.g. HiDPI scale).
    transform: Affine,
    /// Union of painted path bounds.
    bounds: Option<Rect>,
    strokes: usize,
    fills: usize,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            path: BezPath::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            transform: Affine::IDENTITY,
            bounds: None,
            strokes: 0,
            fills: 0,
        }
    }

    /// Scale everything painted by `scale_factor` (for HiDPI targets).
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.transform = Affine::scale(scale_factor);
        self
    }

    /// Get the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Consume the surface, returning the scene.
    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// Clear the scene and all counters; colors and width are kept.
    pub fn reset(&mut self) {
        self.scene.reset();
        self.path = BezPath::new();
        self.bounds = None;
        self.strokes = 0;
        self.fills = 0;
    }

    /// Bounds of everything painted so far, in surface coordinates.
    pub fn painted_bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes
    }

    pub fn fill_count(&self) -> usize {
        self.fills
    }

    fn has_current_point(&self) -> bool {
        !self.path.elements().is_empty()
    }

    fn grow_bounds(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            Some(b) => b.union(rect),
            None => rect,
        });
    }
}

impl DrawingSurface for VelloSurface {
    fn begin_path(&mut self) -> SurfaceResult<()> {
        self.path = BezPath::new();
        Ok(())
    }

    fn move_to(&mut self, point: Point) -> SurfaceResult<()> {
        self.path.move_to(point);
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> SurfaceResult<()> {
        // A line with no current point only sets it, as on a canvas.
        if self.has_current_point() {
            self.path.line_to(point);
        } else {
            self.path.move_to(point);
        }
        Ok(())
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> SurfaceResult<()> {
        let sweep_angle = arc_sweep(start_angle, end_angle, anticlockwise);
        let start = point_on_circle(center, radius, start_angle);
        if self.has_current_point() {
            self.path.line_to(start);
        } else {
            self.path.move_to(start);
        }
        let arc = Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle,
            x_rotation: 0.0,
        };
        for el in arc.append_iter(ARC_TOLERANCE) {
            self.path.push(el);
        }
        Ok(())
    }

    fn stroke(&mut self) -> SurfaceResult<()> {
        let stroke = Stroke::new(self.line_width);
        self.scene
            .stroke(&stroke, self.transform, self.stroke_color, None, &self.path);
        let half = self.line_width / 2.0;
        let bounds = self.path.bounding_box().inflate(half, half);
        self.grow_bounds(bounds);
        self.strokes += 1;
        Ok(())
    }

    fn fill(&mut self) -> SurfaceResult<()> {
        self.scene
            .fill(Fill::NonZero, self.transform, self.fill_color, None, &self.path);
        let bounds = self.path.bounding_box();
        self.grow_bounds(bounds);
        self.fills += 1;
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> SurfaceResult<()> {
        self.fill_color = parse_css_color(color)?;
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> SurfaceResult<()> {
        self.stroke_color = parse_css_color(color)?;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> SurfaceResult<()> {
        self.line_width = width;
        Ok(())
    }
}
