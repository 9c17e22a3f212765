//! The turtle: a stateful drawing cursor.
//!
//! Headings are in degrees, 0 pointing up and increasing clockwise.
//! Motion with the pen down strokes a segment on the drawing surface;
//! motion with the pen up only moves the cursor.

mod arc;

pub use arc::{ArcPlan, ArcSide};

use crate::surface::{DrawingSurface, SurfaceResult};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;
/// Turn used by `turnRight()` / `turnLeft()` when no angle is given.
pub const DEFAULT_TURN_DEGREES: f64 = 90.0;
/// Distance used by `moveForward()` / `moveBackward()` when none is given.
pub const DEFAULT_MOVE_DISTANCE: f64 = 25.0;
/// Initial pen color.
pub const DEFAULT_PEN_COLOR: &str = "#000";
/// Initial pen width in pixels.
pub const DEFAULT_PEN_WIDTH: f64 = 5.0;

/// Wrap an angle in degrees into [0, 360).
///
/// Returns NaN for non-finite input.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // Tiny negative inputs round up to exactly 360.
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// The turtle's cursor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    /// Current position in canvas pixels.
    pub position: Point,
    /// Heading in degrees. Unbounded; see [`Turtle::direction`].
    pub heading: f64,
    /// Whether motion draws.
    pub pen_down: bool,
    /// Last CSS color passed to `pen_color`.
    pub color: String,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl Cursor {
    /// A cursor at `position`, facing up with the pen down.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            heading: 0.0,
            pen_down: true,
            color: DEFAULT_PEN_COLOR.to_string(),
            stroke_width: DEFAULT_PEN_WIDTH,
        }
    }
}

/// Turtle engine driving a drawing surface.
#[derive(Debug)]
pub struct Turtle<S> {
    surface: S,
    cursor: Cursor,
    width: f64,
    height: f64,
}

impl<S: DrawingSurface> Turtle<S> {
    /// Create a turtle centered on a `width` x `height` canvas.
    pub fn new(surface: S, width: f64, height: f64) -> Self {
        Self {
            surface,
            cursor: Cursor::new(Point::new(width / 2.0, height / 2.0)),
            width,
            height,
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the turtle, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Canvas size given at construction.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn x(&self) -> f64 {
        self.cursor.position.x
    }

    pub fn y(&self) -> f64 {
        self.cursor.position.y
    }

    pub fn position(&self) -> Point {
        self.cursor.position
    }

    /// Teleport to (`x`, `y`) without drawing.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.cursor.position = Point::new(x, y);
    }

    pub fn turn_right(&mut self, degrees: f64) {
        self.cursor.heading += degrees;
    }

    pub fn turn_left(&mut self, degrees: f64) {
        self.cursor.heading -= degrees;
    }

    /// Face exactly `degrees`.
    pub fn turn_to(&mut self, degrees: f64) {
        self.cursor.heading = degrees;
    }

    /// Current heading wrapped into [0, 360).
    pub fn direction(&self) -> f64 {
        normalize_degrees(self.cursor.heading)
    }

    pub fn move_forward(&mut self, distance: f64) -> SurfaceResult<()> {
        self.advance(distance)
    }

    pub fn move_backward(&mut self, distance: f64) -> SurfaceResult<()> {
        self.advance(-distance)
    }

    fn advance(&mut self, distance: f64) -> SurfaceResult<()> {
        let angle = self.direction().to_radians();
        let delta = Vec2::new(angle.sin() * distance, -angle.cos() * distance);
        self.translate(delta)
    }

    /// Move by explicit deltas, ignoring the heading.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> SurfaceResult<()> {
        self.translate(Vec2::new(dx, dy))
    }

    fn translate(&mut self, delta: Vec2) -> SurfaceResult<()> {
        let from = self.cursor.position;
        let to = from + delta;
        if self.cursor.pen_down {
            self.surface.begin_path()?;
            self.surface.move_to(from)?;
            self.surface.line_to(to)?;
            self.surface.stroke()?;
        }
        self.cursor.position = to;
        Ok(())
    }

    pub fn pen_up(&mut self) {
        self.cursor.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.cursor.pen_down = true;
    }

    pub fn is_pen_down(&self) -> bool {
        self.cursor.pen_down
    }

    /// Set both fill and stroke color to a CSS color.
    pub fn pen_color(&mut self, color: &str) -> SurfaceResult<()> {
        self.surface.set_fill_color(color)?;
        self.surface.set_stroke_color(color)?;
        self.cursor.color = color.to_string();
        Ok(())
    }

    /// Set the pen color from components. An alpha of `None` or 0 gives an
    /// opaque `rgb(...)` color.
    pub fn pen_rgb(&mut self, r: u8, g: u8, b: u8, alpha: Option<f64>) -> SurfaceResult<()> {
        let color = match alpha {
            Some(a) if a != 0.0 => format!("rgba({r}, {g}, {b}, {a})"),
            _ => format!("rgb({r}, {g}, {b})"),
        };
        self.pen_color(&color)
    }

    pub fn pen_width(&mut self, width: f64) -> SurfaceResult<()> {
        self.surface.set_line_width(width)?;
        self.cursor.stroke_width = width;
        Ok(())
    }

    /// Fill a circle at the current position.
    ///
    /// Unlike motion, dots are drawn even when the pen is up.
    pub fn dot(&mut self, radius: f64) -> SurfaceResult<()> {
        self.surface.begin_path()?;
        self.surface.arc(self.cursor.position, radius, 0.0, TAU, true)?;
        self.surface.fill()
    }

    /// Arc `angle` degrees along a circle of `radius` on the turtle's right.
    pub fn arc_right(&mut self, angle: f64, radius: f64) -> SurfaceResult<()> {
        self.arc(angle, radius, ArcSide::Right)
    }

    /// Arc `angle` degrees along a circle of `radius` on the turtle's left.
    pub fn arc_left(&mut self, angle: f64, radius: f64) -> SurfaceResult<()> {
        self.arc(angle, radius, ArcSide::Left)
    }

    /// Arc on the given side, stroking it if the pen is down.
    pub fn arc(&mut self, angle: f64, radius: f64, side: ArcSide) -> SurfaceResult<()> {
        let plan = ArcPlan::new(self.cursor.position, self.cursor.heading, angle, radius, side);
        if self.cursor.pen_down {
            self.surface.begin_path()?;
            self.surface.arc(
                plan.center,
                plan.radius,
                plan.start_angle,
                plan.end_angle,
                plan.anticlockwise,
            )?;
            self.surface.stroke()?;
        }
        self.cursor.heading = plan.heading;
        self.cursor.position = plan.end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    const EPS: f64 = 1e-9;

    fn turtle() -> Turtle<RecordingSurface> {
        Turtle::new(RecordingSurface::new(), 300.0, 200.0)
    }

    fn at(turtle: &Turtle<RecordingSurface>, x: f64, y: f64) -> bool {
        (turtle.x() - x).abs() < EPS && (turtle.y() - y).abs() < EPS
    }

    #[test]
    fn test_starts_centered_facing_up() {
        let t = turtle();
        assert!(at(&t, 150.0, 100.0));
        assert_eq!(t.direction(), 0.0);
        assert!(t.is_pen_down());
        assert_eq!(t.cursor().color, "#000");
        assert_eq!(t.cursor().stroke_width, 5.0);
        assert!(t.surface().commands().is_empty());
    }

    #[test]
    fn test_turn_right_then_forward() {
        let mut t = turtle();
        t.turn_right(90.0);
        assert_eq!(t.direction(), 90.0);
        t.move_forward(50.0).unwrap();
        assert!(at(&t, 200.0, 100.0));
        assert_eq!(t.surface().stroke_count(), 1);
    }

    #[test]
    fn test_forward_at_zero_goes_up() {
        let mut t = turtle();
        t.move_forward(DEFAULT_MOVE_DISTANCE).unwrap();
        assert!(at(&t, 150.0, 75.0));
    }

    #[test]
    fn test_direction_normalizes() {
        let mut t = turtle();
        for &heading in &[0.0, 359.5, 360.0, 725.0, -1.0, -360.0, -725.0, 1e6, -1e-14] {
            t.turn_to(heading);
            let d = t.direction();
            assert!((0.0..360.0).contains(&d), "{heading} -> {d}");
            let diff = (heading - d) / 360.0;
            assert!((diff - diff.round()).abs() < 1e-9, "{heading} -> {d}");
        }
    }

    #[test]
    fn test_turns_accumulate_unbounded() {
        let mut t = turtle();
        t.turn_left(DEFAULT_TURN_DEGREES);
        t.turn_left(DEFAULT_TURN_DEGREES);
        assert_eq!(t.cursor().heading, -180.0);
        assert_eq!(t.direction(), 180.0);
        t.turn_right(900.0);
        assert_eq!(t.cursor().heading, 720.0);
        assert_eq!(t.direction(), 0.0);
    }

    #[test]
    fn test_forward_then_backward_returns_home() {
        for &heading in &[0.0, 33.0, 90.0, 181.5, 270.0, -45.0] {
            let mut t = turtle();
            t.turn_to(heading);
            t.move_forward(73.25).unwrap();
            t.move_backward(73.25).unwrap();
            assert!(at(&t, 150.0, 100.0), "heading {heading}");
        }
    }

    #[test]
    fn test_pen_up_moves_without_stroke() {
        let mut t = turtle();
        t.pen_up();
        t.move_forward(10.0).unwrap();
        t.move_backward(20.0).unwrap();
        t.move_by(5.0, 5.0).unwrap();
        assert!(at(&t, 155.0, 115.0));
        assert!(t.surface().commands().is_empty());

        t.pen_down();
        t.move_by(-5.0, 0.0).unwrap();
        assert_eq!(
            t.surface().commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Point::new(155.0, 115.0)),
                DrawCommand::LineTo(Point::new(150.0, 115.0)),
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_move_to_never_draws() {
        let mut t = turtle();
        t.move_to(10.0, 20.0);
        assert!(at(&t, 10.0, 20.0));
        assert!(t.surface().commands().is_empty());
    }

    #[test]
    fn test_move_by_ignores_heading() {
        let mut t = turtle();
        t.turn_to(137.0);
        t.move_by(10.0, -20.0).unwrap();
        assert!(at(&t, 160.0, 80.0));
    }

    #[test]
    fn test_pen_color_sets_fill_and_stroke() {
        let mut t = turtle();
        t.pen_color("tomato").unwrap();
        assert_eq!(t.cursor().color, "tomato");
        assert_eq!(
            t.surface().commands(),
            &[
                DrawCommand::FillColor("tomato".to_string()),
                DrawCommand::StrokeColor("tomato".to_string()),
            ]
        );
    }

    #[test]
    fn test_pen_rgb_formats() {
        let mut t = turtle();
        t.pen_rgb(10, 20, 30, None).unwrap();
        assert_eq!(t.cursor().color, "rgb(10, 20, 30)");
        t.pen_rgb(10, 20, 30, Some(0.5)).unwrap();
        assert_eq!(t.cursor().color, "rgba(10, 20, 30, 0.5)");
        t.pen_rgb(1, 2, 3, Some(0.0)).unwrap();
        assert_eq!(t.cursor().color, "rgb(1, 2, 3)");
    }

    #[test]
    fn test_pen_width() {
        let mut t = turtle();
        t.pen_width(12.0).unwrap();
        assert_eq!(t.cursor().stroke_width, 12.0);
        assert_eq!(t.surface().commands(), &[DrawCommand::LineWidth(12.0)]);
    }

    #[test]
    fn test_dot_draws_even_with_pen_up() {
        // Dots ignore the pen state, unlike every motion operation.
        let mut t = turtle();
        t.pen_up();
        t.dot(4.0).unwrap();
        assert_eq!(t.surface().fill_count(), 1);
        assert_eq!(
            t.surface().commands()[1],
            DrawCommand::Arc {
                center: Point::new(150.0, 100.0),
                radius: 4.0,
                start_angle: 0.0,
                end_angle: TAU,
                anticlockwise: true,
            }
        );
        assert!(at(&t, 150.0, 100.0));
    }

    #[test]
    fn test_arc_right_updates_heading_and_position() {
        let mut t = turtle();
        t.arc_right(90.0, 50.0).unwrap();
        assert!((t.direction() - 90.0).abs() < EPS);
        assert!(at(&t, 200.0, 50.0));
        assert_eq!(t.surface().stroke_count(), 1);
    }

    #[test]
    fn test_arc_left_updates_heading_and_position() {
        let mut t = turtle();
        t.arc_left(90.0, 50.0).unwrap();
        // A quarter turn to the left from facing up leaves the turtle facing left.
        assert!((t.direction() - 270.0).abs() < EPS);
        assert!(at(&t, 100.0, 50.0));
        match &t.surface().commands()[1] {
            DrawCommand::Arc { center, anticlockwise, .. } => {
                assert!((center.x - 100.0).abs() < EPS);
                assert!((center.y - 100.0).abs() < EPS);
                assert!(*anticlockwise);
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn test_arc_with_pen_up_only_moves() {
        let mut t = turtle();
        t.pen_up();
        t.arc_right(90.0, 50.0).unwrap();
        assert!(at(&t, 200.0, 50.0));
        assert!(t.surface().commands().is_empty());
    }

    #[test]
    fn test_arc_then_forward_continues_tangent() {
        let mut t = turtle();
        t.arc_right(90.0, 50.0).unwrap();
        t.move_forward(10.0).unwrap();
        assert!(at(&t, 210.0, 50.0));
    }
}
