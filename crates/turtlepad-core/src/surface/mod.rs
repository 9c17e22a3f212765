//! Drawing surface abstraction.
//!
//! The turtle never draws pixels itself. It issues immediate-mode path
//! commands against a [`DrawingSurface`], which can be a browser canvas,
//! a Vello scene, or the in-memory [`RecordingSurface`].

mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use kurbo::Point;
use std::f64::consts::TAU;
use thiserror::Error;

/// Drawing surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Surface backend error: {0}")]
    Backend(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// A 2D immediate-mode drawing target.
///
/// Mirrors the subset of the HTML canvas 2D context the turtle relies on.
/// Angles are in radians, measured from the positive x axis with y pointing down.
pub trait DrawingSurface {
    /// Start a new path, discarding any current one.
    fn begin_path(&mut self) -> SurfaceResult<()>;

    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: Point) -> SurfaceResult<()>;

    /// Add a straight segment from the current point to `point`.
    fn line_to(&mut self, point: Point) -> SurfaceResult<()>;

    /// Add a circular arc to the current path.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> SurfaceResult<()>;

    /// Stroke the current path with the stroke color and line width.
    fn stroke(&mut self) -> SurfaceResult<()>;

    /// Fill the current path with the fill color.
    fn fill(&mut self) -> SurfaceResult<()>;

    /// Set the fill color (any CSS color string).
    fn set_fill_color(&mut self, color: &str) -> SurfaceResult<()>;

    /// Set the stroke color (any CSS color string).
    fn set_stroke_color(&mut self, color: &str) -> SurfaceResult<()>;

    /// Set the stroke line width in pixels.
    fn set_line_width(&mut self, width: f64) -> SurfaceResult<()>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn begin_path(&mut self) -> SurfaceResult<()> {
        (**self).begin_path()
    }

    fn move_to(&mut self, point: Point) -> SurfaceResult<()> {
        (**self).move_to(point)
    }

    fn line_to(&mut self, point: Point) -> SurfaceResult<()> {
        (**self).line_to(point)
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> SurfaceResult<()> {
        (**self).arc(center, radius, start_angle, end_angle, anticlockwise)
    }

    fn stroke(&mut self) -> SurfaceResult<()> {
        (**self).stroke()
    }

    fn fill(&mut self) -> SurfaceResult<()> {
        (**self).fill()
    }

    fn set_fill_color(&mut self, color: &str) -> SurfaceResult<()> {
        (**self).set_fill_color(color)
    }

    fn set_stroke_color(&mut self, color: &str) -> SurfaceResult<()> {
        (**self).set_stroke_color(color)
    }

    fn set_line_width(&mut self, width: f64) -> SurfaceResult<()> {
        (**self).set_line_width(width)
    }
}

/// Signed sweep (radians) of a canvas-style arc from `start` to `end`.
///
/// Positive sweeps run clockwise on screen (y down). A span of a full turn or
/// more in the drawing direction yields exactly one full turn; otherwise the
/// end angle is wrapped so the arc runs in the requested direction.
pub fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    let end = if !anticlockwise && end - start >= TAU {
        start + TAU
    } else if anticlockwise && start - end >= TAU {
        start - TAU
    } else if !anticlockwise && start > end {
        start + (TAU - (start - end) % TAU)
    } else if anticlockwise && start < end {
        start - (TAU - (end - start) % TAU)
    } else {
        end
    };
    end - start
}

/// Point on a circle at `angle` radians.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sweep_clockwise_quarter() {
        assert!((arc_sweep(PI, PI + FRAC_PI_2, false) - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_sweep_anticlockwise_quarter() {
        assert!((arc_sweep(0.0, -FRAC_PI_2, true) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_full_circle_both_directions() {
        assert!((arc_sweep(0.0, TAU, false) - TAU).abs() < EPS);
        // The classic `arc(x, y, r, 0, 2π, true)` dot idiom is a full circle.
        assert!((arc_sweep(0.0, TAU, true) + TAU).abs() < EPS);
    }

    #[test]
    fn test_sweep_wraps_into_direction() {
        // Clockwise from 3π/2 to π/2 goes the long way round through 0.
        let sweep = arc_sweep(3.0 * FRAC_PI_2, FRAC_PI_2, false);
        assert!((sweep - PI).abs() < EPS);
        // Anticlockwise from 0 to π/2 goes the long way round.
        let sweep = arc_sweep(0.0, FRAC_PI_2, true);
        assert!((sweep + 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_point_on_circle() {
        let p = point_on_circle(Point::new(10.0, 10.0), 5.0, FRAC_PI_2);
        assert!((p.x - 10.0).abs() < EPS);
        assert!((p.y - 15.0).abs() < EPS);
    }
}
