//! Arc geometry for turtle arcs.

use kurbo::Point;

use super::normalize_degrees;

/// Which side of the turtle the arc's circle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcSide {
    Right,
    Left,
}

/// Everything needed to draw an arc and to place the turtle after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPlan {
    /// Circle center, `radius` away from the turtle, perpendicular to its heading.
    pub center: Point,
    pub radius: f64,
    /// Canvas start angle in radians.
    pub start_angle: f64,
    /// Canvas end angle in radians.
    pub end_angle: f64,
    /// Left arcs are drawn anticlockwise.
    pub anticlockwise: bool,
    /// Heading after the arc, in [0, 360).
    pub heading: f64,
    /// Turtle position after the arc.
    pub end: Point,
}

impl ArcPlan {
    /// Plan an arc of `angle` degrees on a circle of `radius`, tangent to a
    /// turtle at `position` facing `heading` degrees (0 = up, clockwise).
    pub fn new(position: Point, heading: f64, angle: f64, radius: f64, side: ArcSide) -> Self {
        let left = side == ArcSide::Left;
        let center_offset = if left { -90.0 } else { 90.0 };
        let sweep = if left { -angle } else { angle };

        let to_center = (heading + center_offset).to_radians();
        let center = Point::new(
            position.x + radius * to_center.sin(),
            position.y - radius * to_center.cos(),
        );

        // The turtle sits at canvas angle `heading` (left) or `heading + 180`
        // (right) as seen from the center.
        let start_angle = (heading + if left { 0.0 } else { 180.0 }).to_radians();
        let end_angle = start_angle + sweep.to_radians();

        let new_heading = normalize_degrees(heading + sweep + 360.0);
        let theta = new_heading.to_radians();
        let (dx, dy) = (radius * theta.cos(), radius * theta.sin());
        let end = if left {
            Point::new(center.x + dx, center.y + dy)
        } else {
            Point::new(center.x - dx, center.y - dy)
        };

        Self {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise: left,
            heading: new_heading,
            end,
        }
    }
}
