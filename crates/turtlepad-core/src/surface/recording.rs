//! In-memory recording surface.

use super::{DrawingSurface, SurfaceResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A single drawing command issued against a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Stroke,
    Fill,
    FillColor(String),
    StrokeColor(String),
    LineWidth(f64),
}

/// Surface that records every command instead of rasterizing.
///
/// Useful for tests, for headless runs, and for replaying a drawing onto
/// another surface later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of `stroke` calls recorded.
    pub fn stroke_count(&self) -> usize {
        self.count(|cmd| matches!(cmd, DrawCommand::Stroke))
    }

    /// Number of `fill` calls recorded.
    pub fn fill_count(&self) -> usize {
        self.count(|cmd| matches!(cmd, DrawCommand::Fill))
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|cmd| pred(cmd)).count()
    }

    /// Issue every recorded command, in order, against another surface.
    pub fn replay(&self, target: &mut dyn DrawingSurface) -> SurfaceResult<()> {
        for command in &self.commands {
            match command {
                DrawCommand::BeginPath => target.begin_path()?,
                DrawCommand::MoveTo(p) => target.move_to(*p)?,
                DrawCommand::LineTo(p) => target.line_to(*p)?,
                DrawCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    anticlockwise,
                } => target.arc(*center, *radius, *start_angle, *end_angle, *anticlockwise)?,
                DrawCommand::Stroke => target.stroke()?,
                DrawCommand::Fill => target.fill()?,
                DrawCommand::FillColor(c) => target.set_fill_color(c)?,
                DrawCommand::StrokeColor(c) => target.set_stroke_color(c)?,
                DrawCommand::LineWidth(w) => target.set_line_width(*w)?,
            }
        }
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_path(&mut self) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, point: Point) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::MoveTo(point));
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::LineTo(point));
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
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
        Ok(())
    }

    fn stroke(&mut self) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::Fill);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::FillColor(color.to_string()));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::StrokeColor(color.to_string()));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::LineWidth(width));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_color("red").unwrap();
        surface.begin_path().unwrap();
        surface.move_to(Point::new(0.0, 0.0)).unwrap();
        surface.line_to(Point::new(10.0, 0.0)).unwrap();
        surface.stroke().unwrap();
        surface
    }

    #[test]
    fn test_records_in_order() {
        let surface = sample();
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::StrokeColor("red".to_string()),
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Point::new(0.0, 0.0)),
                DrawCommand::LineTo(Point::new(10.0, 0.0)),
                DrawCommand::Stroke,
            ]
        );
        assert_eq!(surface.stroke_count(), 1);
        assert_eq!(surface.fill_count(), 0);
    }

    #[test]
    fn test_replay_reproduces_commands() {
        let source = sample();
        let mut target = RecordingSurface::new();
        source.replay(&mut target).unwrap();
        assert_eq!(source.commands(), target.commands());
    }

    #[test]
    fn test_take_empties_recording() {
        let mut surface = sample();
        let taken = surface.take();
        assert_eq!(taken.len(), 5);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let surface = sample();
        let json = serde_json::to_string(&surface).unwrap();
        let back: RecordingSurface = serde_json::from_str(&json).unwrap();
        assert_eq!(back.commands(), surface.commands());
    }
}
