//! Canvas 2D drawing surface.

use kurbo::Point;
use turtlepad_core::{DrawingSurface, SurfaceError, SurfaceResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Describe a thrown JavaScript value.
pub(crate) fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn backend(value: JsValue) -> SurfaceError {
    SurfaceError::Backend(js_error(value))
}

/// Drawing surface over a browser canvas context.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Resolve a CSS selector to a `<canvas>` and take its 2D context.
    pub fn from_selector(selector: &str) -> SurfaceResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SurfaceError::Backend("No document available".to_string()))?;
        let canvas = document
            .query_selector(selector)
            .map_err(backend)?
            .ok_or_else(|| SurfaceError::Backend(format!("No element matches '{selector}'")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Backend(format!("'{selector}' is not a canvas")))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(backend)?
            .ok_or_else(|| SurfaceError::Backend("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Backend("Unexpected context type".to_string()))?;
        Ok(Self::new(ctx))
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl DrawingSurface for CanvasSurface {
    fn begin_path(&mut self) -> SurfaceResult<()> {
        self.ctx.begin_path();
        Ok(())
    }

    fn move_to(&mut self, point: Point) -> SurfaceResult<()> {
        self.ctx.move_to(point.x, point.y);
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> SurfaceResult<()> {
        self.ctx.line_to(point.x, point.y);
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
        self.ctx
            .arc_with_anticlockwise(center.x, center.y, radius, start_angle, end_angle, anticlockwise)
            .map_err(backend)
    }

    fn stroke(&mut self) -> SurfaceResult<()> {
        self.ctx.stroke();
        Ok(())
    }

    fn fill(&mut self) -> SurfaceResult<()> {
        self.ctx.fill();
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> SurfaceResult<()> {
        self.ctx.set_fill_style_str(color);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> SurfaceResult<()> {
        self.ctx.set_stroke_style_str(color);
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> SurfaceResult<()> {
        self.ctx.set_line_width(width);
        Ok(())
    }
}
