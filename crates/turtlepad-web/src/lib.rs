//! TurtlePad browser host.
//!
//! Implements the core drawing surface on a `CanvasRenderingContext2d`, the
//! core document on the live DOM, and exports the beginner API to JavaScript.

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use bindings::{CodeLibrary, start};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use dom::DomDocument;

/// JavaScript-style numeric default: a missing, zero or NaN argument falls
/// back to `default`.
pub fn or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => default,
    }
}

/// Clamp a JavaScript number to a color channel, the way CSS clamps
/// `rgb()` components. NaN becomes 0.
pub fn color_channel(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.clamp(0.0, 255.0).round() as u8
    }
}
