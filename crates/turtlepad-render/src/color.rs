//! CSS color parsing.

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use turtlepad_core::{SurfaceError, SurfaceResult};

/// Parse any CSS color string (`#000`, `tomato`, `rgba(1, 2, 3, 0.5)`, ...).
pub fn parse_css_color(s: &str) -> SurfaceResult<Color> {
    parse_color(s.trim())
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|e| SurfaceError::InvalidColor(format!("{s}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_named() {
        let black = parse_css_color("#000").unwrap().to_rgba8();
        assert_eq!((black.r, black.g, black.b, black.a), (0, 0, 0, 255));
        let red = parse_css_color("red").unwrap().to_rgba8();
        assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    }

    #[test]
    fn test_rgb_functions() {
        let c = parse_css_color("rgb(26, 188, 156)").unwrap().to_rgba8();
        assert_eq!((c.r, c.g, c.b, c.a), (26, 188, 156, 255));
        let c = parse_css_color("rgba(10, 20, 30, 0.5)").unwrap().to_rgba8();
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
        assert!(c.a > 120 && c.a < 135);
    }

    #[test]
    fn test_invalid_color() {
        assert!(matches!(
            parse_css_color("not-a-color"),
            Err(SurfaceError::InvalidColor(_))
        ));
    }
}
