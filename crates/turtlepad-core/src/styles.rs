//! Default widget styles and geometry overrides.

use crate::document::{Document, DocumentResult};
use std::borrow::Cow;

/// Category of element with its own default style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Button,
    Input,
    Label,
    Image,
    /// The shared `write()` overlay.
    Write,
}

const BUTTON: &[(&str, &str)] = &[
    ("padding", "0px"),
    ("margin", "0px"),
    ("height", "30px"),
    ("width", "80px"),
    ("font-size", "14px"),
    ("color", "rgb(255, 255, 255)"),
    ("background-color", "rgb(26, 188, 156)"),
    ("left", "90px"),
    ("top", "60px"),
    ("border", "none"),
    ("cursor", "pointer"),
    ("position", "absolute"),
];

const INPUT: &[(&str, &str)] = &[
    ("margin", "0px"),
    ("width", "200px"),
    ("height", "30px"),
    ("color", "rgb(0, 0, 0)"),
    ("left", "25px"),
    ("top", "165px"),
    ("border", "1px solid #999"),
    ("padding", "5px"),
    ("position", "absolute"),
];

const LABEL: &[(&str, &str)] = &[
    ("padding", "2px"),
    ("line-height", "1"),
    ("font-size", "14px"),
    ("overflow", "hidden"),
    ("word-wrap", "break-word"),
    ("color", "rgb(51, 51, 51)"),
    ("max-width", "320px"),
    ("width", "32px"),
    ("height", "19px"),
    ("position", "absolute"),
];

const IMAGE: &[(&str, &str)] = &[
    ("height", "100px"),
    ("width", "100px"),
    ("position", "absolute"),
    ("left", "25px"),
    ("top", "245px"),
    ("margin", "0px"),
    ("object-fit", "contain"),
];

const WRITE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("left", "0px"),
    ("top", "0px"),
    ("margin", "0px"),
    ("padding", "4px"),
    ("font-family", "monospace"),
    ("font-size", "14px"),
    ("white-space", "pre-wrap"),
    ("pointer-events", "none"),
];

impl StyleCategory {
    /// The immutable default style table.
    pub fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            StyleCategory::Button => BUTTON,
            StyleCategory::Input => INPUT,
            StyleCategory::Label => LABEL,
            StyleCategory::Image => IMAGE,
            StyleCategory::Write => WRITE,
        }
    }
}

/// Format a pixel length.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Add a `px` unit to bare digit strings.
///
/// Only non-empty runs of ASCII digits are coerced: `"10"` becomes `"10px"`.
/// Anything else (`"10px"`, `"10%"`, `"1.5em"`, `"auto"`, `""`) is returned
/// unchanged.
pub fn coerce_length(value: &str) -> Cow<'_, str> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Owned(format!("{value}px"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Optional position and size given by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Style overrides for the provided values.
    ///
    /// Position applies whenever given, zero included. A zero size means
    /// "keep the default" and is skipped.
    pub fn overrides(&self) -> StyleSet {
        let mut set = StyleSet::default();
        if let Some(w) = self.width.filter(|w| *w != 0.0) {
            set.insert("width", px(w));
        }
        if let Some(h) = self.height.filter(|h| *h != 0.0) {
            set.insert("height", px(h));
        }
        if let Some(x) = self.x {
            set.insert("left", px(x));
        }
        if let Some(y) = self.y {
            set.insert("top", px(y));
        }
        set
    }
}

/// Ordered set of style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    entries: Vec<(String, String)>,
}

impl StyleSet {
    /// Defaults of `category` as an owned set.
    pub fn defaults(category: StyleCategory) -> Self {
        let mut set = Self::default();
        for (name, value) in category.defaults() {
            set.insert(*name, *value);
        }
        set
    }

    /// Defaults of `category` with the geometry overrides applied on top.
    pub fn merged(category: StyleCategory, geometry: &Geometry) -> Self {
        let mut set = Self::defaults(category);
        set.extend(geometry.overrides());
        set
    }

    /// Set `name`, replacing an existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Merge `other` into this set; its values win.
    pub fn extend(&mut self, other: StyleSet) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Write every declaration onto the element's inline style, verbatim.
    pub fn apply<D: Document>(&self, document: &mut D, element: &D::Element) -> DocumentResult<()> {
        for (name, value) in self.iter() {
            document.set_style(element, name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_bare_digits() {
        assert_eq!(coerce_length("10"), "10px");
        assert_eq!(coerce_length("0"), "0px");
    }

    #[test]
    fn test_coerce_leaves_units_alone() {
        assert_eq!(coerce_length("10px"), "10px");
        assert_eq!(coerce_length("10%"), "10%");
        assert_eq!(coerce_length("1.5em"), "1.5em");
        assert_eq!(coerce_length("1.5"), "1.5");
        assert_eq!(coerce_length("-3"), "-3");
        assert_eq!(coerce_length("auto"), "auto");
        assert_eq!(coerce_length(""), "");
    }

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(100.0), "100px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(-4.0), "-4px");
    }

    #[test]
    fn test_overrides_skip_zero_size_but_keep_zero_position() {
        let set = Geometry::new(0.0, 0.0, 0.0, 50.0).overrides();
        assert_eq!(set.get("left"), Some("0px"));
        assert_eq!(set.get("top"), Some("0px"));
        assert_eq!(set.get("width"), None);
        assert_eq!(set.get("height"), Some("50px"));
    }

    #[test]
    fn test_merge_overrides_defaults_in_place() {
        let set = StyleSet::merged(StyleCategory::Button, &Geometry::new(100.0, 50.0, 200.0, 0.0));
        assert_eq!(set.len(), BUTTON.len());
        assert_eq!(set.get("left"), Some("100px"));
        assert_eq!(set.get("top"), Some("50px"));
        assert_eq!(set.get("width"), Some("200px"));
        assert_eq!(set.get("height"), Some("30px"));
        assert_eq!(set.get("cursor"), Some("pointer"));
    }

    #[test]
    fn test_merge_never_mutates_defaults() {
        let _ = StyleSet::merged(StyleCategory::Image, &Geometry::sized(10.0, 10.0));
        let fresh = StyleSet::defaults(StyleCategory::Image);
        assert_eq!(fresh.get("width"), Some("100px"));
    }

    #[test]
    fn test_label_defaults_gain_position() {
        let set = StyleSet::merged(StyleCategory::Label, &Geometry::at(5.0, 6.0));
        assert_eq!(set.len(), LABEL.len() + 2);
        assert_eq!(set.get("left"), Some("5px"));
    }
}
