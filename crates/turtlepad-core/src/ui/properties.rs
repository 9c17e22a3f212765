//! Property dispatch for `set_property`.
//!
//! Every supported property name maps to exactly one [`Setter`], so adding a
//! property means adding a variant and the compiler points at every match
//! that needs a new arm.

use super::{UiError, UiResult, write_image_url, write_text};
use crate::document::Document;
use crate::styles::{coerce_length, px};
use std::fmt;

/// A property settable through `set_property`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Text,
    Placeholder,
    X,
    Y,
    Width,
    Height,
    Image,
    Hidden,
    TextColor,
    BackgroundColor,
    FontSize,
    TextAlign,
    BorderColor,
    BorderWidth,
    BorderRadius,
}

/// How a property reaches the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setter {
    /// Inline style; `length` values get a `px` unit when bare.
    Style { property: &'static str, length: bool },
    /// Plain attribute.
    Attribute(&'static str),
    /// Text content or input value, restricted like `set_text`.
    Text,
    /// Image source, images only.
    ImageSource,
    /// The hidden flag.
    Visibility,
}

impl Property {
    pub const ALL: [Property; 15] = [
        Property::Text,
        Property::Placeholder,
        Property::X,
        Property::Y,
        Property::Width,
        Property::Height,
        Property::Image,
        Property::Hidden,
        Property::TextColor,
        Property::BackgroundColor,
        Property::FontSize,
        Property::TextAlign,
        Property::BorderColor,
        Property::BorderWidth,
        Property::BorderRadius,
    ];

    /// Name used by scripts.
    pub fn name(self) -> &'static str {
        match self {
            Property::Text => "text",
            Property::Placeholder => "placeholder",
            Property::X => "x",
            Property::Y => "y",
            Property::Width => "width",
            Property::Height => "height",
            Property::Image => "image",
            Property::Hidden => "hidden",
            Property::TextColor => "text-color",
            Property::BackgroundColor => "background-color",
            Property::FontSize => "font-size",
            Property::TextAlign => "text-align",
            Property::BorderColor => "border-color",
            Property::BorderWidth => "border-width",
            Property::BorderRadius => "border-radius",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn setter(self) -> Setter {
        let style = |property, length| Setter::Style { property, length };
        match self {
            Property::Text => Setter::Text,
            Property::Placeholder => Setter::Attribute("placeholder"),
            Property::X => style("left", true),
            Property::Y => style("top", true),
            Property::Width => style("width", true),
            Property::Height => style("height", true),
            Property::Image => Setter::ImageSource,
            Property::Hidden => Setter::Visibility,
            Property::TextColor => style("color", false),
            Property::BackgroundColor => style("background-color", false),
            Property::FontSize => style("font-size", true),
            Property::TextAlign => style("text-align", false),
            Property::BorderColor => style("border-color", false),
            Property::BorderWidth => style("border-width", true),
            Property::BorderRadius => style("border-radius", true),
        }
    }

    /// Apply `value` to `element` (whose id is `id`), returning the value as
    /// written to the document.
    pub fn apply<D: Document>(
        self,
        document: &mut D,
        element: &D::Element,
        id: &str,
        value: &PropertyValue,
    ) -> UiResult<String> {
        match self.setter() {
            Setter::Style { property, length } => {
                let applied = if length { value.as_length() } else { value.to_string() };
                document.set_style(element, property, &applied)?;
                Ok(applied)
            }
            Setter::Attribute(name) => {
                let applied = value.to_string();
                document.set_attribute(element, name, &applied)?;
                Ok(applied)
            }
            Setter::Text => {
                let applied = value.to_string();
                write_text(document, element, id, &applied, "set_property(text)")?;
                Ok(applied)
            }
            Setter::ImageSource => {
                let applied = value.to_string();
                write_image_url(document, element, id, &applied, "set_property(image)")?;
                Ok(applied)
            }
            Setter::Visibility => {
                let hidden = value.is_truthy();
                document.set_hidden(element, hidden)?;
                Ok(hidden.to_string())
            }
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Property {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UiError::UnknownProperty(s.to_string()))
    }
}

/// A value passed to `set_property`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl PropertyValue {
    /// CSS length: numbers become pixels, bare digit strings gain `px`.
    pub fn as_length(&self) -> String {
        match self {
            PropertyValue::Number(n) => px(*n),
            PropertyValue::Text(s) => coerce_length(s).into_owned(),
            PropertyValue::Bool(b) => b.to_string(),
        }
    }

    /// Loose truthiness: non-zero numbers and non-empty strings other than
    /// `"false"` are true.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropertyValue::Text(s) => !s.is_empty() && s != "false",
            PropertyValue::Bool(b) => *b,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}
