//! Document abstraction for widgets.
//!
//! The widget façade never touches a concrete DOM. It goes through
//! [`Document`], which the browser host implements over `web_sys` and
//! [`MemoryDocument`] implements in memory.

mod memory;

pub use memory::{MemoryDocument, NodeId, NodeSnapshot};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    #[error("Document backend error: {0}")]
    Backend(String),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Identifier of an event subscription.
pub type ListenerId = Uuid;

/// Kind of element, derived from its tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Button,
    Input,
    Label,
    Image,
    Div,
    Span,
    Paragraph,
    /// `h1` through `h6`.
    Heading(u8),
    /// Any other tag, lowercase.
    Other(String),
}

impl ElementKind {
    /// Lowercase HTML tag name.
    pub fn tag_name(&self) -> String {
        match self {
            ElementKind::Button => "button".to_string(),
            ElementKind::Input => "input".to_string(),
            ElementKind::Label => "label".to_string(),
            ElementKind::Image => "img".to_string(),
            ElementKind::Div => "div".to_string(),
            ElementKind::Span => "span".to_string(),
            ElementKind::Paragraph => "p".to_string(),
            ElementKind::Heading(level) => format!("h{level}"),
            ElementKind::Other(tag) => tag.clone(),
        }
    }

    /// Parse a tag or node name, case-insensitively.
    pub fn from_tag_name(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "button" => ElementKind::Button,
            "input" => ElementKind::Input,
            "label" => ElementKind::Label,
            "img" => ElementKind::Image,
            "div" => ElementKind::Div,
            "span" => ElementKind::Span,
            "p" => ElementKind::Paragraph,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                ElementKind::Heading(tag.as_bytes()[1] - b'0')
            }
            _ => ElementKind::Other(tag),
        }
    }

    /// Elements whose text lives in a value field.
    pub fn is_input(&self) -> bool {
        matches!(self, ElementKind::Input)
    }

    /// Elements whose text content may be rewritten.
    pub fn is_text_bearing(&self) -> bool {
        matches!(
            self,
            ElementKind::Label | ElementKind::Span | ElementKind::Paragraph | ElementKind::Heading(_)
        )
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ElementKind::Image)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag_name())
    }
}

/// An event delivered to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    /// Event type, e.g. `"click"`.
    pub event_type: String,
    /// Id of the element the handler was registered on.
    pub target_id: String,
}

/// Event callback.
pub type EventHandler = Box<dyn FnMut(&UiEvent)>;

/// A host document the widget façade can build elements in.
///
/// Elements are created detached and become visible to [`element_by_id`]
/// once appended to the container.
///
/// [`element_by_id`]: Document::element_by_id
pub trait Document {
    /// Handle to an element.
    type Element: Clone;

    /// Create a detached element.
    fn create_element(&mut self, kind: &ElementKind) -> DocumentResult<Self::Element>;

    /// Find an attached element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Find the first attached element carrying attribute `name`.
    fn element_with_attribute(&self, name: &str) -> Option<Self::Element>;

    fn kind(&self, element: &Self::Element) -> ElementKind;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str) -> DocumentResult<()>;

    /// Inline style value, `None` if unset.
    fn style(&self, element: &Self::Element, property: &str) -> Option<String>;

    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str) -> DocumentResult<()>;

    fn text(&self, element: &Self::Element) -> String;

    fn set_text(&mut self, element: &Self::Element, text: &str) -> DocumentResult<()>;

    /// Value of an input element.
    fn value(&self, element: &Self::Element) -> String;

    fn set_value(&mut self, element: &Self::Element, value: &str) -> DocumentResult<()>;

    fn is_hidden(&self, element: &Self::Element) -> bool;

    fn set_hidden(&mut self, element: &Self::Element, hidden: bool) -> DocumentResult<()>;

    /// Append the element to the container owned by this document.
    fn append(&mut self, element: &Self::Element) -> DocumentResult<()>;

    /// Remove the element from the document.
    fn remove(&mut self, element: &Self::Element) -> DocumentResult<()>;

    /// Subscribe `handler` to `event_type` events on the element.
    fn add_listener(
        &mut self,
        element: &Self::Element,
        event_type: &str,
        handler: EventHandler,
    ) -> DocumentResult<ListenerId>;
}
