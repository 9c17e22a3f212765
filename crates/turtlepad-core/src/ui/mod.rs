//! Widget façade: buttons, inputs, labels and images placed absolutely in a
//! host document.
//!
//! Every operation runs to completion synchronously. Errors are reported
//! through [`UiError`] and logged; none of them leave a partial mutation.

mod properties;

pub use properties::{Property, PropertyValue, Setter};

use crate::document::{Document, DocumentError, ElementKind, EventHandler, ListenerId, UiEvent};
use crate::styles::{Geometry, StyleCategory, StyleSet};
use thiserror::Error;

/// Attribute marking the shared `write()` overlay.
pub const WRITE_MARKER: &str = "data-write-content";
/// Class of the shared `write()` overlay.
pub const WRITE_CLASS: &str = "write-content";

/// Widget façade errors.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("An element with id '{0}' already exists")]
    DuplicateIdentifier(String),
    #[error("{operation} is not supported on '{id}' ({kind} element)")]
    UnsupportedElementKind {
        id: String,
        kind: ElementKind,
        operation: &'static str,
    },
    #[error("Unsupported property: {0}")]
    UnknownProperty(String),
    #[error("No element with id '{0}'")]
    ElementNotFound(String),
    #[error("{0} are not supported yet")]
    NotImplemented(&'static str),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result type for widget operations.
pub type UiResult<T> = Result<T, UiError>;

/// Log a reported error and hand it back.
fn reported(err: UiError) -> UiError {
    log::warn!("{err}");
    err
}

fn unsupported(id: &str, kind: ElementKind, operation: &'static str) -> UiError {
    reported(UiError::UnsupportedElementKind {
        id: id.to_string(),
        kind,
        operation,
    })
}

/// Write text into the field appropriate for the element kind.
pub(crate) fn write_text<D: Document>(
    document: &mut D,
    element: &D::Element,
    id: &str,
    text: &str,
    operation: &'static str,
) -> UiResult<()> {
    let kind = document.kind(element);
    if kind.is_input() {
        document.set_value(element, text)?;
    } else if kind.is_text_bearing() {
        document.set_text(element, text)?;
    } else {
        return Err(unsupported(id, kind, operation));
    }
    Ok(())
}

pub(crate) fn write_image_url<D: Document>(
    document: &mut D,
    element: &D::Element,
    id: &str,
    url: &str,
    operation: &'static str,
) -> UiResult<()> {
    let kind = document.kind(element);
    if !kind.is_image() {
        return Err(unsupported(id, kind, operation));
    }
    document.set_attribute(element, "src", url)?;
    Ok(())
}

/// Widget façade over a host document.
#[derive(Debug)]
pub struct Ui<D> {
    document: D,
}

impl<D: Document> Ui<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }

    fn lookup(&self, id: &str) -> UiResult<D::Element> {
        self.document
            .element_by_id(id)
            .ok_or_else(|| reported(UiError::ElementNotFound(id.to_string())))
    }

    /// Create, style and attach a new element with a unique id.
    fn create(
        &mut self,
        kind: ElementKind,
        id: &str,
        category: StyleCategory,
        geometry: &Geometry,
        init: impl FnOnce(&mut D, &D::Element) -> Result<(), DocumentError>,
    ) -> UiResult<D::Element> {
        if self.document.element_by_id(id).is_some() {
            return Err(reported(UiError::DuplicateIdentifier(id.to_string())));
        }
        let element = self.document.create_element(&kind)?;
        self.document.set_attribute(&element, "id", id)?;
        init(&mut self.document, &element)?;
        StyleSet::merged(category, geometry).apply(&mut self.document, &element)?;
        self.document.append(&element)?;
        Ok(element)
    }

    pub fn button(&mut self, id: &str, text: &str, geometry: Geometry) -> UiResult<D::Element> {
        self.create(ElementKind::Button, id, StyleCategory::Button, &geometry, |doc, el| {
            doc.set_text(el, text)
        })
    }

    pub fn text_input(&mut self, id: &str, placeholder: &str, geometry: Geometry) -> UiResult<D::Element> {
        self.create(ElementKind::Input, id, StyleCategory::Input, &geometry, |doc, el| {
            doc.set_attribute(el, "placeholder", placeholder)
        })
    }

    pub fn text_label(&mut self, id: &str, text: &str, geometry: Geometry) -> UiResult<D::Element> {
        self.create(ElementKind::Label, id, StyleCategory::Label, &geometry, |doc, el| {
            doc.set_text(el, text)
        })
    }

    pub fn image(&mut self, id: &str, url: &str, geometry: Geometry) -> UiResult<D::Element> {
        self.create(ElementKind::Image, id, StyleCategory::Image, &geometry, |doc, el| {
            doc.set_attribute(el, "src", url)
        })
    }

    /// Text of an element: the value of inputs, the text content otherwise.
    ///
    /// Buttons are readable too, so a script can read back a caption it set
    /// with `button`. Writing stays limited to inputs and text-bearing
    /// elements (see [`Ui::set_text`]).
    pub fn get_text(&self, id: &str) -> UiResult<String> {
        let element = self.lookup(id)?;
        let kind = self.document.kind(&element);
        if kind.is_input() {
            Ok(self.document.value(&element))
        } else if kind.is_text_bearing() || kind == ElementKind::Button {
            Ok(self.document.text(&element))
        } else {
            Err(unsupported(id, kind, "get_text"))
        }
    }

    /// Replace the text of an input or text-bearing element.
    pub fn set_text(&mut self, id: &str, text: &str) -> UiResult<()> {
        let element = self.lookup(id)?;
        write_text(&mut self.document, &element, id, text, "set_text")
    }

    pub fn get_image_url(&self, id: &str) -> UiResult<String> {
        let element = self.lookup(id)?;
        let kind = self.document.kind(&element);
        if !kind.is_image() {
            return Err(unsupported(id, kind, "get_image_url"));
        }
        Ok(self.document.attribute(&element, "src").unwrap_or_default())
    }

    pub fn set_image_url(&mut self, id: &str, url: &str) -> UiResult<()> {
        let element = self.lookup(id)?;
        write_image_url(&mut self.document, &element, id, url, "set_image_url")
    }

    pub fn show_element(&mut self, id: &str) -> UiResult<()> {
        let element = self.lookup(id)?;
        self.document.set_hidden(&element, false)?;
        Ok(())
    }

    pub fn hide_element(&mut self, id: &str) -> UiResult<()> {
        let element = self.lookup(id)?;
        self.document.set_hidden(&element, true)?;
        Ok(())
    }

    pub fn delete_element(&mut self, id: &str) -> UiResult<()> {
        let element = self.lookup(id)?;
        self.document.remove(&element)?;
        Ok(())
    }

    /// Reapply position and size; unset or zero sizes are left alone.
    pub fn set_position(&mut self, id: &str, geometry: Geometry) -> UiResult<()> {
        let element = self.lookup(id)?;
        geometry.overrides().apply(&mut self.document, &element)?;
        Ok(())
    }

    /// Reapply width and height, keeping the current left/top.
    pub fn set_size(&mut self, id: &str, width: f64, height: f64) -> UiResult<()> {
        let element = self.lookup(id)?;
        Geometry::sized(width, height)
            .overrides()
            .apply(&mut self.document, &element)?;
        Ok(())
    }

    /// Set a named property through the dispatch table.
    pub fn set_property(
        &mut self,
        id: &str,
        property: &str,
        value: impl Into<PropertyValue>,
    ) -> UiResult<String> {
        let property = Property::from_name(property)
            .ok_or_else(|| reported(UiError::UnknownProperty(property.to_string())))?;
        let element = self.lookup(id)?;
        property.apply(&mut self.document, &element, id, &value.into())
    }

    /// Append a line to the shared text overlay, creating it on first use.
    pub fn write(&mut self, text: &str) -> UiResult<()> {
        let overlay = match self.document.element_with_attribute(WRITE_MARKER) {
            Some(el) => el,
            None => {
                log::debug!("Creating write overlay");
                let el = self.document.create_element(&ElementKind::Div)?;
                self.document.set_attribute(&el, "class", WRITE_CLASS)?;
                self.document.set_attribute(&el, WRITE_MARKER, "true")?;
                StyleSet::defaults(StyleCategory::Write).apply(&mut self.document, &el)?;
                self.document.append(&el)?;
                el
            }
        };
        let mut content = self.document.text(&overlay);
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(text);
        self.document.set_text(&overlay, &content)?;
        Ok(())
    }

    /// Subscribe `handler` to `event_type` on the element. Subscriptions
    /// accumulate and are never removed.
    pub fn on_event(
        &mut self,
        id: &str,
        event_type: &str,
        handler: impl FnMut(&UiEvent) + 'static,
    ) -> UiResult<ListenerId> {
        let element = self.lookup(id)?;
        let handler: EventHandler = Box::new(handler);
        let listener = self.document.add_listener(&element, event_type, handler)?;
        log::debug!("Listening for '{event_type}' on '{id}'");
        Ok(listener)
    }

    pub fn drop_down(&mut self, _id: &str, _options: &[&str]) -> UiResult<D::Element> {
        Err(reported(UiError::NotImplemented("drop-downs")))
    }

    pub fn checkbox(&mut self, _id: &str, _checked: bool) -> UiResult<D::Element> {
        Err(reported(UiError::NotImplemented("checkboxes")))
    }

    pub fn play_sound(&mut self, _url: &str) -> UiResult<()> {
        Err(reported(UiError::NotImplemented("sounds")))
    }

    pub fn stop_sound(&mut self, _url: &str) -> UiResult<()> {
        Err(reported(UiError::NotImplemented("sounds")))
    }

    pub fn set_screen(&mut self, _id: &str) -> UiResult<()> {
        Err(reported(UiError::NotImplemented("screens")))
    }

    pub fn get_property(&self, _id: &str, _property: &str) -> UiResult<PropertyValue> {
        Err(reported(UiError::NotImplemented("property reads")))
    }

    pub fn get_x_position(&self, _id: &str) -> UiResult<f64> {
        Err(reported(UiError::NotImplemented("position reads")))
    }

    pub fn get_y_position(&self, _id: &str) -> UiResult<f64> {
        Err(reported(UiError::NotImplemented("position reads")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ui() -> Ui<MemoryDocument> {
        Ui::new(MemoryDocument::new())
    }

    fn style(ui: &Ui<MemoryDocument>, id: &str, name: &str) -> Option<String> {
        let el = ui.document().element_by_id(id)?;
        ui.document().style(&el, name)
    }

    #[test]
    fn test_button_gets_defaults_and_overrides() {
        let mut ui = ui();
        ui.button("b1", "Hello", Geometry::new(100.0, 50.0, 200.0, 50.0)).unwrap();
        assert_eq!(style(&ui, "b1", "left").as_deref(), Some("100px"));
        assert_eq!(style(&ui, "b1", "height").as_deref(), Some("50px"));
        assert_eq!(style(&ui, "b1", "background-color").as_deref(), Some("rgb(26, 188, 156)"));
        assert_eq!(ui.get_text("b1").unwrap(), "Hello");
    }

    #[test]
    fn test_duplicate_button_is_rejected() {
        let mut ui = ui();
        ui.button("b1", "one", Geometry::default()).unwrap();
        let err = ui.button("b1", "two", Geometry::default()).unwrap_err();
        assert!(matches!(err, UiError::DuplicateIdentifier(id) if id == "b1"));
        assert_eq!(ui.document().count_kind(&ElementKind::Button), 1);
        assert_eq!(ui.get_text("b1").unwrap(), "one");
    }

    #[test]
    fn test_ids_are_unique_across_kinds() {
        let mut ui = ui();
        ui.text_label("x", "label", Geometry::default()).unwrap();
        assert!(matches!(
            ui.image("x", "cat.png", Geometry::default()),
            Err(UiError::DuplicateIdentifier(_))
        ));
        assert_eq!(ui.document().len(), 1);
    }

    #[test]
    fn test_text_input_uses_value() {
        let mut ui = ui();
        ui.text_input("in", "Type here!", Geometry::default()).unwrap();
        let el = ui.document().element_by_id("in").unwrap();
        assert_eq!(ui.document().attribute(&el, "placeholder").as_deref(), Some("Type here!"));
        assert_eq!(ui.get_text("in").unwrap(), "");
        ui.set_text("in", "typed").unwrap();
        assert_eq!(ui.get_text("in").unwrap(), "typed");
        assert_eq!(ui.document().text(&el), "");
    }

    #[test]
    fn test_set_text_rejects_images_and_buttons() {
        let mut ui = ui();
        ui.image("img", "a.png", Geometry::default()).unwrap();
        ui.button("btn", "Go", Geometry::default()).unwrap();
        assert!(matches!(
            ui.set_text("img", "nope"),
            Err(UiError::UnsupportedElementKind { kind: ElementKind::Image, .. })
        ));
        assert!(matches!(
            ui.set_text("btn", "nope"),
            Err(UiError::UnsupportedElementKind { kind: ElementKind::Button, .. })
        ));
        assert_eq!(ui.get_text("btn").unwrap(), "Go");
        assert!(ui.get_text("img").is_err());
    }

    #[test]
    fn test_image_url_accessors() {
        let mut ui = ui();
        ui.image("img1", "a.png", Geometry::default()).unwrap();
        ui.text_label("label1", "hi", Geometry::default()).unwrap();
        assert_eq!(ui.get_image_url("img1").unwrap(), "a.png");
        ui.set_image_url("img1", "b.png").unwrap();
        assert_eq!(ui.get_image_url("img1").unwrap(), "b.png");

        assert!(matches!(
            ui.get_image_url("label1"),
            Err(UiError::UnsupportedElementKind { operation: "get_image_url", .. })
        ));
        assert!(ui.set_image_url("label1", "c.png").is_err());
        let el = ui.document().element_by_id("label1").unwrap();
        assert_eq!(ui.document().attribute(&el, "src"), None);
    }

    #[test]
    fn test_missing_element() {
        let mut ui = ui();
        assert!(matches!(ui.hide_element("ghost"), Err(UiError::ElementNotFound(_))));
        assert!(matches!(ui.get_text("ghost"), Err(UiError::ElementNotFound(_))));
    }

    #[test]
    fn test_show_hide_delete() {
        let mut ui = ui();
        let el = ui.text_label("l", "hi", Geometry::default()).unwrap();
        ui.hide_element("l").unwrap();
        assert!(ui.document().is_hidden(&el));
        ui.show_element("l").unwrap();
        assert!(!ui.document().is_hidden(&el));
        ui.delete_element("l").unwrap();
        assert!(ui.document().element_by_id("l").is_none());
        // The id is free again.
        ui.text_label("l", "again", Geometry::default()).unwrap();
    }

    #[test]
    fn test_set_position_and_size() {
        let mut ui = ui();
        ui.button("b", "b", Geometry::default()).unwrap();
        ui.set_position("b", Geometry::new(10.0, 20.0, 30.0, 40.0)).unwrap();
        assert_eq!(style(&ui, "b", "left").as_deref(), Some("10px"));
        assert_eq!(style(&ui, "b", "width").as_deref(), Some("30px"));

        ui.set_size("b", 300.0, 400.0).unwrap();
        assert_eq!(style(&ui, "b", "left").as_deref(), Some("10px"));
        assert_eq!(style(&ui, "b", "top").as_deref(), Some("20px"));
        assert_eq!(style(&ui, "b", "width").as_deref(), Some("300px"));
        assert_eq!(style(&ui, "b", "height").as_deref(), Some("400px"));
    }

    #[test]
    fn test_set_property_dispatch() {
        let mut ui = ui();
        ui.image("img1", "a.png", Geometry::default()).unwrap();
        assert_eq!(ui.set_property("img1", "width", 64).unwrap(), "64px");
        assert_eq!(ui.set_property("img1", "x", "12").unwrap(), "12px");
        assert_eq!(ui.set_property("img1", "y", "10%").unwrap(), "10%");
        assert_eq!(ui.set_property("img1", "image", "b.png").unwrap(), "b.png");
        assert_eq!(ui.set_property("img1", "hidden", true).unwrap(), "true");
        assert_eq!(style(&ui, "img1", "width").as_deref(), Some("64px"));
        assert_eq!(style(&ui, "img1", "top").as_deref(), Some("10%"));
        assert_eq!(ui.get_image_url("img1").unwrap(), "b.png");
    }

    #[test]
    fn test_set_property_unknown_name() {
        let mut ui = ui();
        ui.image("img1", "a.png", Geometry::default()).unwrap();
        let before = ui.document().snapshot();
        let err = ui.set_property("img1", "rotate", 45).unwrap_err();
        assert!(matches!(err, UiError::UnknownProperty(name) if name == "rotate"));
        assert_eq!(ui.document().snapshot(), before);
    }

    #[test]
    fn test_set_property_text_on_label() {
        let mut ui = ui();
        ui.text_label("l", "old", Geometry::default()).unwrap();
        ui.set_property("l", "text", "new").unwrap();
        ui.set_property("l", "text-color", "red").unwrap();
        assert_eq!(ui.get_text("l").unwrap(), "new");
        assert_eq!(style(&ui, "l", "color").as_deref(), Some("red"));
    }

    #[test]
    fn test_write_appends_lines_to_one_overlay() {
        let mut ui = ui();
        ui.write("hello").unwrap();
        ui.write("world").unwrap();
        let overlay = ui.document().element_with_attribute(WRITE_MARKER).unwrap();
        assert_eq!(ui.document().text(&overlay), "hello\nworld");
        assert_eq!(ui.document().attribute(&overlay, "class").as_deref(), Some(WRITE_CLASS));
        assert_eq!(ui.document().count_kind(&ElementKind::Div), 1);
    }

    #[test]
    fn test_on_event_accumulates() {
        let mut ui = ui();
        ui.button("b", "b", Geometry::default()).unwrap();
        let clicks = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let clicks = Rc::clone(&clicks);
            ui.on_event("b", "click", move |_| clicks.set(clicks.get() + 1)).unwrap();
        }
        assert_eq!(ui.document_mut().dispatch("b", "click"), 2);
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_stubs_report_not_implemented() {
        let mut ui = ui();
        assert!(matches!(ui.drop_down("d", &["a", "b"]), Err(UiError::NotImplemented(_))));
        assert!(matches!(ui.checkbox("c", true), Err(UiError::NotImplemented(_))));
        assert!(matches!(ui.play_sound("s.mp3"), Err(UiError::NotImplemented(_))));
        assert!(matches!(ui.stop_sound("s.mp3"), Err(UiError::NotImplemented(_))));
        assert!(matches!(ui.set_screen("main"), Err(UiError::NotImplemented(_))));
        assert!(matches!(ui.get_property("x", "text"), Err(UiError::NotImplemented(_))));
        assert!(matches!(ui.get_x_position("x"), Err(UiError::NotImplemented(_))));
        assert!(matches!(ui.get_y_position("x"), Err(UiError::NotImplemented(_))));
        assert!(ui.document().is_empty());
    }

    #[test]
    fn test_label_gets_default_table_verbatim() {
        let mut ui = ui();
        let el = ui.text_label("l", "hi", Geometry::default()).unwrap();
        // Unitless values such as `line-height: 1` must not gain a unit.
        assert_eq!(ui.document().style(&el, "line-height").as_deref(), Some("1"));
        let expected: Vec<(String, String)> = StyleCategory::Label
            .defaults()
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        assert_eq!(ui.document().snapshot()[0].styles, expected);
    }
}
