//! Live DOM document.

use crate::canvas::js_error;
use turtlepad_core::document::{Document, DocumentError, DocumentResult, ElementKind, EventHandler, ListenerId, UiEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

fn backend(value: JsValue) -> DocumentError {
    DocumentError::Backend(js_error(value))
}

/// The page document, with new widgets appended under a root element.
#[derive(Debug, Clone)]
pub struct DomDocument {
    document: web_sys::Document,
    root: Element,
}

impl DomDocument {
    /// Use `root` as the widget container.
    pub fn new(root: Element) -> DocumentResult<Self> {
        let document = root
            .owner_document()
            .ok_or_else(|| DocumentError::Backend("Root element has no document".to_string()))?;
        Ok(Self { document, root })
    }

    /// Resolve the container from a CSS selector.
    pub fn from_selector(selector: &str) -> DocumentResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DocumentError::Backend("No document available".to_string()))?;
        let root = document
            .query_selector(selector)
            .map_err(backend)?
            .ok_or_else(|| DocumentError::ElementNotFound(selector.to_string()))?;
        Ok(Self { document, root })
    }
}

impl Document for DomDocument {
    type Element = HtmlElement;

    fn create_element(&mut self, kind: &ElementKind) -> DocumentResult<HtmlElement> {
        self.document
            .create_element(&kind.tag_name())
            .map_err(backend)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DocumentError::Backend(format!("<{kind}> is not an HTML element")))
    }

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn element_with_attribute(&self, name: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(&format!("[{name}]"))
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn kind(&self, element: &HtmlElement) -> ElementKind {
        ElementKind::from_tag_name(&element.tag_name())
    }

    fn attribute(&self, element: &HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&mut self, element: &HtmlElement, name: &str, value: &str) -> DocumentResult<()> {
        element.set_attribute(name, value).map_err(backend)
    }

    fn style(&self, element: &HtmlElement, property: &str) -> Option<String> {
        element
            .style()
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_style(&mut self, element: &HtmlElement, property: &str, value: &str) -> DocumentResult<()> {
        element.style().set_property(property, value).map_err(backend)
    }

    fn text(&self, element: &HtmlElement) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, element: &HtmlElement, text: &str) -> DocumentResult<()> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn value(&self, element: &HtmlElement) -> String {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_value(&mut self, element: &HtmlElement, value: &str) -> DocumentResult<()> {
        let input = element
            .dyn_ref::<HtmlInputElement>()
            .ok_or_else(|| DocumentError::Backend(format!("<{}> has no value", element.tag_name())))?;
        input.set_value(value);
        Ok(())
    }

    fn is_hidden(&self, element: &HtmlElement) -> bool {
        element.hidden()
    }

    fn set_hidden(&mut self, element: &HtmlElement, hidden: bool) -> DocumentResult<()> {
        element.set_hidden(hidden);
        Ok(())
    }

    fn append(&mut self, element: &HtmlElement) -> DocumentResult<()> {
        self.root.append_child(element).map(|_| ()).map_err(backend)
    }

    fn remove(&mut self, element: &HtmlElement) -> DocumentResult<()> {
        element.remove();
        Ok(())
    }

    fn add_listener(
        &mut self,
        element: &HtmlElement,
        event_type: &str,
        mut handler: EventHandler,
    ) -> DocumentResult<ListenerId> {
        let event = UiEvent {
            event_type: event_type.to_string(),
            target_id: element.id(),
        };
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| handler(&event));
        element
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
            .map_err(backend)?;
        // Listeners live as long as the page.
        closure.forget();
        Ok(ListenerId::new_v4())
    }
}
