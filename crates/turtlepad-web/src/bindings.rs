//! JavaScript entry points.
//!
//! Method names and argument defaults follow the beginner API scripts are
//! written against (`moveForward()` walks 25 pixels, `turnRight()` turns a
//! quarter, and so on).

use crate::canvas::CanvasSurface;
use crate::dom::DomDocument;
use crate::{color_channel, or_default};
use turtlepad_core::{
    DEFAULT_MOVE_DISTANCE, DEFAULT_TURN_DEGREES, Geometry, Library, LibraryConfig, PropertyValue,
    SurfaceError, UiError, UiEvent, UiResult,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {e}").into());
    }
}

fn surface_error(err: SurfaceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Map a widget result for JavaScript.
///
/// Reported errors were already logged to the console and resolve to
/// `undefined`; host failures throw.
fn settle<T>(result: UiResult<T>) -> Result<Option<T>, JsValue> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(UiError::Document(e)) => Err(JsValue::from_str(&e.to_string())),
        Err(_) => Ok(None),
    }
}

/// Creation calls answer whether an element was added.
fn created<T>(result: UiResult<T>) -> Result<bool, JsValue> {
    settle(result).map(|v| v.is_some())
}

fn geometry(x: Option<f64>, y: Option<f64>, width: Option<f64>, height: Option<f64>) -> Geometry {
    Geometry { x, y, width, height }
}

fn property_value(value: &JsValue) -> PropertyValue {
    if let Some(n) = value.as_f64() {
        PropertyValue::Number(n)
    } else if let Some(b) = value.as_bool() {
        PropertyValue::Bool(b)
    } else if let Some(s) = value.as_string() {
        PropertyValue::Text(s)
    } else {
        PropertyValue::Text(format!("{value:?}"))
    }
}

fn event_object(event: &UiEvent) -> Result<JsValue, JsValue> {
    let object = js_sys::Object::new();
    js_sys::Reflect::set(&object, &"type".into(), &event.event_type.as_str().into())?;
    js_sys::Reflect::set(&object, &"target".into(), &event.target_id.as_str().into())?;
    Ok(object.into())
}

/// The turtle and widget API bound to one canvas and one container.
#[wasm_bindgen]
pub struct CodeLibrary {
    inner: Library<CanvasSurface, DomDocument>,
}

#[wasm_bindgen]
impl CodeLibrary {
    /// Bind to the widget container and canvas matched by the selectors.
    #[wasm_bindgen(constructor)]
    pub fn new(
        root_selector: &str,
        canvas_selector: &str,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<CodeLibrary, JsValue> {
        let defaults = LibraryConfig::default();
        let config = LibraryConfig::default().with_size(
            or_default(width, defaults.width),
            or_default(height, defaults.height),
        );
        let surface = CanvasSurface::from_selector(canvas_selector).map_err(surface_error)?;
        let document =
            DomDocument::from_selector(root_selector).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let inner = Library::new(surface, document, &config).map_err(surface_error)?;
        log::info!("TurtlePad ready ({}x{})", config.width, config.height);
        Ok(Self { inner })
    }

    // Turtle

    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.inner.turtle_mut().move_to(x, y);
    }

    #[wasm_bindgen(js_name = penColor)]
    pub fn pen_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.inner.turtle_mut().pen_color(color).map_err(surface_error)
    }

    pub fn dot(&mut self, radius: f64) -> Result<(), JsValue> {
        self.inner.turtle_mut().dot(radius).map_err(surface_error)
    }

    #[wasm_bindgen(js_name = turnRight)]
    pub fn turn_right(&mut self, degrees: Option<f64>) {
        self.inner
            .turtle_mut()
            .turn_right(or_default(degrees, DEFAULT_TURN_DEGREES));
    }

    #[wasm_bindgen(js_name = turnLeft)]
    pub fn turn_left(&mut self, degrees: Option<f64>) {
        self.inner
            .turtle_mut()
            .turn_left(or_default(degrees, DEFAULT_TURN_DEGREES));
    }

    #[wasm_bindgen(js_name = turnTo)]
    pub fn turn_to(&mut self, degrees: Option<f64>) {
        self.inner.turtle_mut().turn_to(degrees.unwrap_or(0.0));
    }

    #[wasm_bindgen(js_name = getX)]
    pub fn get_x(&self) -> f64 {
        self.inner.turtle().x()
    }

    #[wasm_bindgen(js_name = getY)]
    pub fn get_y(&self) -> f64 {
        self.inner.turtle().y()
    }

    #[wasm_bindgen(js_name = penUp)]
    pub fn pen_up(&mut self) {
        self.inner.turtle_mut().pen_up();
    }

    #[wasm_bindgen(js_name = penDown)]
    pub fn pen_down(&mut self) {
        self.inner.turtle_mut().pen_down();
    }

    #[wasm_bindgen(js_name = penRGB)]
    pub fn pen_rgb(&mut self, r: f64, g: f64, b: f64, alpha: Option<f64>) -> Result<(), JsValue> {
        self.inner
            .turtle_mut()
            .pen_rgb(color_channel(r), color_channel(g), color_channel(b), alpha)
            .map_err(surface_error)
    }

    #[wasm_bindgen(js_name = penWidth)]
    pub fn pen_width(&mut self, width: f64) -> Result<(), JsValue> {
        self.inner.turtle_mut().pen_width(width).map_err(surface_error)
    }

    #[wasm_bindgen(js_name = getDirection)]
    pub fn get_direction(&self) -> f64 {
        self.inner.turtle().direction()
    }

    #[wasm_bindgen(js_name = moveForward)]
    pub fn move_forward(&mut self, distance: Option<f64>) -> Result<(), JsValue> {
        self.inner
            .turtle_mut()
            .move_forward(or_default(distance, DEFAULT_MOVE_DISTANCE))
            .map_err(surface_error)
    }

    #[wasm_bindgen(js_name = moveBackward)]
    pub fn move_backward(&mut self, distance: Option<f64>) -> Result<(), JsValue> {
        self.inner
            .turtle_mut()
            .move_backward(or_default(distance, DEFAULT_MOVE_DISTANCE))
            .map_err(surface_error)
    }

    #[wasm_bindgen(js_name = "move")]
    pub fn move_by(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        self.inner.turtle_mut().move_by(dx, dy).map_err(surface_error)
    }

    #[wasm_bindgen(js_name = arcRight)]
    pub fn arc_right(&mut self, angle: f64, radius: f64) -> Result<(), JsValue> {
        self.inner
            .turtle_mut()
            .arc_right(angle, radius)
            .map_err(surface_error)
    }

    #[wasm_bindgen(js_name = arcLeft)]
    pub fn arc_left(&mut self, angle: f64, radius: f64) -> Result<(), JsValue> {
        self.inner
            .turtle_mut()
            .arc_left(angle, radius)
            .map_err(surface_error)
    }

    // Widgets

    /// Call `handler({ type, target })` whenever the element fires `event_type`.
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(
        &mut self,
        id: &str,
        event_type: &str,
        handler: js_sys::Function,
    ) -> Result<bool, JsValue> {
        let result = self.inner.ui_mut().on_event(id, event_type, move |event| {
            let result = event_object(event).and_then(|arg| handler.call1(&JsValue::NULL, &arg));
            if let Err(e) = result {
                log::error!("Event handler for '{}' failed: {e:?}", event.target_id);
            }
        });
        created(result)
    }

    pub fn button(
        &mut self,
        id: &str,
        text: &str,
        x: Option<f64>,
        y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<bool, JsValue> {
        created(self.inner.ui_mut().button(id, text, geometry(x, y, width, height)))
    }

    #[wasm_bindgen(js_name = textInput)]
    pub fn text_input(
        &mut self,
        id: &str,
        placeholder: Option<String>,
        x: Option<f64>,
        y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<bool, JsValue> {
        let placeholder = placeholder.unwrap_or_default();
        created(
            self.inner
                .ui_mut()
                .text_input(id, &placeholder, geometry(x, y, width, height)),
        )
    }

    #[wasm_bindgen(js_name = textLabel)]
    pub fn text_label(
        &mut self,
        id: &str,
        text: &str,
        x: Option<f64>,
        y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<bool, JsValue> {
        created(
            self.inner
                .ui_mut()
                .text_label(id, text, geometry(x, y, width, height)),
        )
    }

    pub fn image(
        &mut self,
        id: &str,
        url: &str,
        x: Option<f64>,
        y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<bool, JsValue> {
        created(self.inner.ui_mut().image(id, url, geometry(x, y, width, height)))
    }

    #[wasm_bindgen(js_name = dropDown)]
    pub fn drop_down(&mut self, id: &str, options: Vec<String>) -> Result<bool, JsValue> {
        let options: Vec<&str> = options.iter().map(String::as_str).collect();
        created(self.inner.ui_mut().drop_down(id, &options))
    }

    pub fn checkbox(&mut self, id: &str, checked: bool) -> Result<bool, JsValue> {
        created(self.inner.ui_mut().checkbox(id, checked))
    }

    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self, id: &str) -> Result<Option<String>, JsValue> {
        settle(self.inner.ui().get_text(id))
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, id: &str, text: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().set_text(id, text)).map(drop)
    }

    #[wasm_bindgen(js_name = getImageUrl)]
    pub fn get_image_url(&self, id: &str) -> Result<Option<String>, JsValue> {
        settle(self.inner.ui().get_image_url(id))
    }

    #[wasm_bindgen(js_name = setImageUrl)]
    pub fn set_image_url(&mut self, id: &str, url: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().set_image_url(id, url)).map(drop)
    }

    #[wasm_bindgen(js_name = playSound)]
    pub fn play_sound(&mut self, url: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().play_sound(url)).map(drop)
    }

    #[wasm_bindgen(js_name = stopSound)]
    pub fn stop_sound(&mut self, url: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().stop_sound(url)).map(drop)
    }

    #[wasm_bindgen(js_name = showElement)]
    pub fn show_element(&mut self, id: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().show_element(id)).map(drop)
    }

    #[wasm_bindgen(js_name = hideElement)]
    pub fn hide_element(&mut self, id: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().hide_element(id)).map(drop)
    }

    #[wasm_bindgen(js_name = deleteElement)]
    pub fn delete_element(&mut self, id: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().delete_element(id)).map(drop)
    }

    #[wasm_bindgen(js_name = setPosition)]
    pub fn set_position(
        &mut self,
        id: &str,
        x: Option<f64>,
        y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<(), JsValue> {
        settle(
            self.inner
                .ui_mut()
                .set_position(id, geometry(x, y, width, height)),
        )
        .map(drop)
    }

    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, id: &str, width: f64, height: f64) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().set_size(id, width, height)).map(drop)
    }

    #[wasm_bindgen(js_name = getProperty)]
    pub fn get_property(&self, id: &str, property: &str) -> Result<JsValue, JsValue> {
        let value = settle(self.inner.ui().get_property(id, property))?;
        Ok(match value {
            Some(PropertyValue::Number(n)) => JsValue::from_f64(n),
            Some(PropertyValue::Bool(b)) => JsValue::from_bool(b),
            Some(PropertyValue::Text(s)) => JsValue::from_str(&s),
            None => JsValue::UNDEFINED,
        })
    }

    /// Returns the value that was written, or `undefined` when rejected.
    #[wasm_bindgen(js_name = setProperty)]
    pub fn set_property(
        &mut self,
        id: &str,
        property: &str,
        value: JsValue,
    ) -> Result<Option<String>, JsValue> {
        settle(
            self.inner
                .ui_mut()
                .set_property(id, property, property_value(&value)),
        )
    }

    pub fn write(&mut self, text: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().write(text)).map(drop)
    }

    #[wasm_bindgen(js_name = getXPosition)]
    pub fn get_x_position(&self, id: &str) -> Result<Option<f64>, JsValue> {
        settle(self.inner.ui().get_x_position(id))
    }

    #[wasm_bindgen(js_name = getYPosition)]
    pub fn get_y_position(&self, id: &str) -> Result<Option<f64>, JsValue> {
        settle(self.inner.ui().get_y_position(id))
    }

    #[wasm_bindgen(js_name = setScreen)]
    pub fn set_screen(&mut self, id: &str) -> Result<(), JsValue> {
        settle(self.inner.ui_mut().set_screen(id)).map(drop)
    }
}
