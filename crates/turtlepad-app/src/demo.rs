//! The built-in demo program.

use std::cell::RefCell;
use std::rc::Rc;
use turtlepad_core::{ArcSide, Document, DrawingSurface, Geometry, SurfaceResult, Turtle, Ui, UiEvent, UiResult};

pub const IMAGE_ID: &str = "test-image";
pub const BUTTON_ID: &str = "test-btn";
pub const INPUT_ID: &str = "test-input";
pub const LABEL_ID: &str = "test-label";

const IMAGE_URL: &str = "https://i.redd.it/f7sp2hsovtx01.jpg";

/// Events captured by demo handlers, drained by the runner.
pub type EventQueue = Rc<RefCell<Vec<UiEvent>>>;

/// Draw a square, a wave of arcs and a few dots.
pub fn draw<S: DrawingSurface>(turtle: &mut Turtle<S>) -> SurfaceResult<()> {
    turtle.pen_color("#1abc9c")?;
    turtle.pen_width(3.0)?;
    for _ in 0..4 {
        turtle.move_forward(60.0)?;
        turtle.turn_right(90.0);
    }

    turtle.pen_up();
    turtle.move_by(-60.0, 80.0)?;
    turtle.pen_down();
    turtle.turn_to(90.0);
    turtle.pen_rgb(231, 76, 60, None)?;
    for i in 0..3 {
        let side = if i % 2 == 0 { ArcSide::Left } else { ArcSide::Right };
        turtle.arc(180.0, 20.0, side)?;
    }

    turtle.pen_up();
    turtle.move_forward(20.0)?;
    turtle.pen_rgb(52, 73, 94, Some(0.8))?;
    // Dots ignore the pen state.
    turtle.dot(6.0)?;
    Ok(())
}

/// Lay out the demo widgets and queue every click on the button.
pub fn build_widgets<D: Document>(ui: &mut Ui<D>, clicks: EventQueue) -> UiResult<()> {
    ui.image(IMAGE_ID, IMAGE_URL, Geometry::new(0.0, 0.0, 100.0, 100.0))?;
    ui.button(BUTTON_ID, "Hello, world!", Geometry::new(100.0, 50.0, 200.0, 50.0))?;
    ui.on_event(BUTTON_ID, "click", move |event| {
        clicks.borrow_mut().push(event.clone());
    })?;
    ui.text_input(INPUT_ID, "Type here!", Geometry::new(100.0, 250.0, 200.0, 50.0))?;
    ui.text_label(LABEL_ID, "Label", Geometry::new(300.0, 0.0, 50.0, 50.0))?;
    Ok(())
}

/// Answer queued clicks by echoing the input field into the write overlay.
pub fn answer_clicks<D: Document>(ui: &mut Ui<D>, clicks: &EventQueue) -> UiResult<usize> {
    let events: Vec<UiEvent> = clicks.borrow_mut().drain(..).collect();
    for event in &events {
        let typed = ui.get_text(INPUT_ID)?;
        log::info!("{} on '{}': {typed}", event.event_type, event.target_id);
        ui.write(&format!("You typed: {typed}"))?;
    }
    Ok(events.len())
}
