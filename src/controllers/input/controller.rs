use crate::controllers::input::events::{InputEvent, InputOutcome, Key, PointerButton};
use crate::controllers::viewport::controller::ViewportController;
use crate::core::data::point::Point;

/// Maps input events onto viewport operations.
///
/// Pointer moves update the cursor, a left press zooms in and then recenters
/// on the pressed pixel, a right press zooms out. Escape and window close end
/// the session. Everything else is ignored.
#[derive(Debug, Default)]
pub struct InputController {}

impl InputController {
    pub fn new() -> Self {
        Self {}
    }

    pub fn handle(&self, viewport: &mut ViewportController, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::PointerMoved { x, y } => {
                viewport.set_cursor(Point { x, y });
            }
            InputEvent::PointerPressed {
                button: PointerButton::Left,
                x,
                y,
            } => {
                // the click is mapped with the zoomed-in extents
                viewport.zoom_in();
                viewport.recenter(Point { x, y });
            }
            InputEvent::PointerPressed {
                button: PointerButton::Right,
                ..
            } => {
                viewport.zoom_out();
            }
            InputEvent::KeyPressed(Key::Escape) | InputEvent::Closed => {
                log::info!("exit requested");
                return InputOutcome::Exit;
            }
            InputEvent::PointerPressed { .. } | InputEvent::KeyPressed(Key::Other) => {}
        }

        InputOutcome::Continue
    }
}
