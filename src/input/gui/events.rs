//! Translation of winit window events into explorer input events.

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::input::events::{InputEvent, Key, PointerButton};
use crate::core::data::point::Point;

#[must_use]
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

#[must_use]
pub fn key(physical_key: PhysicalKey) -> Key {
    match physical_key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

/// Remembers the last pointer pixel, since winit button events carry no position.
#[derive(Debug, Default)]
pub struct EventTranslator {
    pointer: Point,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `to_pixel` maps a physical window position onto the frame's pixel grid.
    pub fn translate(
        &mut self,
        event: &WindowEvent,
        to_pixel: impl Fn(f64, f64) -> Point,
    ) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Closed),
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = to_pixel(position.x, position.y);
                Some(InputEvent::PointerMoved {
                    x: self.pointer.x,
                    y: self.pointer.y,
                })
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => Some(InputEvent::PointerPressed {
                button: pointer_button(*button),
                x: self.pointer.x,
                y: self.pointer.y,
            }),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Some(InputEvent::KeyPressed(key(event.physical_key)))
            }
            _ => None,
        }
    }
}
