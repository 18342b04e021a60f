/// Pointer buttons the explorer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// A discrete input event in pixel coordinates, independent of any windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    PointerPressed { button: PointerButton, x: i32, y: i32 },
    KeyPressed(Key),
    Closed,
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Exit,
}
