//! Pointer notifications seen by camera behaviors.

/// Kind of pointer notification delivered on the pre-pointer channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A button was pressed.
    Down,
    /// A button was released.
    Up,
    /// The pointer moved.
    Move,
    /// Scroll wheel.
    Wheel,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Pointer notification, delivered before the camera's own input handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// Button involved, for `Down`/`Up`.
    pub button: Option<MouseButton>,
    /// Horizontal position in physical pixels.
    pub x: f32,
    /// Vertical position in physical pixels.
    pub y: f32,
}

impl PointerEvent {
    /// Button press at the given position.
    #[must_use]
    pub fn down(button: MouseButton, x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Down,
            button: Some(button),
            x,
            y,
        }
    }

    /// Button release at the given position.
    #[must_use]
    pub fn up(button: MouseButton, x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Up,
            button: Some(button),
            x,
            y,
        }
    }

    /// Pointer motion to the given position.
    #[must_use]
    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Move,
            button: None,
            x,
            y,
        }
    }
}
