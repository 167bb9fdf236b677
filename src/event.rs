//! Pointer event vocabulary.
//!
//! The surface consumes plain pointer events from the host toolkit. Only
//! left-button semantics are interpreted here; every other event is left
//! for the host to route elsewhere.

use crate::primitives::Point;

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Mouse event types.
#[derive(Debug, Clone)]
pub enum MouseEvent {
    /// Mouse button pressed.
    ButtonPressed {
        button: MouseButton,
        position: Point,
    },

    /// Mouse button released.
    ButtonReleased {
        button: MouseButton,
        position: Point,
    },

    /// Mouse cursor moved.
    CursorMoved {
        position: Point,
    },
}

impl MouseEvent {
    /// The pointer position carried by this event.
    pub fn position(&self) -> Point {
        match self {
            MouseEvent::ButtonPressed { position, .. }
            | MouseEvent::ButtonReleased { position, .. }
            | MouseEvent::CursorMoved { position } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_position() {
        let p = Point::new(12.0, 34.0);
        let press = MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: p,
        };
        let release = MouseEvent::ButtonReleased {
            button: MouseButton::Right,
            position: p,
        };
        let moved = MouseEvent::CursorMoved { position: p };

        assert_eq!(press.position(), p);
        assert_eq!(release.position(), p);
        assert_eq!(moved.position(), p);
    }
}
