//! Pan State
//!
//! Encapsulates the drag gesture state machine and the cumulative grid
//! offset. Drag deltas are applied atomically to the grid center and to
//! every hosted child, so children stay fixed relative to the grid.

use tracing::trace;

use crate::event::{MouseButton, MouseEvent};
use crate::primitives::Point;

/// A visual element that can be moved by panning.
///
/// Any type that exposes a mutable top-left position qualifies; the pan
/// controller needs no knowledge of a child's size, type, or content.
pub trait Pannable {
    /// Current top-left position within the surface.
    fn position(&self) -> Point;

    /// Move to a new top-left position.
    fn set_position(&mut self, position: Point);
}

/// Cumulative pan displacement since the surface was created.
///
/// Integer-valued: drag deltas are truncated before being applied, and the
/// same integral delta moves the grid and every child. Never reset
/// implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCenter {
    pub x: i32,
    pub y: i32,
}

impl GridCenter {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An action on the pan controller, produced by event handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanAction {
    /// A left-button press began a drag at this pointer location.
    DragStart(Point),
    /// The pointer moved to this location while dragging.
    DragMove(Point),
    /// The drag gesture ended.
    DragEnd,
}

/// Drag state machine plus the shared grid offset.
///
/// Event routing (`handle_mouse`) is separated from state mutation
/// (`apply`) so the host can route events through several handlers and
/// decide what consumes them:
///
/// ```
/// use pangrid::{MouseButton, MouseEvent, PanState, Pannable, Point};
///
/// let mut pan = PanState::new();
/// let event = MouseEvent::ButtonPressed {
///     button: MouseButton::Left,
///     position: Point::new(40.0, 40.0),
/// };
/// if let Some(action) = pan.handle_mouse(&event) {
///     let children: [&mut dyn Pannable; 0] = [];
///     pan.apply(action, children);
/// }
/// assert!(pan.is_dragging());
/// ```
#[derive(Debug, Default)]
pub struct PanState {
    /// Cumulative pan offset.
    center: GridCenter,
    /// Previous pointer location while a drag is active; `None` when idle.
    drag: Option<Point>,
}

impl PanState {
    /// Create an idle pan state centered at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current grid center.
    #[inline]
    pub fn center(&self) -> GridCenter {
        self.center
    }

    /// Whether a drag gesture is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Route a mouse event to a pan action, without mutating state.
    ///
    /// Only the left button starts a drag. A release of any button ends
    /// the gesture. Cursor moves while idle produce nothing, and pointer
    /// locations outside the viewport remain valid; panning never clamps.
    pub fn handle_mouse(&self, event: &MouseEvent) -> Option<PanAction> {
        match event {
            MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                position,
            } => Some(PanAction::DragStart(*position)),
            MouseEvent::CursorMoved { position } if self.drag.is_some() => {
                Some(PanAction::DragMove(*position))
            }
            MouseEvent::ButtonReleased { .. } if self.drag.is_some() => Some(PanAction::DragEnd),
            _ => None,
        }
    }

    /// Apply a pan action, translating `children` along with the grid.
    ///
    /// Returns `true` if the surface needs a redraw. Moves must be applied
    /// in arrival order: each delta is measured against the previously
    /// recorded pointer location.
    pub fn apply<'a, I>(&mut self, action: PanAction, children: I) -> bool
    where
        I: IntoIterator<Item = &'a mut dyn Pannable>,
    {
        match action {
            PanAction::DragStart(position) => {
                trace!(x = position.x, y = position.y, "drag start");
                self.drag = Some(position);
                false
            }
            PanAction::DragMove(position) => {
                let Some(previous) = self.drag else {
                    return false;
                };
                // Truncate to whole pixels; the fractional remainder is
                // intentionally dropped, not carried to the next move.
                let dx = (position.x - previous.x) as i32;
                let dy = (position.y - previous.y) as i32;
                self.pan_by(dx, dy, children);
                self.drag = Some(position);
                true
            }
            PanAction::DragEnd => {
                trace!("drag end");
                self.drag = None;
                false
            }
        }
    }

    /// Shift the grid center and every child by the same delta.
    ///
    /// This is the one place child positions are mutated, and it is purely
    /// additive, so repeated small deltas accumulate without drift.
    pub fn pan_by<'a, I>(&mut self, dx: i32, dy: i32, children: I)
    where
        I: IntoIterator<Item = &'a mut dyn Pannable>,
    {
        for child in children {
            let p = child.position();
            child.set_position(Point::new(p.x + dx as f32, p.y + dy as f32));
        }
        self.center.x += dx;
        self.center.y += dy;
        trace!(dx, dy, cx = self.center.x, cy = self.center.y, "pan");
    }
}
