//! pangrid: Pannable Grid Surface
//!
//! A host-agnostic container model that renders an infinite-looking
//! two-layer grid and pans it with left-button drags. Child elements
//! hosted on the surface move in lockstep with the grid, so they appear
//! fixed relative to it.
//!
//! The crate draws nothing itself. Each frame it records a [`DisplayList`]
//! (clear, lines, rectangles, labels) the host replays on its drawing
//! surface, and it signals repaints through an explicit dirty flag rather
//! than calling into the host.
//!
//! # Usage
//!
//! ```
//! use pangrid::{DisplayList, MouseButton, MouseEvent, PanArea, Pannable, Point, Rect};
//!
//! struct Node(Point);
//!
//! impl Pannable for Node {
//!     fn position(&self) -> Point { self.0 }
//!     fn set_position(&mut self, p: Point) { self.0 = p; }
//! }
//!
//! let mut area = PanArea::new();
//! let mut node = Node(Point::new(10.0, 10.0));
//!
//! // Drag from (0,0) to (25,0): grid center and children shift together.
//! area.on_mouse(
//!     &MouseEvent::ButtonPressed { button: MouseButton::Left, position: Point::ORIGIN },
//!     std::iter::empty(),
//! );
//! area.on_mouse(
//!     &MouseEvent::CursorMoved { position: Point::new(25.0, 0.0) },
//!     [&mut node as &mut dyn Pannable],
//! );
//!
//! if area.take_redraw() {
//!     let mut frame = DisplayList::new();
//!     area.render(Rect::new(0.0, 0.0, 300.0, 200.0), &mut frame);
//!     // hand `frame` to the drawing surface
//! }
//! ```

// Core primitives
pub mod primitives;
pub mod event;

// Appearance and output
pub mod style;
pub mod display;

// Pan controller and grid renderer
pub mod pan;
pub mod grid;

// Widget facade
pub mod area;

// Re-export core types
pub use primitives::{Color, Point, Rect, Size};
pub use event::{MouseButton, MouseEvent};
pub use style::{GridStyle, LinePattern, StyleError, BORDER_WIDTH};
pub use display::{BorderRect, DisplayList, Label, LineSegment, SolidRect};
pub use pan::{GridCenter, PanAction, PanState, Pannable};
pub use grid::{line_positions, render_center_overlay, render_grid};
pub use area::PanArea;
