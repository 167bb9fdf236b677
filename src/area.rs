//! Pannable Area
//!
//! The widget facade: owns the pan state and grid style, routes pointer
//! events, and renders frames into a display list. Redraws are requested
//! through an explicit dirty flag the host consumes with [`PanArea::take_redraw`];
//! the host owns actual paint scheduling and may coalesce requests.

use tracing::debug;

use crate::display::DisplayList;
use crate::event::MouseEvent;
use crate::grid::{render_center_overlay, render_grid};
use crate::pan::{GridCenter, PanState, Pannable};
use crate::primitives::{Color, Rect};
use crate::style::{GridStyle, StyleError};

/// A pannable two-layer grid surface.
///
/// Children are owned by the host; the area only needs `&mut` access to
/// them (via [`Pannable`]) while a drag is being applied, so they move in
/// lockstep with the grid.
#[derive(Debug)]
pub struct PanArea {
    pan: PanState,
    style: GridStyle,
    show_center_overlay: bool,
    needs_redraw: bool,
}

impl PanArea {
    /// Create an area with the default style, idle, centered at the origin.
    pub fn new() -> Self {
        Self {
            pan: PanState::new(),
            style: GridStyle::default(),
            show_center_overlay: false,
            // The first frame always needs painting.
            needs_redraw: true,
        }
    }

    /// Create an area with an explicit style.
    pub fn with_style(style: GridStyle) -> Self {
        Self {
            style,
            ..Self::new()
        }
    }

    /// The current style.
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// The cumulative pan offset.
    pub fn grid_center(&self) -> GridCenter {
        self.pan.center()
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.pan.is_dragging()
    }

    // =====================================================================
    // Configuration surface
    // =====================================================================

    /// Set the major grid line color.
    ///
    /// Does not request a redraw. This mirrors the one asymmetric setter
    /// of the original surface; see DESIGN.md.
    pub fn set_major_color(&mut self, color: Color) {
        debug!(?color, "major grid line color");
        self.style.major.color = color;
    }

    /// Set the minor grid line color and request a redraw.
    pub fn set_minor_color(&mut self, color: Color) {
        debug!(?color, "minor grid line color");
        self.style.minor.color = color;
        self.needs_redraw = true;
    }

    /// Set the minor grid line spacing and request a redraw.
    ///
    /// Rejects non-positive or non-finite spacing before it can reach the
    /// render loop.
    pub fn set_minor_spacing(&mut self, spacing: f32) -> Result<(), StyleError> {
        self.style.minor.set_spacing(spacing)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Set the major grid line spacing and request a redraw.
    pub fn set_major_spacing(&mut self, spacing: f32) -> Result<(), StyleError> {
        self.style.major.set_spacing(spacing)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Set the border color and request a redraw.
    pub fn set_border_color(&mut self, color: Color) {
        self.style.border_color = color;
        self.needs_redraw = true;
    }

    /// Set the background clear color and request a redraw.
    pub fn set_background(&mut self, color: Color) {
        self.style.background = color;
        self.needs_redraw = true;
    }

    /// Toggle the diagnostic center overlay and request a redraw.
    pub fn set_show_center_overlay(&mut self, show: bool) {
        self.show_center_overlay = show;
        self.needs_redraw = true;
    }

    // =====================================================================
    // Input
    // =====================================================================

    /// Route a mouse event through the pan controller.
    ///
    /// `children` are the host's pannable elements; during a drag move each
    /// receives the same integral delta as the grid center, atomically with
    /// the center update. Returns `true` if the event was consumed.
    pub fn on_mouse<'a, I>(&mut self, event: &MouseEvent, children: I) -> bool
    where
        I: IntoIterator<Item = &'a mut dyn Pannable>,
    {
        let Some(action) = self.pan.handle_mouse(event) else {
            return false;
        };
        if self.pan.apply(action, children) {
            self.needs_redraw = true;
        }
        true
    }

    // =====================================================================
    // Rendering
    // =====================================================================

    /// Render one frame into `list` from an immutable state snapshot.
    ///
    /// The viewport is supplied by the host each frame; the grid phase
    /// depends only on the grid center, never on the previous frame.
    pub fn render(&self, viewport: Rect, list: &mut DisplayList) {
        render_grid(viewport, self.pan.center(), &self.style, list);
        if self.show_center_overlay {
            render_center_overlay(viewport, self.pan.center(), list);
        }
    }

    /// Consume the pending redraw request, if any.
    ///
    /// Returns `true` at most once per state change; the host polls this
    /// to schedule invalidation.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

impl Default for PanArea {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseButton;
    use crate::primitives::Point;

    struct Node {
        position: Point,
    }

    impl Pannable for Node {
        fn position(&self) -> Point {
            self.position
        }

        fn set_position(&mut self, position: Point) {
            self.position = position;
        }
    }

    fn no_children() -> [&'static mut dyn Pannable; 0] {
        []
    }

    fn press(x: f32, y: f32) -> MouseEvent {
        MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    fn moved(x: f32, y: f32) -> MouseEvent {
        MouseEvent::CursorMoved {
            position: Point::new(x, y),
        }
    }

    fn release(x: f32, y: f32) -> MouseEvent {
        MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    // =========================================================================
    // Redraw semantics
    // =========================================================================

    #[test]
    fn first_frame_needs_redraw() {
        let mut area = PanArea::new();
        assert!(area.take_redraw());
        assert!(!area.take_redraw()); // consumed
    }

    #[test]
    fn major_color_setter_does_not_request_redraw() {
        let mut area = PanArea::new();
        area.take_redraw();

        area.set_major_color(Color::rgb(1.0, 0.0, 0.0));
        assert!(!area.take_redraw());
        assert_eq!(area.style().major.color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn sibling_setters_request_redraw() {
        let mut area = PanArea::new();

        area.take_redraw();
        area.set_minor_color(Color::BLACK);
        assert!(area.take_redraw());

        area.set_minor_spacing(10.0).unwrap();
        assert!(area.take_redraw());

        area.set_major_spacing(50.0).unwrap();
        assert!(area.take_redraw());

        area.set_border_color(Color::WHITE);
        assert!(area.take_redraw());

        area.set_background(Color::BLACK);
        assert!(area.take_redraw());
    }

    #[test]
    fn rejected_spacing_requests_no_redraw() {
        let mut area = PanArea::new();
        area.take_redraw();

        assert!(area.set_minor_spacing(0.0).is_err());
        assert!(area.set_major_spacing(-3.0).is_err());
        assert!(!area.take_redraw());
        // Style untouched by the failed sets.
        assert_eq!(area.style().minor.spacing(), 20.0);
        assert_eq!(area.style().major.spacing(), 100.0);
    }

    // =========================================================================
    // Mouse routing
    // =========================================================================

    #[test]
    fn drag_pans_grid_and_children() {
        let mut area = PanArea::new();
        let mut node = Node {
            position: Point::new(10.0, 10.0),
        };
        area.take_redraw();

        assert!(area.on_mouse(&press(100.0, 100.0), no_children()));
        assert!(!area.take_redraw()); // press alone repaints nothing

        assert!(area.on_mouse(&moved(95.0, 108.0), [&mut node as &mut dyn Pannable]));
        assert!(area.take_redraw());

        assert!(area.on_mouse(&release(95.0, 108.0), no_children()));
        assert!(!area.is_dragging());

        assert_eq!(area.grid_center(), GridCenter::new(-5, 8));
        assert_eq!(node.position, Point::new(5.0, 18.0));
    }

    #[test]
    fn non_left_press_is_passed_through() {
        let mut area = PanArea::new();
        let event = MouseEvent::ButtonPressed {
            button: MouseButton::Right,
            position: Point::new(10.0, 10.0),
        };
        assert!(!area.on_mouse(&event, no_children()));
        assert!(!area.is_dragging());
    }

    #[test]
    fn idle_cursor_moves_are_passed_through() {
        let mut area = PanArea::new();
        area.take_redraw();
        assert!(!area.on_mouse(&moved(50.0, 50.0), no_children()));
        assert!(!area.take_redraw());
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn render_reflects_pan_state() {
        let mut area = PanArea::new();
        area.on_mouse(&press(0.0, 0.0), no_children());
        area.on_mouse(&moved(25.0, 0.0), no_children());

        let mut list = DisplayList::new();
        area.render(Rect::new(0.0, 0.0, 300.0, 200.0), &mut list);

        let minor_xs: Vec<f32> = list
            .lines()
            .filter(|l| l.p1.x == l.p2.x && l.color == area.style().minor.color)
            .map(|l| l.p1.x)
            .collect();
        assert_eq!(minor_xs.len(), 15);
        assert_eq!(minor_xs.first(), Some(&5.0));
    }

    #[test]
    fn overlay_rendered_only_when_enabled() {
        let mut area = PanArea::new();
        let viewport = Rect::new(0.0, 0.0, 300.0, 200.0);

        let mut list = DisplayList::new();
        area.render(viewport, &mut list);
        assert_eq!(list.labels().count(), 0);

        area.set_show_center_overlay(true);
        list.reset();
        area.render(viewport, &mut list);
        let labels: Vec<_> = list.labels().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "X:0, Y:0");
    }

    #[test]
    fn with_style_uses_given_style() {
        let mut style = GridStyle::default();
        style.border_color = Color::WHITE;
        let area = PanArea::with_style(style);
        assert_eq!(area.style().border_color, Color::WHITE);
    }
}
