//! Grid rendering.
//!
//! Turns a viewport, a grid center, and a style into display list commands:
//! clear, minor lines, major lines (on top), and the border. Line phase is
//! a pure function of the grid center modulo the pattern spacing, so the
//! grid stays anchored to content across resizes and re-renders.

use tracing::trace;

use crate::display::DisplayList;
use crate::pan::GridCenter;
use crate::primitives::{Color, Point, Rect};
use crate::style::{GridStyle, LinePattern, BORDER_WIDTH};

/// Thickness of a single grid line.
const LINE_THICKNESS: f32 = 1.0;

/// Font size of the diagnostic center overlay label.
const OVERLAY_FONT_SIZE: f32 = 8.0;

/// Nominal glyph advance used to size the overlay box without a text engine.
const OVERLAY_GLYPH_WIDTH: f32 = 6.0;

/// Inset of the overlay box from the viewport corner.
const OVERLAY_INSET: f32 = 5.0;

/// Line coordinates along one axis: starting at `start + phase`, stepping
/// by `spacing`, inclusive of lines touching `end`.
///
/// For a span of width `w` this yields `floor((w - phase) / spacing) + 1`
/// positions (zero when the phase already lies past the span).
pub fn line_positions(
    start: f32,
    end: f32,
    phase: f32,
    spacing: f32,
) -> impl Iterator<Item = f32> {
    std::iter::successors(Some(start + phase), move |x| Some(x + spacing))
        .take_while(move |x| *x <= end)
}

/// Phase offset of a pattern for one axis of the grid center.
#[inline]
fn phase(center_axis: i32, spacing: f32) -> f32 {
    (center_axis.abs() as f32) % spacing
}

/// Emit one repeating pattern across the viewport, both axes.
fn stroke_pattern(
    viewport: Rect,
    center: GridCenter,
    pattern: &LinePattern,
    list: &mut DisplayList,
) {
    let spacing = pattern.spacing();

    for x in line_positions(viewport.x, viewport.right(), phase(center.x, spacing), spacing) {
        list.add_line(
            Point::new(x, viewport.y),
            Point::new(x, viewport.bottom()),
            LINE_THICKNESS,
            pattern.color,
        );
    }

    for y in line_positions(viewport.y, viewport.bottom(), phase(center.y, spacing), spacing) {
        list.add_line(
            Point::new(viewport.x, y),
            Point::new(viewport.right(), y),
            LINE_THICKNESS,
            pattern.color,
        );
    }
}

/// Render the grid into `list`.
///
/// Emission order: clear, minor pattern, major pattern, border. The border
/// rect is inset by its stroke width so the stroke is not clipped at the
/// viewport edges. A zero-sized viewport emits the clear and nothing else.
pub fn render_grid(viewport: Rect, center: GridCenter, style: &GridStyle, list: &mut DisplayList) {
    list.set_clear(style.background);

    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return;
    }

    stroke_pattern(viewport, center, &style.minor, list);
    stroke_pattern(viewport, center, &style.major, list);

    list.add_border(viewport.inset(BORDER_WIDTH), BORDER_WIDTH, style.border_color);

    trace!(
        lines = list.lines().count(),
        cx = center.x,
        cy = center.y,
        "grid rendered"
    );
}

/// Render the diagnostic center overlay: a small opaque label box in the
/// viewport's top-left corner showing the current grid center.
///
/// An independently toggleable pass; callers decide per frame whether to
/// run it after [`render_grid`].
pub fn render_center_overlay(viewport: Rect, center: GridCenter, list: &mut DisplayList) {
    let text = format!("X:{}, Y:{}", center.x, center.y);
    let box_rect = Rect::new(
        viewport.x + OVERLAY_INSET,
        viewport.y + OVERLAY_INSET,
        text.len() as f32 * OVERLAY_GLYPH_WIDTH + 2.0 * OVERLAY_INSET,
        OVERLAY_FONT_SIZE + OVERLAY_INSET,
    );

    // Opaque backing so the label stays legible over any grid lines.
    list.add_solid_rect(box_rect, Color::rgb8(245, 245, 245));
    list.add_border(box_rect, 1.0, Color::BLACK);
    list.add_label(text, box_rect.origin(), Color::BLACK, OVERLAY_FONT_SIZE);
}
