//! Display list output.
//!
//! The surface never draws; it records drawing commands the host replays
//! against its own drawing surface. Emission order is draw order: the
//! clear happens first, then each command paints over the previous ones.

use crate::primitives::{Color, Point, Rect};

/// A line segment command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
    pub thickness: f32,
    pub color: Color,
}

/// A filled rectangle command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidRect {
    pub rect: Rect,
    pub color: Color,
}

/// A hollow rectangle outline command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderRect {
    pub rect: Rect,
    pub width: f32,
    pub color: Color,
}

/// A pre-positioned text label command.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub color: Color,
    pub font_size: f32,
}

/// A single drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SolidRect(SolidRect),
    Line(LineSegment),
    Border(BorderRect),
    Label(Label),
}

/// An ordered batch of drawing commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayList {
    /// Clear color for the frame, if any. Applied before the commands.
    pub clear: Option<Color>,

    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands, ready for the next frame.
    pub fn reset(&mut self) {
        self.clear = None;
        self.commands.clear();
    }

    /// Record a clear-to-color command for the frame.
    #[inline]
    pub fn set_clear(&mut self, color: Color) -> &mut Self {
        self.clear = Some(color);
        self
    }

    /// Add a filled rectangle.
    #[inline]
    pub fn add_solid_rect(&mut self, rect: Rect, color: Color) -> &mut Self {
        self.commands.push(DrawCommand::SolidRect(SolidRect { rect, color }));
        self
    }

    /// Add a line segment.
    #[inline]
    pub fn add_line(&mut self, p1: Point, p2: Point, thickness: f32, color: Color) -> &mut Self {
        self.commands.push(DrawCommand::Line(LineSegment {
            p1,
            p2,
            thickness,
            color,
        }));
        self
    }

    /// Add a rectangle outline.
    #[inline]
    pub fn add_border(&mut self, rect: Rect, width: f32, color: Color) -> &mut Self {
        self.commands
            .push(DrawCommand::Border(BorderRect { rect, width, color }));
        self
    }

    /// Add a text label.
    #[inline]
    pub fn add_label(
        &mut self,
        text: impl Into<String>,
        position: Point,
        color: Color,
        font_size: f32,
    ) -> &mut Self {
        self.commands.push(DrawCommand::Label(Label {
            text: text.into(),
            position,
            color,
            font_size,
        }));
        self
    }

    /// The recorded commands, in draw order.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The line commands, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    /// The filled rectangle commands, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = &SolidRect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::SolidRect(rect) => Some(rect),
            _ => None,
        })
    }

    /// The outline commands, in draw order.
    pub fn borders(&self) -> impl Iterator<Item = &BorderRect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Border(border) => Some(border),
            _ => None,
        })
    }

    /// The label commands, in draw order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label(label) => Some(label),
            _ => None,
        })
    }

    /// Check if the list holds no commands.
    pub fn is_empty(&self) -> bool {
        self.clear.is_none() && self.commands.is_empty()
    }

    /// Number of shape commands (the clear is not counted).
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
