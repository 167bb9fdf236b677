//! Core primitive types for pangrid.
//!
//! Geometry and color values shared by the pan controller, the grid
//! renderer, and the display list.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Check if a point is inside this rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Get the origin point of this rectangle.
    #[inline]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// Get the size of this rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the right edge X coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink this rectangle by `d` on every side.
    #[inline]
    pub fn inset(&self, d: f32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            width: self.width - 2.0 * d,
            height: self.height - 2.0 * d,
        }
    }

    /// Translate this rectangle by an offset.
    #[inline]
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }
}

/// RGBA color with components in 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a color from RGB values (0.0-1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA values (0.0-1.0).
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB values (0-255).
    #[inline]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from RGBA values (0-255).
    #[inline]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Return this color with a different alpha value.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Point tests
    // =========================================================================

    #[test]
    fn point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn point_origin() {
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
    }

    #[test]
    fn point_add_sub() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(5.0, 15.0);
        assert_eq!(a + b, Point::new(15.0, 35.0));
        assert_eq!(a - b, Point::new(5.0, 5.0));
    }

    #[test]
    fn point_from_tuple() {
        let p: Point = (5.0, 10.0).into();
        assert_eq!(p, Point::new(5.0, 10.0));
    }

    // =========================================================================
    // Rect tests
    // =========================================================================

    #[test]
    fn rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Point::new(10.0, 20.0))); // Top-left corner
        assert!(rect.contains(Point::new(50.0, 40.0))); // Center
        assert!(!rect.contains(Point::new(110.0, 70.0))); // Bottom-right (exclusive)
        assert!(!rect.contains(Point::new(5.0, 40.0))); // Left of rect
    }

    #[test]
    fn rect_right_bottom() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn rect_inset() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.inset(2.0), Rect::new(2.0, 2.0, 96.0, 46.0));
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        let translated = r.translate(Point::new(5.0, -10.0));
        assert_eq!(translated, Rect::new(15.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn rect_from_origin_size() {
        let r = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(r.origin(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));
    }

    // =========================================================================
    // Color tests
    // =========================================================================

    #[test]
    fn color_constants() {
        assert_eq!(Color::BLACK, Color::rgba(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::WHITE, Color::rgba(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::TRANSPARENT, Color::rgba(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn color_rgb8() {
        let c = Color::rgb8(255, 128, 0);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.5).abs() < 0.01);
        assert!((c.b - 0.0).abs() < 0.01);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn color_with_alpha() {
        let c = Color::rgb(1.0, 0.0, 0.0).with_alpha(0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!(c.r, 1.0);
    }
}
