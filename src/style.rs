//! Grid appearance configuration.
//!
//! Two repeating line patterns (minor and major), a border color, and a
//! background color. Spacing is validated at configuration time so the
//! render loop never sees a non-positive step.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::primitives::Color;

/// Stroke width of the viewport border, in pixels.
pub const BORDER_WIDTH: f32 = 2.0;

/// Default minor grid line spacing.
pub const DEFAULT_MINOR_SPACING: f32 = 20.0;

/// Default major grid line spacing.
pub const DEFAULT_MAJOR_SPACING: f32 = 100.0;

/// Default minor grid line color (pale blue).
pub const DEFAULT_MINOR_COLOR: Color = Color {
    r: 240.0 / 255.0,
    g: 248.0 / 255.0,
    b: 1.0,
    a: 1.0,
};

/// Default major grid line color (blue-gray).
pub const DEFAULT_MAJOR_COLOR: Color = Color {
    r: 95.0 / 255.0,
    g: 158.0 / 255.0,
    b: 160.0 / 255.0,
    a: 1.0,
};

/// Configuration errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StyleError {
    /// Grid spacing must be a positive, finite number.
    #[error("grid line spacing must be positive and finite, got {0}")]
    InvalidSpacing(f32),
}

/// A repeating line pattern: spacing between lines and the line color.
///
/// The spacing is kept private so that a `LinePattern` always holds a
/// positive, finite step. Construct via [`LinePattern::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLinePattern", into = "RawLinePattern")]
pub struct LinePattern {
    spacing: f32,
    pub color: Color,
}

/// Unvalidated mirror of [`LinePattern`] for serde.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawLinePattern {
    spacing: f32,
    color: Color,
}

impl TryFrom<RawLinePattern> for LinePattern {
    type Error = StyleError;

    fn try_from(raw: RawLinePattern) -> Result<Self, StyleError> {
        LinePattern::new(raw.spacing, raw.color)
    }
}

impl From<LinePattern> for RawLinePattern {
    fn from(pattern: LinePattern) -> Self {
        Self {
            spacing: pattern.spacing,
            color: pattern.color,
        }
    }
}

impl LinePattern {
    /// Create a line pattern, rejecting non-positive or non-finite spacing.
    pub fn new(spacing: f32, color: Color) -> Result<Self, StyleError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            debug!(spacing, "rejected grid line spacing");
            return Err(StyleError::InvalidSpacing(spacing));
        }
        Ok(Self { spacing, color })
    }

    /// Spacing between consecutive lines. Always positive and finite.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Replace the spacing, with the same validation as [`LinePattern::new`].
    pub fn set_spacing(&mut self, spacing: f32) -> Result<(), StyleError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            debug!(spacing, "rejected grid line spacing");
            return Err(StyleError::InvalidSpacing(spacing));
        }
        self.spacing = spacing;
        Ok(())
    }
}

/// Complete appearance of the grid surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    /// Fine pattern, drawn first.
    pub minor: LinePattern,
    /// Coarse pattern, drawn over the minor lines. Expected (not enforced)
    /// to have a larger spacing than `minor`.
    pub major: LinePattern,
    /// Border color; the border stroke width is fixed at [`BORDER_WIDTH`].
    pub border_color: Color,
    /// Clear color for the viewport background.
    pub background: Color,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            minor: LinePattern {
                spacing: DEFAULT_MINOR_SPACING,
                color: DEFAULT_MINOR_COLOR,
            },
            major: LinePattern {
                spacing: DEFAULT_MAJOR_SPACING,
                color: DEFAULT_MAJOR_COLOR,
            },
            border_color: Color::BLACK,
            background: Color::WHITE,
        }
    }
}
