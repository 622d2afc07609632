// ABOUTME: Color representation for the debug grid overlay.
// ABOUTME: Provides RGBA colors and the translucent margin/gutter/border palette.

use serde::{Deserialize, Serialize};

/// Alpha applied to every overlay tint so content stays readable underneath
pub const OVERLAY_ALPHA: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Material baseline primary (#6200ee)
    pub const PRIMARY: Self = Self::rgb(0.384, 0.0, 0.933);

    /// Material baseline secondary (#03dac5)
    pub const SECONDARY: Self = Self::rgb(0.012, 0.855, 0.773);

    /// Material baseline error (#b00020)
    pub const ERROR: Self = Self::rgb(0.69, 0.0, 0.125);
}

impl Default for Color {
    fn default() -> Self {
        Self::PRIMARY
    }
}

/// Tints used when drawing the grid overlay on top of content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayColors {
    pub margin: Color,
    pub gutter: Color,
    pub border: Color,
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            margin: Color::PRIMARY.with_alpha(OVERLAY_ALPHA),
            gutter: Color::SECONDARY.with_alpha(OVERLAY_ALPHA),
            border: Color::ERROR.with_alpha(OVERLAY_ALPHA),
        }
    }
}
