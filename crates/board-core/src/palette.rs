//! Immutable color configuration for the board.
//!
//! The palette is handed to [`crate::scene::draw_passes`] by value, so the
//! renderer never reads colors from shared mutable state.

use crate::constants::DOT_RADIUS;

/// 8-bit sRGB color with alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string accepted by canvas fill/stroke styles and element styles.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub dot: Rgba,
    pub fence_dot: Rgba,
    pub broadcast: Rgba,
    pub coverage: Rgba,
    pub dot_radius: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(220, 220, 220),
            dot: Rgba::rgb(0, 0, 0),
            fence_dot: Rgba::rgb(220, 60, 60),
            broadcast: Rgba::rgba(103, 157, 245, 50),
            coverage: Rgba::rgba(130, 245, 216, 50),
            dot_radius: DOT_RADIUS,
        }
    }
}
