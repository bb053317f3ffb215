//! Renderer collaborator interface
//!
//! The sim never talks to a canvas directly: the presentation layer hands it
//! something implementing [`Renderer`] and the tick calls back into it once
//! per body per frame. [`NullRenderer`] discards everything and is what the
//! headless driver and the tests use.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::COLOR_CHANNEL_MIN;

/// Horizontal text alignment for stat overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// An RGB body color, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Sample a color with every channel uniform in [COLOR_CHANNEL_MIN, 255],
    /// keeping bodies visible against the black background.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(COLOR_CHANNEL_MIN..=255),
            g: rng.random_range(COLOR_CHANNEL_MIN..=255),
            b: rng.random_range(COLOR_CHANNEL_MIN..=255),
        }
    }

    /// CSS-style `#rrggbb` string for renderers that want one
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Drawing primitives the presentation layer provides.
///
/// Coordinates are screen-space pixels: origin top-left, y growing downward.
/// The sim only issues draw calls; it never reads rendering state back.
pub trait Renderer {
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, align: TextAlign);
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// Renderer that draws nothing, for headless runs and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Color) {}
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _color: Color, _align: TextAlign) {}
    fn draw_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}
}
