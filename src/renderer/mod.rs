//! Rendering module
//!
//! The scene is drawn as a fixed sequence of 2D primitives onto a
//! `DrawSurface`. The browser implementation forwards to a canvas 2D context;
//! `RecordingSurface` keeps the calls for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::render;

use glam::Vec2;

/// CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const WHITE: Color = Color("#FFFFFF");
    pub const BLACK: Color = Color("#000000");

    pub fn css(&self) -> &'static str {
        self.0
    }
}

/// Font for centered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size_px: u32,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size_px: u32) -> Self {
        Self {
            size_px,
            bold: false,
        }
    }

    pub const fn bold(size_px: u32) -> Self {
        Self {
            size_px,
            bold: true,
        }
    }

    pub fn css(&self) -> String {
        if self.bold {
            format!("bold {}px Arial", self.size_px)
        } else {
            format!("{}px Arial", self.size_px)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Primitive drawing operations the scene needs
pub trait DrawSurface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    /// Push alpha and transform state
    fn save(&mut self);
    fn restore(&mut self);
    fn set_alpha(&mut self, alpha: f32);
    /// Move the origin to `translate`, then rotate by `rotation` radians
    fn transform(&mut self, translate: Vec2, rotation: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    /// All circles filled as one path
    fn fill_circles(&mut self, circles: &[Circle], color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn fill_vertical_gradient(&mut self, pos: Vec2, size: Vec2, top: Color, bottom: Color);
    /// Text centered horizontally on `at`
    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.fill_circles(&[Circle::new(center, radius)], color);
    }
}
