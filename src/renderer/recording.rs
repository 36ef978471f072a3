//! A surface that records draw calls instead of rasterizing them

use glam::Vec2;

use super::{Circle, Color, DrawSurface, Font};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Alpha(f32),
    Transform { translate: Vec2, rotation: f32 },
    Rect { pos: Vec2, size: Vec2, color: Color },
    Circles { circles: Vec<Circle>, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
    Gradient { pos: Vec2, size: Vec2, top: Color, bottom: Color },
    Text { text: String, at: Vec2, font: Font, color: Color },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands of the last frame (everything after the last `Clear`)
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Texts drawn in the last frame
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Alpha(alpha));
    }

    fn transform(&mut self, translate: Vec2, rotation: f32) {
        self.commands.push(DrawCommand::Transform {
            translate,
            rotation,
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    fn fill_circles(&mut self, circles: &[Circle], color: Color) {
        self.commands.push(DrawCommand::Circles {
            circles: circles.to_vec(),
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_vertical_gradient(&mut self, pos: Vec2, size: Vec2, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::Gradient {
            pos,
            size,
            top,
            bottom,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font,
            color,
        });
    }
}
