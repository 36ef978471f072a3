//! Canvas 2D surface for the browser

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Circle, Color, DrawSurface, Font};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_text_align("center");
        Self { canvas, ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn transform(&mut self, translate: Vec2, rotation: f32) {
        self.ctx.translate(translate.x as f64, translate.y as f64).ok();
        self.ctx.rotate(rotation as f64).ok();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circles(&mut self, circles: &[Circle], color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.begin_path();
        for c in circles {
            let (x, y, r) = (c.center.x as f64, c.center.y as f64, c.radius as f64);
            // Start each arc on its own rim so no connecting line joins them
            self.ctx.move_to(x + r, y);
            self.ctx.arc(x, y, r, 0.0, TAU).ok();
        }
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(color.css());
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_vertical_gradient(&mut self, pos: Vec2, size: Vec2, top: Color, bottom: Color) {
        let (x, y, w, h) = (pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        let gradient = self.ctx.create_linear_gradient(x, y, x, y + h);
        gradient.add_color_stop(0.0, top.css()).ok();
        gradient.add_color_stop(1.0, bottom.css()).ok();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, color: Color) {
        self.ctx.set_font(&font.css());
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_text(text, at.x as f64, at.y as f64).ok();
    }
}
