//! Canvas 2D surface (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::frame::TextAlign;
use super::surface::Surface;

/// Paints onto an HTML canvas through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), JsValue> {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(cx as f64, cy as f64, radius as f64, 0.0, TAU)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        align: TextAlign,
        color: &str,
    ) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align(align.as_str());
        self.ctx.fill_text(text, x as f64, y as f64)
    }
}
