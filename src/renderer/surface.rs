//! Drawing surface abstraction

use std::convert::Infallible;

use super::frame::{DrawCommand, Frame, TextAlign};

/// A 2D surface the game can paint on
pub trait Surface {
    type Error: std::fmt::Debug;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) -> Result<(), Self::Error>;

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        align: TextAlign,
        color: &str,
    ) -> Result<(), Self::Error>;
}

/// Replay a frame onto a surface, stopping at the first failure
pub fn present<S: Surface + ?Sized>(frame: &Frame, surface: &mut S) -> Result<(), S::Error> {
    for command in &frame.commands {
        match command {
            DrawCommand::Clear(rect) => {
                surface.clear_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y)?
            }
            DrawCommand::FillRect { rect, color } => {
                surface.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, color)?
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => surface.fill_circle(center.x, center.y, *radius, color)?,
            DrawCommand::FillText {
                text,
                pos,
                font,
                align,
                color,
            } => surface.fill_text(text, pos.x, pos.y, font, *align, color)?,
        }
    }
    Ok(())
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    type Error = Infallible;

    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_circle(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: &str) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_text(
        &mut self,
        _text: &str,
        _x: f32,
        _y: f32,
        _font: &str,
        _align: TextAlign,
        _color: &str,
    ) -> Result<(), Infallible> {
        Ok(())
    }
}
