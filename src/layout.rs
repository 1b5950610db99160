//! Canvas sizing
//!
//! Computed once at startup from the viewport; the canvas is never resized.

use serde::{Deserialize, Serialize};

use crate::settings::LayoutSettings;

/// Host viewport size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Canvas and entity dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Canvas width in whole pixels
    pub width: f32,
    /// Canvas height in whole pixels
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_margin: f32,
    pub ball_radius: f32,
}

impl Layout {
    /// Pick the mobile or desktop profile for this viewport
    pub fn from_viewport(viewport: Viewport, settings: &LayoutSettings) -> Self {
        let (width, height) = if viewport.width <= settings.mobile_breakpoint {
            // A canvas element only stores integer dimensions
            (
                (viewport.width * settings.mobile_width_fraction).floor(),
                (viewport.height * settings.mobile_height_fraction).floor(),
            )
        } else {
            (settings.desktop_width, settings.desktop_height)
        };

        Self {
            width,
            height,
            paddle_width: width * settings.paddle_width_fraction,
            paddle_height: settings.paddle_height,
            paddle_bottom_margin: settings.paddle_bottom_margin,
            ball_radius: settings.ball_radius,
        }
    }

    /// Canvas size for `HtmlCanvasElement::set_width`/`set_height`
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }

    /// Largest paddle x that keeps the paddle on the canvas
    pub fn max_paddle_x(&self) -> f32 {
        (self.width - self.paddle_width).max(0.0)
    }
}
