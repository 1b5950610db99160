//! Frame building
//!
//! Turns game state into a flat list of 2D draw commands. Building a frame
//! never touches the state, so the same state always yields the same frame.

use glam::Vec2;

use crate::settings::StyleSettings;
use crate::sim::{GameMode, GameState};

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// One 2D drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect {
        rect: Rect,
        color: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    FillText {
        text: String,
        pos: Vec2,
        font: String,
        align: TextAlign,
        color: String,
    },
}

/// Everything drawn for one frame, in paint order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the frame for the current state
pub fn build_frame(state: &GameState, style: &StyleSettings) -> Frame {
    let layout = &state.layout;
    let canvas = Rect::new(0.0, 0.0, layout.width, layout.height);
    let mut commands = Vec::with_capacity(5);

    commands.push(DrawCommand::Clear(canvas));

    let paddle = &state.paddle;
    commands.push(DrawCommand::FillRect {
        rect: Rect::new(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height),
        color: style.paddle_color.clone(),
    });

    commands.push(DrawCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: style.ball_color.clone(),
    });

    let label = match state.mode {
        GameMode::MenuOpen => Some(&style.menu_label),
        GameMode::Paused => Some(&style.pause_label),
        GameMode::Playing => None,
    };

    if let Some(label) = label {
        commands.push(DrawCommand::FillRect {
            rect: canvas,
            color: style.overlay_color.clone(),
        });
        commands.push(DrawCommand::FillText {
            text: label.clone(),
            pos: Vec2::new(layout.width / 2.0, layout.height / 2.0),
            font: style.font.clone(),
            align: TextAlign::Center,
            color: style.text_color.clone(),
        });
    }

    Frame { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Layout, Viewport};
    use crate::settings::{LayoutSettings, PhysicsSettings};

    fn desktop() -> GameState {
        let layout = Layout::from_viewport(Viewport::new(1280.0, 800.0), &LayoutSettings::default());
        GameState::new(layout, PhysicsSettings::default())
    }

    fn overlay_text(frame: &Frame) -> Option<&str> {
        frame.commands.iter().find_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_playing_frame() {
        let state = desktop();
        let frame = build_frame(&state, &StyleSettings::default());

        assert_eq!(frame.len(), 3);
        assert_eq!(frame.commands[0], DrawCommand::Clear(Rect::new(0.0, 0.0, 800.0, 600.0)));
        match &frame.commands[1] {
            DrawCommand::FillRect { rect, color } => {
                assert_eq!(rect.pos, state.paddle.pos);
                assert_eq!(rect.size, Vec2::new(state.paddle.width, 10.0));
                assert_eq!(color, "#0095DD");
            }
            other => panic!("expected paddle rect, got {:?}", other),
        }
        assert_eq!(
            frame.commands[2],
            DrawCommand::FillCircle {
                center: Vec2::new(400.0, 570.0),
                radius: 8.0,
                color: "#0095DD".to_string(),
            }
        );
        assert_eq!(overlay_text(&frame), None);
    }

    #[test]
    fn test_pause_overlay() {
        let mut state = desktop();
        state.mode = GameMode::Paused;
        let frame = build_frame(&state, &StyleSettings::default());

        assert_eq!(frame.len(), 5);
        assert_eq!(
            frame.commands[3],
            DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, 800.0, 600.0),
                color: "rgba(0, 0, 0, 0.7)".to_string(),
            }
        );
        assert_eq!(
            frame.commands[4],
            DrawCommand::FillText {
                text: "Pause".to_string(),
                pos: Vec2::new(400.0, 300.0),
                font: "30px Arial".to_string(),
                align: TextAlign::Center,
                color: "#fff".to_string(),
            }
        );
    }

    #[test]
    fn test_menu_overlay_wins_over_pause() {
        let mut state = desktop();
        state.mode = GameMode::MenuOpen;
        let frame = build_frame(&state, &StyleSettings::default());

        assert_eq!(frame.len(), 5);
        assert_eq!(overlay_text(&frame), Some("Menu"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut state = desktop();
        state.mode = GameMode::Paused;
        let before = state.clone();
        let style = StyleSettings::default();

        let first = build_frame(&state, &style);
        let second = build_frame(&state, &style);
        assert_eq!(first, second);
        assert_eq!(state.ball, before.ball);
        assert_eq!(state.paddle, before.paddle);
        assert_eq!(state.mode, before.mode);
    }
}
