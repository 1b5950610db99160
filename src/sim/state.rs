//! Game state and entity types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::mode::GameMode;
use crate::layout::Layout;
use crate::settings::PhysicsSettings;

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Unused by the simulation
    pub speed: f32,
}

impl Paddle {
    /// Horizontally centered, resting just above the canvas bottom
    pub fn centered(layout: &Layout, physics: &PhysicsSettings) -> Self {
        Self {
            pos: Vec2::new(
                (layout.width - layout.paddle_width) / 2.0,
                layout.height - layout.paddle_height - layout.paddle_bottom_margin,
            ),
            width: layout.paddle_width,
            height: layout.paddle_height,
            speed: physics.paddle_speed,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Center the paddle under `pointer_x`, kept inside `[0, canvas_width - width]`
    pub fn follow_pointer(&mut self, pointer_x: f32, canvas_width: f32) {
        let max_x = (canvas_width - self.width).max(0.0);
        self.pos.x = (pointer_x - self.width / 2.0).clamp(0.0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Pixels per reference frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Launch position: canvas center, just above the paddle
    pub fn spawn(layout: &Layout, physics: &PhysicsSettings) -> Self {
        Self {
            pos: Vec2::new(layout.width / 2.0, layout.height - physics.ball_spawn_offset),
            vel: Vec2::from(physics.ball_velocity),
            radius: layout.ball_radius,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub layout: Layout,
    pub physics: PhysicsSettings,
    pub mode: GameMode,
    pub paddle: Paddle,
    pub ball: Ball,
}

impl GameState {
    pub fn new(layout: Layout, physics: PhysicsSettings) -> Self {
        let paddle = Paddle::centered(&layout, &physics);
        let ball = Ball::spawn(&layout, &physics);
        Self {
            layout,
            physics,
            mode: GameMode::default(),
            paddle,
            ball,
        }
    }

    /// Put paddle and ball back at their starting positions.
    ///
    /// Used both at startup and after a miss; the mode is left alone.
    pub fn reset_entities(&mut self) {
        self.paddle = Paddle::centered(&self.layout, &self.physics);
        self.ball = Ball::spawn(&self.layout, &self.physics);
    }
}
