//! One simulation step

use super::collision::{hits_ceiling, hits_paddle, hits_side_wall, is_miss};
use super::state::GameState;

/// Reference frame length. Ball velocities are expressed per reference frame.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or menu open; nothing changed
    Frozen,
    /// The ball advanced
    Moved,
    /// The ball left the canvas bottom and everything was reset
    Missed,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, dt: f32) -> TickOutcome {
    if !state.mode.is_running() {
        return TickOutcome::Frozen;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel * (dt / FRAME_DT);

    if hits_side_wall(ball, &state.layout) {
        ball.vel.x = -ball.vel.x;
    }
    if hits_ceiling(ball) {
        ball.vel.y = -ball.vel.y;
    }
    if hits_paddle(ball, &state.paddle, state.physics.paddle_bounce) {
        ball.vel.y = -ball.vel.y;
    }

    if is_miss(&state.ball, &state.layout) {
        log::debug!(
            "Ball missed at x={:.1}; resetting",
            state.ball.pos.x
        );
        state.reset_entities();
        return TickOutcome::Missed;
    }

    TickOutcome::Moved
}
