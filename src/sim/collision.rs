//! Axis-aligned collision checks
//!
//! The ball is treated as its bounding box. Checks only report contact;
//! callers flip velocity signs and never push the ball back out, so it may
//! overlap a wall by up to one step of travel.

use super::state::{Ball, Paddle};
use crate::layout::Layout;
use crate::settings::PaddleBounce;

/// Ball pokes past the left or right canvas edge
#[inline]
pub fn hits_side_wall(ball: &Ball, layout: &Layout) -> bool {
    ball.right() > layout.width || ball.left() < 0.0
}

/// Ball pokes past the top canvas edge
#[inline]
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.top() < 0.0
}

/// Ball's bottom edge is below the paddle top with its center strictly inside the paddle span
pub fn hits_paddle(ball: &Ball, paddle: &Paddle, policy: PaddleBounce) -> bool {
    let overlaps = ball.bottom() > paddle.top()
        && ball.pos.x > paddle.left()
        && ball.pos.x < paddle.right();

    match policy {
        PaddleBounce::TowardPaddle => overlaps && ball.vel.y > 0.0,
        PaddleBounce::Always => overlaps,
    }
}

/// Ball's bottom edge has left the canvas
#[inline]
pub fn is_miss(ball: &Ball, layout: &Layout) -> bool {
    ball.bottom() > layout.height
}
