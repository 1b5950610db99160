//! Simulation module
//!
//! Paddle and ball physics. Pure and platform independent:
//! - Explicit elapsed time per step
//! - No rendering or DOM dependencies

pub mod collision;
pub mod mode;
pub mod state;
pub mod tick;

pub use collision::{hits_ceiling, hits_paddle, hits_side_wall, is_miss};
pub use mode::GameMode;
pub use state::{Ball, GameState, Paddle};
pub use tick::{FRAME_DT, TickOutcome, tick};
