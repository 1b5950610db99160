//! Paddle Bounce - a single-screen ball-and-paddle game
//!
//! Core modules:
//! - `sim`: Paddle and ball physics, play/pause/menu state machine
//! - `input`: Pointer, button and focus events applied to the state
//! - `renderer`: Draw-command frames and the surfaces that paint them
//! - `game`: Frame loop driver (fixed-step clock, scheduler)
//! - `platform`: Browser host wiring
//! - `layout`, `settings`: Canvas sizing and tunables

pub mod game;
pub mod input;
pub mod layout;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameReport, FrameScheduler, Game, run_loop};
pub use input::{InputEvent, InputOutcome, PointerSource};
pub use layout::{Layout, Viewport};
pub use settings::{PaddleBounce, Settings};
