//! Platform layer
//!
//! Browser host: DOM lookup, event wiring, and the animation frame scheduler.
//! Everything here is wasm32-only; native builds drive [`crate::game::Game`]
//! directly.

#[cfg(target_arch = "wasm32")]
pub mod web;
