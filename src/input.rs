//! Input binding
//!
//! Host events are translated into [`InputEvent`]s and applied to the game
//! state here, so the rules are the same for the browser and for tests.

use crate::sim::{GameMode, GameState};

/// Where a pointer position came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A single input from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; `canvas_x` is relative to the canvas left edge
    PointerMove { canvas_x: f32, source: PointerSource },
    /// Pause button or Escape
    TogglePause,
    /// Menu button
    ToggleMenu,
    /// Window blurred or page hidden
    FocusLost,
}

/// Whether an input changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Applied,
    Ignored,
}

impl InputOutcome {
    /// Touch gestures that moved the paddle must not also scroll the page
    pub fn suppress_default(self) -> bool {
        self == InputOutcome::Applied
    }
}

/// Apply one input to the game state
pub fn apply(state: &mut GameState, event: InputEvent) -> InputOutcome {
    match event {
        InputEvent::PointerMove { canvas_x, .. } => {
            if !state.mode.is_running() {
                return InputOutcome::Ignored;
            }
            state.paddle.follow_pointer(canvas_x, state.layout.width);
            InputOutcome::Applied
        }
        InputEvent::TogglePause => {
            let next = state.mode.toggle_pause();
            switch_mode(state, next)
        }
        InputEvent::ToggleMenu => {
            let next = state.mode.toggle_menu();
            switch_mode(state, next)
        }
        InputEvent::FocusLost => {
            let next = state.mode.suspend();
            switch_mode(state, next)
        }
    }
}

fn switch_mode(state: &mut GameState, next: GameMode) -> InputOutcome {
    if next == state.mode {
        return InputOutcome::Ignored;
    }
    log::debug!("Mode {:?} -> {:?}", state.mode, next);
    state.mode = next;
    InputOutcome::Applied
}
