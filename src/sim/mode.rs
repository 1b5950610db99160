//! Play / pause / menu state machine
//!
//! The menu always implies a pause. Pause on its own never opens the menu,
//! and closing the menu always resumes play.

use serde::{Deserialize, Serialize};

/// Current mode of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Ball moves, paddle follows the pointer
    #[default]
    Playing,
    /// Frozen with the "Pause" overlay
    Paused,
    /// Frozen with the "Menu" overlay
    MenuOpen,
}

impl GameMode {
    /// Pause button. Has no effect while the menu is open.
    pub fn toggle_pause(self) -> Self {
        match self {
            GameMode::Playing => GameMode::Paused,
            GameMode::Paused => GameMode::Playing,
            GameMode::MenuOpen => GameMode::MenuOpen,
        }
    }

    /// Menu button. Opening pauses; closing resumes regardless of any earlier pause.
    pub fn toggle_menu(self) -> Self {
        match self {
            GameMode::MenuOpen => GameMode::Playing,
            GameMode::Playing | GameMode::Paused => GameMode::MenuOpen,
        }
    }

    /// Focus loss only ever pauses a running game
    pub fn suspend(self) -> Self {
        match self {
            GameMode::Playing => GameMode::Paused,
            other => other,
        }
    }

    pub fn is_running(self) -> bool {
        self == GameMode::Playing
    }

    /// True whenever simulation and pointer input are frozen
    pub fn is_paused(self) -> bool {
        !self.is_running()
    }

    pub fn is_menu_open(self) -> bool {
        self == GameMode::MenuOpen
    }
}
