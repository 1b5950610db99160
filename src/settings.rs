//! Game settings and tunables
//!
//! Every number the game uses lives here with the stock value as its default.
//! On the web an inline `<script type="application/json">` element may
//! override any subset of them; nothing is ever written back.

use serde::{Deserialize, Serialize};

/// How the ball reacts while it overlaps the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddleBounce {
    /// Flip only while the ball is travelling down toward the paddle
    #[default]
    TowardPaddle,
    /// Flip on every overlapping step, even if the ball is already moving up
    Always,
}

impl PaddleBounce {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddleBounce::TowardPaddle => "toward_paddle",
            PaddleBounce::Always => "always",
        }
    }
}

/// Canvas sizing profiles and entity dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Viewports at most this wide use the mobile profile
    pub mobile_breakpoint: f32,
    /// Mobile canvas width as a fraction of viewport width
    pub mobile_width_fraction: f32,
    /// Mobile canvas height as a fraction of viewport height
    pub mobile_height_fraction: f32,
    pub desktop_width: f32,
    pub desktop_height: f32,
    /// Paddle width as a fraction of canvas width
    pub paddle_width_fraction: f32,
    pub paddle_height: f32,
    /// Gap between the paddle's bottom edge and the canvas bottom
    pub paddle_bottom_margin: f32,
    pub ball_radius: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            mobile_width_fraction: 0.95,
            mobile_height_fraction: 0.7,
            desktop_width: 800.0,
            desktop_height: 600.0,
            paddle_width_fraction: 0.15,
            paddle_height: 10.0,
            paddle_bottom_margin: 10.0,
            ball_radius: 8.0,
        }
    }
}

/// Ball launch and collision behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Ball velocity after every reset, pixels per reference frame
    pub ball_velocity: [f32; 2],
    /// Ball spawn height above the canvas bottom
    pub ball_spawn_offset: f32,
    /// Carried on the paddle but never read by the simulation
    pub paddle_speed: f32,
    pub paddle_bounce: PaddleBounce,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            ball_velocity: [4.0, -4.0],
            ball_spawn_offset: 30.0,
            paddle_speed: 8.0,
            paddle_bounce: PaddleBounce::TowardPaddle,
        }
    }
}

/// Colors, font and overlay labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub paddle_color: String,
    pub ball_color: String,
    pub overlay_color: String,
    pub text_color: String,
    pub font: String,
    pub pause_label: String,
    pub menu_label: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            paddle_color: "#0095DD".to_string(),
            ball_color: "#0095DD".to_string(),
            overlay_color: "rgba(0, 0, 0, 0.7)".to_string(),
            text_color: "#fff".to_string(),
            font: "30px Arial".to_string(),
            pause_label: "Pause".to_string(),
            menu_label: "Menu".to_string(),
        }
    }
}

/// Element ids the web host looks up at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomSettings {
    pub canvas_id: String,
    pub pause_button_id: String,
    pub menu_button_id: String,
    pub settings_element_id: String,
}

impl Default for DomSettings {
    fn default() -> Self {
        Self {
            canvas_id: "gameCanvas".to_string(),
            pause_button_id: "pauseBtn".to_string(),
            menu_button_id: "menuBtn".to_string(),
            settings_element_id: "game-settings".to_string(),
        }
    }
}

/// All game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub physics: PhysicsSettings,
    pub style: StyleSettings,
    pub dom: DomSettings,
    /// Pause when the page loses focus or becomes hidden
    pub auto_pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            physics: PhysicsSettings::default(),
            style: StyleSettings::default(),
            dom: DomSettings::default(),
            auto_pause: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the inline settings element (WASM only)
    ///
    /// Falls back to defaults when the element is absent or malformed.
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Self {
        let id = DomSettings::default().settings_element_id;
        let json = document
            .get_element_by_id(&id)
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", id);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings in #{}: {}", id, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
