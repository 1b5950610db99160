//! Paddle Bounce entry point
//!
//! On the web this boots the canvas game. Natively it runs a headless
//! simulation with the paddle tracking the ball, useful for checking the loop
//! without a browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    paddle_bounce::platform::web::start()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_bounce::renderer::NullSurface;
    use paddle_bounce::{Game, InputEvent, Layout, PointerSource, Settings, Viewport};

    env_logger::init();
    log::info!("Paddle Bounce (native) starting...");

    // Optional frame count, defaults to one minute at 60 Hz
    let frames: u32 = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(e) => {
                log::warn!("Ignoring frame count {:?}: {}", arg, e);
                3600
            }
        },
        None => 3600,
    };

    let settings = Settings::load();
    let layout = Layout::from_viewport(Viewport::new(1280.0, 800.0), &settings.layout);
    let mut game = Game::new(&settings, layout, NullSurface);

    let frame_ms = 1000.0 / 60.0;
    let mut misses = 0;
    for i in 0..frames {
        // Keep the paddle under the ball, slightly off center so bounces vary
        let target = game.state().ball.pos.x + (i as f32 * 0.05).sin() * 20.0;
        game.handle_input(InputEvent::PointerMove {
            canvas_x: target,
            source: PointerSource::Mouse,
        });
        misses += game.frame(i as f64 * frame_ms).misses;
    }

    log::info!("Simulated {} frames, {} misses", frames, misses);
    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
