//! Browser host
//!
//! Looks up the page elements, sizes the canvas, binds input, and starts the
//! `requestAnimationFrame` loop. Missing elements abort startup with an error.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent,
    TouchEvent, Window,
};

use crate::game::{FrameScheduler, Game, run_loop};
use crate::input::{InputEvent, InputOutcome, PointerSource};
use crate::layout::{Layout, Viewport};
use crate::renderer::CanvasSurface;
use crate::settings::Settings;

type SharedGame = Rc<RefCell<Game<CanvasSurface>>>;

/// [`FrameScheduler`] backed by `window.requestAnimationFrame`
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let closure = Closure::once(move |time: f64| callback(time));
        if let Err(e) = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

fn startup_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| startup_error(&format!("missing element #{}", id)))
}

fn read_viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok(Viewport::new(width as f32, height as f32))
}

/// Boot the game on the current page
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| startup_error(&format!("logger init failed: {}", e)))?;

    log::info!("Paddle Bounce starting...");

    let window = web_sys::window().ok_or_else(|| startup_error("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| startup_error("no document"))?;

    let settings = Settings::load(&document);

    let canvas: HtmlCanvasElement = require_element(&document, &settings.dom.canvas_id)?
        .dyn_into()
        .map_err(|_| startup_error("game canvas is not a <canvas>"))?;
    let pause_btn = require_element(&document, &settings.dom.pause_button_id)?;
    let menu_btn = require_element(&document, &settings.dom.menu_button_id)?;

    let viewport = read_viewport(&window)?;
    let layout = Layout::from_viewport(viewport, &settings.layout);
    let (width, height) = layout.canvas_size();
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| startup_error("2d context unavailable"))?
        .dyn_into()?;

    let game: SharedGame = Rc::new(RefCell::new(Game::new(
        &settings,
        layout,
        CanvasSurface::new(ctx),
    )));

    bind_pointer(&document, &canvas, game.clone())?;
    bind_click(&pause_btn, game.clone(), InputEvent::TogglePause)?;
    bind_click(&menu_btn, game.clone(), InputEvent::ToggleMenu)?;
    bind_keyboard(&window, game.clone())?;
    if settings.auto_pause {
        bind_auto_pause(&window, &document, game.clone())?;
    }

    run_loop(game, Rc::new(AnimationFrameScheduler::new(window)));

    log::info!("Paddle Bounce running!");
    Ok(())
}

fn bind_pointer(
    document: &Document,
    canvas: &HtmlCanvasElement,
    game: SharedGame,
) -> Result<(), JsValue> {
    // Mouse move anywhere on the page steers the paddle
    {
        let game = game.clone();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let canvas_x = event.client_x() as f32 - rect.left() as f32;
            game.borrow_mut().handle_input(InputEvent::PointerMove {
                canvas_x,
                source: PointerSource::Mouse,
            });
        });
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch move on the canvas; page scroll is suppressed only when the paddle moved
    {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                let rect = canvas_clone.get_bounding_client_rect();
                let canvas_x = touch.client_x() as f32 - rect.left() as f32;
                let outcome = game.borrow_mut().handle_input(InputEvent::PointerMove {
                    canvas_x,
                    source: PointerSource::Touch,
                });
                if outcome.suppress_default() {
                    event.prevent_default();
                }
            }
        });
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn bind_click(button: &Element, game: SharedGame, event: InputEvent) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        game.borrow_mut().handle_input(event);
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_keyboard(window: &Window, game: SharedGame) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            game.borrow_mut().handle_input(InputEvent::TogglePause);
        }
    });
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_auto_pause(window: &Window, document: &Document, game: SharedGame) -> Result<(), JsValue> {
    // Visibility change (tab switch, minimize)
    {
        let game = game.clone();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let outcome = game.borrow_mut().handle_input(InputEvent::FocusLost);
                if outcome == InputOutcome::Applied {
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    }

    // Window blur (click outside)
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let outcome = game.borrow_mut().handle_input(InputEvent::FocusLost);
            if outcome == InputOutcome::Applied {
                log::info!("Auto-paused (window blur)");
            }
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
