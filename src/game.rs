//! Game loop driver
//!
//! Owns the state and the drawing surface. Each host animation frame runs a
//! whole number of fixed simulation steps, then draws once.

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::{self, InputEvent, InputOutcome};
use crate::layout::Layout;
use crate::renderer::{Surface, build_frame, present};
use crate::settings::{Settings, StyleSettings};
use crate::sim::{FRAME_DT, GameState, TickOutcome, tick};

/// Longest frame gap fed into the simulation (seconds)
pub const MAX_FRAME_DT: f32 = 0.1;
/// Maximum substeps per frame to prevent spiral of death
pub const MAX_SUBSTEPS: u32 = 8;
/// Timestamp jitter tolerated before a step is postponed to the next frame
const STEP_EPSILON: f32 = 1e-4;

/// One-shot frame callback registration, like `requestAnimationFrame`
pub trait FrameScheduler {
    /// Call `callback` once before the next repaint with a timestamp in ms
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Simulation steps run
    pub steps: u32,
    /// Misses (resets) among those steps
    pub misses: u32,
}

/// Game instance holding all state
pub struct Game<S: Surface> {
    state: GameState,
    style: StyleSettings,
    surface: S,
    accumulator: f32,
    last_time: Option<f64>,
}

impl<S: Surface> Game<S> {
    pub fn new(settings: &Settings, layout: Layout, surface: S) -> Self {
        log::info!(
            "Canvas {}x{}, paddle {:.1}px, bounce policy {}",
            layout.width,
            layout.height,
            layout.paddle_width,
            settings.physics.paddle_bounce.as_str()
        );
        Self {
            state: GameState::new(layout, settings.physics.clone()),
            style: settings.style.clone(),
            surface,
            accumulator: 0.0,
            last_time: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Forward a host input
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        input::apply(&mut self.state, event)
    }

    /// Run simulation steps covering `dt` seconds of wall time
    pub fn update(&mut self, dt: f32) -> FrameReport {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut report = FrameReport::default();
        while self.accumulator + STEP_EPSILON >= FRAME_DT && report.steps < MAX_SUBSTEPS {
            if tick(&mut self.state, FRAME_DT) == TickOutcome::Missed {
                report.misses += 1;
            }
            self.accumulator -= FRAME_DT;
            report.steps += 1;
        }
        report
    }

    /// Paint the current state
    pub fn draw(&mut self) -> Result<(), S::Error> {
        let frame = build_frame(&self.state, &self.style);
        present(&frame, &mut self.surface)
    }

    /// One host animation frame: update then draw
    pub fn frame(&mut self, time_ms: f64) -> FrameReport {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => FRAME_DT,
        };
        self.last_time = Some(time_ms);

        let report = self.update(dt);
        log::trace!("Frame at {:.1}ms: {:?}", time_ms, report);

        if let Err(e) = self.draw() {
            log::warn!("Render error: {:?}", e);
        }
        report
    }
}

/// Run the game forever: every scheduled frame runs once and schedules the next
pub fn run_loop<S, F>(game: Rc<RefCell<Game<S>>>, scheduler: Rc<F>)
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |time| {
        game.borrow_mut().frame(time);
        run_loop(game, next);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerSource;
    use crate::layout::Viewport;
    use crate::renderer::surface::testing::RecordingSurface;
    use crate::sim::GameMode;
    use glam::Vec2;
    use std::cell::Cell;

    /// Holds pending callbacks until the test fires them
    #[derive(Default)]
    struct QueueScheduler {
        pending: RefCell<Vec<Box<dyn FnOnce(f64)>>>,
        requests: Cell<usize>,
    }

    impl QueueScheduler {
        fn fire(&self, time: f64) -> bool {
            let callback = self.pending.borrow_mut().pop();
            match callback {
                Some(callback) => {
                    callback(time);
                    true
                }
                None => false,
            }
        }
    }

    impl FrameScheduler for QueueScheduler {
        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
            self.requests.set(self.requests.get() + 1);
            self.pending.borrow_mut().push(callback);
        }
    }

    fn game() -> Game<RecordingSurface> {
        let settings = Settings::default();
        let layout = Layout::from_viewport(Viewport::new(1280.0, 800.0), &settings.layout);
        Game::new(&settings, layout, RecordingSurface::default())
    }

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_constant_refresh_runs_one_step_per_frame() {
        let mut game = game();
        for i in 0..600 {
            let report = game.frame(i as f64 * FRAME_MS);
            assert_eq!(report.steps, 1, "frame {}", i);
        }
    }

    #[test]
    fn test_first_frame_moves_one_step() {
        let mut game = game();
        game.frame(12_345.0);
        assert!((game.state().ball.pos - Vec2::new(404.0, 566.0)).length() < 1e-3);
    }

    #[test]
    fn test_slow_refresh_runs_more_steps() {
        let mut game = game();
        game.frame(0.0);
        // 30 Hz display
        let report = game.frame(2.0 * FRAME_MS);
        assert_eq!(report.steps, 2);
        assert!((game.state().ball.pos - Vec2::new(412.0, 558.0)).length() < 1e-3);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut game = game();
        game.frame(0.0);
        let report = game.frame(5_000.0);
        assert_eq!(report.steps, 6);
    }

    #[test]
    fn test_frame_draws_every_time() {
        let mut game = game();
        game.frame(0.0);
        assert_eq!(game.surface().calls.len(), 3);
        game.handle_input(InputEvent::ToggleMenu);
        game.frame(FRAME_MS);
        assert_eq!(game.surface().calls.len(), 8);
        assert!(game.surface().calls[7].starts_with("text Menu"));
    }

    #[test]
    fn test_draw_twice_without_update_is_identical() {
        let mut game = game();
        game.handle_input(InputEvent::TogglePause);
        game.draw().unwrap();
        let first = game.surface().calls.clone();
        game.draw().unwrap();
        assert_eq!(&game.surface().calls[first.len()..], first.as_slice());
    }

    #[test]
    fn test_render_error_does_not_stop_update() {
        let settings = Settings::default();
        let layout = Layout::from_viewport(Viewport::new(1280.0, 800.0), &settings.layout);
        let surface = RecordingSurface {
            fail_at: Some(0),
            ..Default::default()
        };
        let mut game = Game::new(&settings, layout, surface);

        let report = game.frame(0.0);
        assert_eq!(report.steps, 1);
        assert!(game.surface().calls.is_empty());
    }

    #[test]
    fn test_paused_frames_do_not_move_entities() {
        let mut game = game();
        game.handle_input(InputEvent::TogglePause);
        let ball = game.state().ball.clone();
        let paddle = game.state().paddle.clone();

        for i in 0..120 {
            game.frame(i as f64 * FRAME_MS);
            game.handle_input(InputEvent::PointerMove {
                canvas_x: i as f32 * 5.0,
                source: PointerSource::Mouse,
            });
        }
        assert_eq!(game.state().ball, ball);
        assert_eq!(game.state().paddle, paddle);
    }

    #[test]
    fn test_unattended_ball_is_missed_and_reset() {
        let mut game = game();
        game.state_mut().paddle.pos.x = 0.0;
        game.state_mut().ball.pos = Vec2::new(700.0, 580.0);
        game.state_mut().ball.vel = Vec2::new(0.0, 4.0);

        let report = game.frame(0.0);
        assert_eq!(report.misses, 0);
        let report = game.frame(FRAME_MS * 3.0);
        assert_eq!(report.misses, 1);
        assert_eq!(game.state().mode, GameMode::Playing);
    }

    #[test]
    fn test_loop_reregisters_every_frame() {
        let scheduler = Rc::new(QueueScheduler::default());
        let game = Rc::new(RefCell::new(game()));

        run_loop(Rc::clone(&game), Rc::clone(&scheduler));
        assert_eq!(scheduler.requests.get(), 1);

        for i in 0..10 {
            assert!(scheduler.fire(i as f64 * FRAME_MS));
        }
        assert_eq!(scheduler.requests.get(), 11);
        assert_eq!(scheduler.pending.borrow().len(), 1);
        assert!((game.borrow().state().ball.pos.x - 440.0).abs() < 1e-3);
    }

    #[test]
    fn test_input_between_frames() {
        let scheduler = Rc::new(QueueScheduler::default());
        let game = Rc::new(RefCell::new(game()));
        run_loop(Rc::clone(&game), Rc::clone(&scheduler));

        scheduler.fire(0.0);
        game.borrow_mut().handle_input(InputEvent::ToggleMenu);
        let ball = game.borrow().state().ball.clone();
        scheduler.fire(FRAME_MS);
        scheduler.fire(2.0 * FRAME_MS);
        assert_eq!(game.borrow().state().ball, ball);

        game.borrow_mut().handle_input(InputEvent::ToggleMenu);
        scheduler.fire(3.0 * FRAME_MS);
        assert_ne!(game.borrow().state().ball, ball);
    }
}
