//! Flappy Drift entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use flappy_drift::platform::web::WebSurface;
    use flappy_drift::platform::{Clock, FrameClock, Key, KeyboardState};
    use flappy_drift::{Application, Settings, ShellError, ShellResult};

    /// Game instance holding all state
    struct Game {
        app: Application,
        surface: WebSurface,
        keys: KeyboardState,
        clock: FrameClock,
    }

    impl Game {
        /// Run one frame if the frame-rate cap allows it
        fn update(&mut self, time: f64) {
            if !self.surface.pacer_mut().ready(time) {
                return;
            }
            self.clock.observe(time);
            let dt_ms = self.clock.restart();

            let Game {
                app, surface, keys, ..
            } = self;
            if let Err(e) = app.frame(surface, &*keys, dt_ms) {
                log::error!("Frame failed: {}", e);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        if let Err(e) = start().await {
            log::error!("Startup failed: {}", e);
        }
    }

    async fn start() -> ShellResult<()> {
        let settings = Settings::default();
        log::info!("{} starting...", settings.window_title);

        let window = web_sys::window().ok_or(ShellError::MissingElement("window"))?;
        let document = window
            .document()
            .ok_or(ShellError::MissingElement("document"))?;
        document.set_title(&settings.window_title);

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(ShellError::MissingElement("#canvas"))?
            .dyn_into()
            .map_err(|_| ShellError::MissingElement("#canvas (not a canvas)"))?;
        let score_el = document
            .get_element_by_id("score")
            .ok_or(ShellError::MissingElement("#score"))?;

        // Fixed window size, backed at device resolution
        let dpr = window.device_pixel_ratio();
        canvas.set_width((settings.window_width as f64 * dpr) as u32);
        canvas.set_height((settings.window_height as f64 * dpr) as u32);
        let _ = canvas.set_attribute(
            "style",
            &format!(
                "width:{}px;height:{}px;",
                settings.window_width, settings.window_height
            ),
        );

        let surface = WebSurface::new(canvas, score_el, &settings).await?;

        let game = Rc::new(RefCell::new(Game {
            app: Application::new(settings),
            surface,
            keys: KeyboardState::default(),
            clock: FrameClock::new(),
        }));

        setup_input_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Game running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> ShellResult<()> {
        let window = web_sys::window().ok_or(ShellError::MissingElement("window"))?;

        // Key down: hold jump, toggle autopilot
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(k) = Key::from_dom_key(&key) {
                    event.prevent_default();
                    g.keys.set(k, true);
                } else if (key == "i" || key == "I") && !event.repeat() {
                    g.app.toggle_autopilot();
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|e| ShellError::Platform(format!("{:?}", e)))?;
            closure.forget();
        }

        // Key up: release
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(k) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().keys.set(k, false);
                }
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(|e| ShellError::Platform(format!("{:?}", e)))?;
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.release_all();
            });
            window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                .map_err(|e| ShellError::Platform(format!("{:?}", e)))?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Length of the native headless demo, in seconds of game time
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_RUN_SECS: u64 = 120;

/// Frames needed to cover `secs` of game time at `step_ms` per frame
#[cfg(not(target_arch = "wasm32"))]
fn headless_frame_budget(secs: u64, step_ms: f32) -> u64 {
    (secs as f64 * 1000.0 / step_ms.max(1.0) as f64).ceil() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_drift::platform::{FixedClock, HeadlessSurface, KeyboardState};
    use flappy_drift::{Application, Settings};

    env_logger::init();

    let settings = Settings::headless();
    log::info!("{} (native) starting...", settings.window_title);
    log::info!("No window on native builds - running a headless autopilot demo");

    let mut clock = FixedClock::from_frame_rate(settings.frame_rate_limit);
    let frame_budget = headless_frame_budget(HEADLESS_RUN_SECS, clock.step_ms());
    let mut surface = HeadlessSurface::new(frame_budget);
    let keys = KeyboardState::default();

    let mut app = Application::new(settings);
    if let Err(e) = app.run(&mut surface, &keys, &mut clock) {
        log::error!("Run failed: {}", e);
        std::process::exit(1);
    }

    match serde_json::to_string_pretty(&app.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use flappy_drift::platform::FixedClock;

    #[test]
    fn test_headless_budget_covers_run_length() {
        let clock = FixedClock::from_frame_rate(120);
        let frames = headless_frame_budget(HEADLESS_RUN_SECS, clock.step_ms());
        assert_eq!(frames, 15_000);
        assert_eq!(frames as f32 * clock.step_ms(), 120_000.0);
    }
}
