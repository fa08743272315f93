//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::Config;
    use brick_breaker::consts::{MAX_SUBSTEPS, SIM_DT};
    use brick_breaker::render::build_scene;
    use brick_breaker::render::canvas::CanvasBackend;
    use brick_breaker::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        backend: CanvasBackend,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        events: Vec<GameEvent>,
    }

    impl Game {
        fn new(seed: u64, config: Config, backend: CanvasBackend) -> Self {
            Self {
                state: GameState::new(seed, config),
                backend,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                events: Vec::new(),
            }
        }

        /// Run due simulation ticks for this frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input, &mut self.events);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.pointer_x = None;
                self.input.restart = false;
            }
        }

        /// Render the current frame
        fn render(&self) {
            let cmds = build_scene(&self.state);
            if let Err(err) = self.backend.draw(
                &cmds,
                self.state.config.surface_w,
                self.state.config.surface_h,
            ) {
                log::warn!("Render error: {err:?}");
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }
            if let Some(el) = document.get_element_by_id("hud-lives") {
                el.set_text_content(Some(&format!("Lives: {}", self.state.lives)));
            }
        }

        /// Surface round-ending events as a dismissable overlay
        fn handle_events(&mut self) {
            for event in self.events.drain(..) {
                match event {
                    GameEvent::Win { score } => {
                        log::info!("round won with score {score}");
                        show_overlay(&format!("You win! Score: {score}"));
                    }
                    GameEvent::GameOver { score } => {
                        log::info!("round lost with score {score}");
                        show_overlay(&format!("Game over! Score: {score}"));
                    }
                    GameEvent::LifeLost { remaining } => {
                        log::info!("life lost, {remaining} remaining");
                    }
                    GameEvent::BrickDestroyed { .. } | GameEvent::PaddleHit { .. } => {}
                }
            }
        }
    }

    /// Show the round-over overlay with the given message
    fn show_overlay(message: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("round-over") {
            el.set_text_content(Some(message));
            let _ = el.set_attribute("class", "overlay");
        }
    }

    fn hide_overlay() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("round-over") {
            let _ = el.set_attribute("class", "overlay hidden");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = Config::load();
        canvas.set_width(config.surface_w as u32);
        canvas.set_height(config.surface_h as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            config,
            CanvasBackend::new(ctx),
        )));

        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Direction keys held down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = true,
                    "ArrowRight" => g.input.right = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Direction keys released
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = false,
                    "ArrowRight" => g.input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer movement over the surface
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer_x = Some(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click anywhere on the overlay dismisses it
        {
            let document = window.document().expect("no document");
            if let Some(el) = document.get_element_by_id("round-over") {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    hide_overlay();
                });
                let _ =
                    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.restart = true;
                hide_overlay();
                log::info!("Restart requested");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.handle_events();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use brick_breaker::Config;
    use brick_breaker::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let config = Config::load();
    let mut state = GameState::new(seed, config);
    let mut events = Vec::new();

    log::info!("Brick Breaker headless demo, seed {seed}");

    // Autoplay: track the ball with the pointer for up to five minutes of
    // simulated time, reporting round outcomes
    for _ in 0..18_000u32 {
        let input = TickInput {
            pointer_x: Some(state.ball.pos.x),
            ..Default::default()
        };
        tick(&mut state, &input, &mut events);

        for event in events.drain(..) {
            match event {
                GameEvent::BrickDestroyed { row, col } => {
                    log::debug!("brick ({row}, {col}) destroyed, score {}", state.score);
                }
                GameEvent::PaddleHit { hit_pos } => {
                    log::debug!("paddle hit at {hit_pos:+.2}");
                }
                GameEvent::LifeLost { remaining } => {
                    log::info!("life lost, {remaining} remaining");
                }
                GameEvent::Win { score } => {
                    println!("You win! Score: {score}");
                    return;
                }
                GameEvent::GameOver { score } => {
                    println!("Game over! Score: {score}");
                    return;
                }
            }
        }
    }

    println!(
        "Demo timed out: score {}, lives {}, {} bricks left",
        state.score,
        state.lives,
        state.grid.alive_count()
    );
}
