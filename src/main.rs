//! Pixel Jumper entry point
//!
//! On the web this wires the canvas, keyboard, buttons and HUD elements to a
//! `Game` and drives it from `requestAnimationFrame`. Natively it plays a
//! scripted headless session and prints the final snapshot as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use pixel_jumper::platform::{ControlAction, KeyboardInput};
    use pixel_jumper::renderer::CanvasSurface;
    use pixel_jumper::{Game, GameConfig};

    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    impl App {
        fn control(&mut self, action: ControlAction) {
            self.game.control(action, js_sys::Date::now());
            self.update_hud();
        }

        /// Copy the HUD model into the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let now = js_sys::Date::now();
            let hud = &self.game.hud;

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&hud.lives.to_string()));
            }
            if let Some(el) = document.get_element_by_id("level") {
                el.set_text_content(Some(&hud.level.to_string()));
            }
            if let Some(el) = document.get_element_by_id("gameMessage") {
                match self.game.message(now) {
                    Some(text) => {
                        el.set_text_content(Some(text));
                        let _ = el.set_attribute("class", "message");
                    }
                    None => {
                        let _ = el.set_attribute("class", "message hidden");
                    }
                }
            }
            if let Some(el) = document.get_element_by_id("pauseBtn") {
                el.set_text_content(Some(self.game.pause_label()));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pixel Jumper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let config = GameConfig::new(canvas.width() as f32, canvas.height() as f32, seed);
        let game = match Game::new(config, js_sys::Date::now()) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start: {e}");
                return;
            }
        };

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(canvas, ctx),
        }));
        app.borrow().update_hud();

        setup_keyboard(app.clone());
        setup_buttons(app.clone());
        setup_focus_loss(app.clone());

        request_animation_frame(app);

        log::info!("Pixel Jumper running (seed {})", seed);
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if KeyboardInput::captures(&code) {
                    event.prevent_default();
                }
                let mut a = app.borrow_mut();
                if a
                    .game
                    .key_down(&code, event.repeat(), js_sys::Date::now())
                    .is_some()
                {
                    a.update_hud();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let buttons = [
            ("startBtn", ControlAction::Start),
            ("pauseBtn", ControlAction::TogglePause),
            ("restartBtn", ControlAction::Restart),
        ];
        for (id, action) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{id}");
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().control(action);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keys held while the page loses focus never see their keyup
    fn setup_focus_loss(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().game.release_keys();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            game.frame(time, js_sys::Date::now(), surface);
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pixel Jumper (native) starting...");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    match headless::run(config) {
        Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize snapshot: {e}"),
        },
        Err(e) => {
            log::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    }
}

/// Config from the JSON file named by the first argument, or defaults with a
/// time-based seed
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<pixel_jumper::GameConfig, pixel_jumper::ConfigError> {
    use pixel_jumper::GameConfig;

    match std::env::args().nth(1) {
        Some(path) => GameConfig::from_path(path),
        None => {
            let seed = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default();
            Ok(GameConfig {
                seed,
                ..Default::default()
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use pixel_jumper::platform::{ControlAction, FixedStepTime, LoopControl, run_frames};
    use pixel_jumper::renderer::RecordingSurface;
    use pixel_jumper::sim::{GameEvent, GamePhase, Snapshot};
    use pixel_jumper::{ConfigError, Game, GameConfig};

    /// One minute at 60 fps
    const MAX_FRAMES: u64 = 3600;
    const FRAME_MS: f64 = 16.0;

    /// Play a scripted session: run right, then left, jumping periodically
    pub fn run(config: GameConfig) -> Result<Snapshot, ConfigError> {
        let mut surface = RecordingSurface::new(config.width, config.height);
        let mut game = Game::new(config, 0.0)?;
        let mut time = FixedStepTime::new(0.0, FRAME_MS);

        game.control(ControlAction::Start, 0.0);

        let mut held: Option<&str> = None;
        let frames = run_frames(&mut time, |now| {
            let frame = (now / FRAME_MS) as u64;
            let direction = if (frame / 180) % 2 == 0 {
                "ArrowRight"
            } else {
                "ArrowLeft"
            };
            if held != Some(direction) {
                if let Some(key) = held {
                    game.key_up(key);
                }
                game.key_down(direction, false, now);
                held = Some(direction);
            }

            // Tap jump for a few frames every ~0.75 s
            if frame % 45 == 0 {
                game.key_down("Space", false, now);
            } else if frame % 45 == 3 {
                game.key_up("Space");
            }

            for event in game.frame(now, now, &mut surface) {
                match event {
                    GameEvent::CoinCollected { .. } => {}
                    other => log::info!("{other:?}"),
                }
            }

            if game.world.phase == GamePhase::GameOver || frame + 1 >= MAX_FRAMES {
                LoopControl::Stop
            } else {
                LoopControl::Continue
            }
        });

        log::info!(
            "Session ended after {frames} frames: score {}, level {}",
            game.world.score,
            game.world.level
        );
        Ok(game.world.snapshot())
    }
}
