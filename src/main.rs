//! Chicken Cross entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use chicken_cross::levels::{levels_or_empty, parse_levels};
    use chicken_cross::renderer::{RenderState, Scene};
    use chicken_cross::sim::Key;
    use chicken_cross::{Game, GameConfig, HudCallback, LevelConfig, LevelError};

    const LEVELS_URL: &str = "./public/levels.json";
    const FETCH_TIMEOUT_MS: i32 = 3000;
    const LANE_HEIGHT: f32 = 80.0;

    /// Game plus the GPU state that presents it
    struct Host {
        game: Game,
        render_state: Option<RenderState>,
        /// Element showing overlay/pause text
        message_el: Option<web_sys::Element>,
        shown_message: Option<String>,
    }

    impl Host {
        fn present(&mut self, scene: &Scene) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(scene) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            if scene.message != self.shown_message {
                if let Some(el) = &self.message_el {
                    match &scene.message {
                        Some(text) => {
                            el.set_text_content(Some(text));
                            let _ = el.set_attribute("class", "");
                        }
                        None => {
                            let _ = el.set_attribute("class", "hidden");
                        }
                    }
                }
                self.shown_message = scene.message.clone();
            }
        }
    }

    fn js_err(value: JsValue) -> LevelError {
        LevelError::Fetch(format!("{value:?}"))
    }

    /// GET `url` as text, aborting after `timeout_ms`
    async fn fetch_text(url: &str, timeout_ms: i32) -> Result<String, LevelError> {
        let window = web_sys::window().ok_or_else(|| LevelError::Fetch("no window".into()))?;
        let controller = web_sys::AbortController::new().map_err(js_err)?;

        let abort = {
            let controller = controller.clone();
            Closure::once(move || controller.abort())
        };
        let timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                abort.as_ref().unchecked_ref(),
                timeout_ms,
            )
            .map_err(js_err)?;

        let opts = web_sys::RequestInit::new();
        opts.set_signal(Some(&controller.signal()));

        let result = async {
            let resp: web_sys::Response = JsFuture::from(window.fetch_with_str_and_init(url, &opts))
                .await
                .map_err(js_err)?
                .dyn_into()
                .map_err(js_err)?;
            if !resp.ok() {
                return Err(LevelError::Fetch(format!("HTTP {}", resp.status())));
            }
            let body = JsFuture::from(resp.text().map_err(js_err)?)
                .await
                .map_err(js_err)?;
            body.as_string()
                .ok_or_else(|| LevelError::Fetch("response body is not text".into()))
        }
        .await;

        // The timer must not fire into a dropped closure
        window.clear_timeout_with_handle(timer);
        drop(abort);
        result
    }

    async fn load_levels() -> Vec<LevelConfig> {
        let result = match fetch_text(LEVELS_URL, FETCH_TIMEOUT_MS).await {
            Ok(json) => parse_levels(&json),
            Err(e) => Err(e),
        };
        levels_or_empty(result)
    }

    /// HUD writer: `Level : n`, `Score : n`, `Lives : n`
    fn hud_callback(document: &Document) -> HudCallback {
        let level_el = document.get_element_by_id("level");
        let score_el = document.get_element_by_id("score");
        let lives_el = document.get_element_by_id("lives");
        let mut last = None;

        Box::new(move |level, score, lives| {
            if last == Some((level, score, lives)) {
                return;
            }
            last = Some((level, score, lives));
            if let Some(el) = &level_el {
                el.set_text_content(Some(&format!("Level : {level}")));
            }
            if let Some(el) = &score_el {
                el.set_text_content(Some(&format!("Score : {score}")));
            }
            if let Some(el) = &lives_el {
                el.set_text_content(Some(&format!("Lives : {lives}")));
            }
        })
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Chicken Cross starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = (canvas.width(), canvas.height());
        let config = GameConfig::new(width as f32, height as f32, LANE_HEIGHT).unwrap_or_else(|e| {
            log::warn!("Canvas unusable ({e}), using default field");
            GameConfig::default()
        });

        // Levels must be settled before the game exists
        let levels = load_levels().await;

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(config, levels, hud_callback(&document), seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot build game: {e}");
                return;
            }
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let render_state = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::HighPerformance,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await
                    .expect("Failed to get adapter");
                log::info!("Using adapter: {:?}", adapter.get_info().name);

                match RenderState::new(surface, &adapter, width, height, (config.width, config.height)).await {
                    Ok(state) => Some(state),
                    Err(e) => {
                        log::error!("{e}");
                        None
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to create surface: {e}");
                None
            }
        };

        let host = Rc::new(RefCell::new(Host {
            game,
            render_state,
            message_el: document.get_element_by_id("overlay-text"),
            shown_message: None,
        }));

        setup_input_handlers(host.clone());
        setup_start_button(&document, host);

        log::info!("Chicken Cross ready");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    if key.prevents_default() {
                        event.prevent_default();
                    }
                    host.borrow_mut().game.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    host.borrow_mut().game.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup never arrives for keys held while focus leaves
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                host.borrow_mut().game.release_all_keys();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(document: &Document, host: Rc<RefCell<Host>>) {
        if let Some(btn) = document.get_element_by_id("start") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let now = web_sys::window()
                    .and_then(|w| w.performance())
                    .map(|p| p.now())
                    .unwrap_or(0.0);
                // start() refuses a second run, so the loop is only scheduled once
                if host.borrow_mut().game.start(now) {
                    request_animation_frame(host.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #start button, game will not start");
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut h = host.borrow_mut();
            let Some(scene) = h.game.frame(time) else {
                log::info!("Frame loop ended");
                return;
            };
            h.present(&scene);
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chicken_cross::levels::{levels_or_empty, load_levels};

    env_logger::init();
    log::info!("Chicken Cross (native) starting...");
    log::info!("Native mode runs a scripted headless session - use `trunk serve` to play");

    let mut args = std::env::args().skip(1);
    let levels = match args.next() {
        Some(path) => levels_or_empty(load_levels(&path)),
        None => {
            log::info!("No level file given, using built-in level");
            Vec::new()
        }
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

    headless::run(levels, seed, headless::SESSION_FRAMES);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use chicken_cross::consts::BASELINE_FRAME_MS;
    use chicken_cross::sim::Key;
    use chicken_cross::{Game, GameConfig, HudCallback, LevelConfig};

    /// One minute at 60 fps
    pub const SESSION_FRAMES: u32 = 3600;

    /// Play a scripted session: push upward, boosting every other second and
    /// drifting sideways, logging every HUD change.
    pub fn run(levels: Vec<LevelConfig>, seed: u64, frames: u32) {
        let mut last = None;
        let hud: HudCallback = Box::new(move |level, score, lives| {
            if last != Some((level, score, lives)) {
                log::info!("Level : {level}  Score : {score}  Lives : {lives}");
                last = Some((level, score, lives));
            }
        });

        let mut game = match Game::new(GameConfig::default(), levels, hud, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot build game: {e}");
                return;
            }
        };
        game.start(0.0);
        game.key_down(Key::Up);

        for frame in 1..=frames {
            let now = frame as f64 * BASELINE_FRAME_MS;
            let second = frame / 60;

            if frame % 60 == 0 {
                if second % 2 == 0 {
                    game.key_down(Key::Boost);
                } else {
                    game.key_up(Key::Boost);
                }
                let (drift, other) = if second % 4 < 2 {
                    (Key::Left, Key::Right)
                } else {
                    (Key::Right, Key::Left)
                };
                game.key_up(other);
                game.key_down(drift);
            }

            if game.frame(now).is_none() {
                break;
            }
        }
        game.stop();

        let state = game.state();
        log::info!(
            "Session over: level {}, score {}, lives {}",
            state.level().id,
            state.score.get(),
            state.runtime.lives
        );
    }
}
