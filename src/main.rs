//! Penger Jet entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use penger_jet::consts::*;
    use penger_jet::layout::fit_aspect;
    use penger_jet::platform::load_image;
    use penger_jet::renderer::{RenderState, build_scene};
    use penger_jet::sim::{FrameClock, GameState, PcgSource, TickInput, Viewport, tick};
    use penger_jet::{GameError, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: PcgSource,
        clock: FrameClock,
        input: TickInput,
        render_state: RenderState,
        canvas: HtmlCanvasElement,
        sprite_size: Vec2,
    }

    impl Game {
        /// Run the simulation steps owed for this frame
        fn update(&mut self, time: f64) {
            let steps = self.clock.advance(time);
            for _ in 0..steps {
                tick(&mut self.state, &self.input, &mut self.rng, SIM_DT_MS);
                // Thrust is one-shot
                self.input.thrust = false;
                if self.state.over {
                    break;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let scene = build_scene(&self.state);
            match self.render_state.render(&scene) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
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
        }

        /// Refit the canvas to the window
        fn resize(&mut self) {
            let viewport = window_viewport();
            self.canvas.set_width(viewport.width as u32);
            self.canvas.set_height(viewport.height as u32);
            log::info!(
                "new canvas dimensions: {} x {}",
                self.canvas.width(),
                self.canvas.height()
            );
            self.render_state
                .resize(self.canvas.width(), self.canvas.height());
            self.state.resize(viewport, self.sprite_size);
        }
    }

    /// Largest 16:9 box that fits the browser window
    fn window_viewport() -> Viewport {
        let (w, h) = web_sys::window()
            .map(|window| {
                let w = window.inner_width().ok().and_then(|v| v.as_f64());
                let h = window.inner_height().ok().and_then(|v| v.as_f64());
                (
                    w.unwrap_or(DEFAULT_VIEWPORT_WIDTH as f64),
                    h.unwrap_or(DEFAULT_VIEWPORT_HEIGHT as f64),
                )
            })
            .unwrap_or((DEFAULT_VIEWPORT_WIDTH as f64, DEFAULT_VIEWPORT_HEIGHT as f64));
        let (cw, ch) = fit_aspect(w as f32, h as f32, ASPECT_RATIO);
        // Canvas sizes are whole pixels
        Viewport::new(cw.floor(), ch.floor())
    }

    pub async fn run() -> Result<(), GameError> {
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Dom("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .ok_or_else(|| GameError::Dom("no #game-canvas element".into()))?
            .dyn_into()
            .map_err(|_| GameError::Dom("#game-canvas is not a canvas".into()))?;

        // Nothing starts until the sprite is in
        let sprite = load_image(ACTOR_IMAGE_PATH).await?;
        let sprite_size = sprite.size();

        let viewport = window_viewport();
        canvas.set_width(viewport.width as u32);
        canvas.set_height(viewport.height as u32);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            canvas.width(),
            canvas.height(),
            &sprite,
        )
        .await?;

        let tuning = Tuning::load();
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(tuning, viewport, sprite_size),
            rng: PcgSource::unseeded(),
            clock: FrameClock::new(),
            input: TickInput::default(),
            render_state,
            canvas,
            sprite_size,
        }));
        game.borrow_mut().resize();

        setup_input_handlers(game.clone())?;
        setup_resize_handler(game.clone())?;

        request_animation_frame(game);
        log::info!("Penger Jet running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), GameError> {
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.code() == "Space" {
                game.borrow_mut().input.thrust = true;
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) -> Result<(), GameError> {
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let over = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
            g.state.over
        };

        // Last frame stays on screen once the run is over
        if !over {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }

    log::info!("Penger Jet starting...");
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Penger Jet (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session with a simple autopilot, for smoke testing
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use penger_jet::Tuning;
    use penger_jet::consts::SIM_DT_MS;
    use penger_jet::platform::SpriteImage;
    use penger_jet::sim::{GameEvent, GameState, PcgSource, TickInput, Viewport, tick};

    /// Give up after ten simulated minutes
    const MAX_STEPS: u32 = 60 * 60 * 10;

    /// Thrust whenever the actor sinks below the middle of the screen
    fn autopilot(state: &GameState) -> TickInput {
        let center = state.actor.pos.y + state.actor.size.y / 2.0;
        TickInput {
            thrust: center > state.viewport.height / 2.0 && state.actor.vel.y > 0.0,
        }
    }

    pub fn run() {
        let sprite = SpriteImage::solid(64, 64, [255; 4]);
        let mut state = GameState::new(Tuning::load(), Viewport::default(), sprite.size());
        let mut rng = PcgSource::unseeded();

        let mut steps = 0;
        while !state.over && steps < MAX_STEPS {
            let input = autopilot(&state);
            for event in tick(&mut state, &input, &mut rng, SIM_DT_MS) {
                if let GameEvent::ObstacleRecycled { score, .. } = event {
                    log::debug!("step {steps}: score {score}");
                }
            }
            steps += 1;
        }

        let seconds = steps as f32 * SIM_DT_MS / 1000.0;
        log::info!(
            "Session finished after {steps} steps ({seconds:.1}s), over: {}, score: {}",
            state.over,
            state.score
        );
        println!("Score: {}", state.score);
    }
}
