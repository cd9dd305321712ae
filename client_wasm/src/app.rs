//! Browser entry point: owns the state machine, renderer and frame clock

use game_core::{Config, FrameClock, FsmState, GameAction, GameFsm, View};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::input::{menu_action, touch_input, PaddleKeys};
use crate::renderer::Renderer;

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already installed when a second app is started on the page
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct PongApp {
    fsm: GameFsm,
    renderer: Renderer,
    clock: FrameClock,
    keys: PaddleKeys,
    view: View,
    last_state: FsmState,
    last_ms: Option<f64>,
}

#[wasm_bindgen]
impl PongApp {
    /// Set up WebGPU on `canvas` and open the main menu. The playfield is
    /// the canvas size; `options_json` may only set `ball_speed`.
    pub async fn start(
        canvas: HtmlCanvasElement,
        options_json: Option<String>,
    ) -> Result<PongApp, JsValue> {
        init_logging();

        let config = Config::from_json(
            options_json.as_deref().unwrap_or("{}"),
            canvas.width() as f32,
            canvas.height() as f32,
        )
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;

        let renderer = Renderer::new(canvas, &config)
            .await
            .map_err(|e| JsValue::from_str(&e))?;

        let seed = js_sys::Date::now() as u64;
        log::info!("starting pong with seed {}", seed);

        let clock = FrameClock::new(config.frame_rate);
        let fsm = GameFsm::new(config, seed);
        let view = fsm.view();

        Ok(PongApp {
            last_state: fsm.state(),
            fsm,
            renderer,
            clock,
            keys: PaddleKeys::new(),
            view,
            last_ms: None,
        })
    }

    pub fn key_down(&mut self, key: &str) {
        if self.fsm.is_playing() {
            if let Some(input) = self.keys.press(key) {
                self.fsm.paddle_input(input);
                return;
            }
            // Key repeat of a held paddle key
            if self.keys.is_held(key) {
                return;
            }
        }

        if let Some(action) = menu_action(key) {
            self.apply(action);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(input) = self.keys.release(key) {
            self.fsm.paddle_input(input);
        }
    }

    /// Touch position in playfield pixels
    pub fn touch_move(&mut self, x: f32, y: f32) {
        if let Some(input) = touch_input(x, y, self.fsm.config().playfield_width) {
            self.fsm.paddle_input(input);
        }
    }

    /// Run the ticks owed since the last call and draw. Returns false once
    /// the game has exited and the host should stop its loop.
    pub fn frame(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        let elapsed = self
            .last_ms
            .map(|last| ((now_ms - last) / 1000.0) as f32)
            .unwrap_or(0.0);
        self.last_ms = Some(now_ms);

        for _ in 0..self.clock.advance(elapsed) {
            self.fsm.tick();
            self.sync_state();
        }

        self.view = self.fsm.view();
        self.renderer
            .draw(&self.view)
            .map_err(|e| JsValue::from_str(&e))?;

        Ok(!self.fsm.is_exited())
    }

    pub fn menu_title(&self) -> Option<String> {
        match &self.view {
            View::Menu(menu) => Some(menu.title.to_string()),
            _ => None,
        }
    }

    pub fn menu_options(&self) -> Vec<String> {
        match &self.view {
            View::Menu(menu) => menu.options.iter().map(|o| o.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn selected_option(&self) -> Option<String> {
        match &self.view {
            View::Menu(menu) => Some(menu.selected_option().to_string()),
            _ => None,
        }
    }

    /// Left label then right label
    pub fn score_labels(&self) -> Vec<String> {
        match &self.view {
            View::Frame(frame) => vec![frame.left_label.clone(), frame.right_label.clone()],
            _ => Vec::new(),
        }
    }

    pub fn banner(&self) -> Option<String> {
        match &self.view {
            View::Frame(frame) => frame.banner.clone(),
            _ => None,
        }
    }

    pub fn state_name(&self) -> String {
        self.fsm.state_string()
    }
}

impl PongApp {
    fn apply(&mut self, action: GameAction) {
        let result = self.fsm.transition(action);
        if result.success() {
            self.sync_state();
            self.view = self.fsm.view();
        }
    }

    /// Paddles start still in every new state, so drop any held keys
    fn sync_state(&mut self) {
        let state = self.fsm.state();
        if state != self.last_state {
            self.keys.clear();
            self.last_state = state;
        }
    }
}
