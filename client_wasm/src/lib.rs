//! WebGPU client for local two-player Pong
//!
//! The page owns the `requestAnimationFrame` loop and the key listeners and
//! calls into the exported functions below. One `frame()` is one match tick.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod camera;
mod error;
mod input;
mod mesh;
mod scene;
mod scoreboard;
mod settings;
mod sound;
mod tick;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use crate::audio::AudioNotifier;
    use crate::error::ClientError;
    use crate::renderer::Renderer;
    use crate::{input, settings, tick};
    use game_core::Match;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    /// Main client state
    pub struct Client {
        game: Match,
        renderer: Renderer,
        audio: AudioNotifier,
    }

    impl Client {
        pub async fn new(
            canvas: HtmlCanvasElement,
            config_json: Option<String>,
        ) -> Result<Self, ClientError> {
            let config = settings::parse_config(config_json.as_deref())?;
            let game = Match::new(config)?;
            let renderer = Renderer::new(canvas, game.field()).await?;
            let audio = AudioNotifier::new();

            Ok(Self {
                game,
                renderer,
                audio,
            })
        }

        /// Advance one tick, play its sounds, draw the result.
        /// A failed draw is logged; the next frame ticks as usual.
        pub fn frame(&mut self) {
            let audio = &self.audio;
            let renderer = &mut self.renderer;
            tick::run_frame(
                &mut self.game,
                |event| audio.notify(event),
                |snapshot| renderer.draw(snapshot),
            );
        }

        pub fn key_down(&mut self, key: &str) {
            let speed = self.game.config().paddle_speed;
            if let Some(cmd) = input::handle_key_down(key, speed) {
                self.game.set_paddle_velocity(cmd.side, cmd.dy);
            }
        }

        pub fn key_up(&mut self, key: &str) {
            if let Some(cmd) = input::handle_key_up(key) {
                self.game.set_paddle_velocity(cmd.side, cmd.dy);
            }
        }
    }

    thread_local! {
        // Global client storage for WASM bindings
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<R>(f: impl FnOnce(&mut Client) -> Result<R, ClientError>) -> Result<R, JsValue> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => f(client).map_err(JsValue::from),
            None => Err(ClientError::NotInitialized.into()),
        })
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement, config_json: Option<String>) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if let Err(e) = console_log::init_with_level(level) {
            log::debug!("Logger already set: {}", e);
        }

        wasm_bindgen_futures::future_to_promise(async move {
            match Client::new(canvas, config_json).await {
                Ok(client) => {
                    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
                    Ok(JsValue::UNDEFINED)
                }
                Err(e) => {
                    log::error!("Failed to start client: {}", e);
                    Err(e.into())
                }
            }
        })
    }

    #[wasm_bindgen]
    pub fn frame() -> Result<(), JsValue> {
        with_client(|client| {
            client.frame();
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn key_down(key: &str) -> Result<(), JsValue> {
        with_client(|client| {
            client.key_down(key);
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn key_up(key: &str) -> Result<(), JsValue> {
        with_client(|client| {
            client.key_up(key);
            Ok(())
        })
    }

    /// Returns the new state so the page can show "Sound: On/Off"
    #[wasm_bindgen]
    pub fn toggle_sound() -> Result<bool, JsValue> {
        with_client(|client| Ok(client.audio.toggle()))
    }

    #[wasm_bindgen]
    pub fn test_sound() -> Result<(), JsValue> {
        with_client(|client| {
            client.audio.test_sound();
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn sound_enabled() -> Result<bool, JsValue> {
        with_client(|client| Ok(client.audio.is_enabled()))
    }

    /// `[left, right]`
    #[wasm_bindgen]
    pub fn scores() -> Result<Vec<u32>, JsValue> {
        with_client(|client| {
            let score = client.game.score();
            Ok(vec![score.left, score.right])
        })
    }
}
