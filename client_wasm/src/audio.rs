//! Sound effects for match events
//!
//! Playback problems are logged and dropped here; they never reach the match.
//! If the clips cannot be created the notifier stays silent.

use crate::sound::{Clip, SoundSwitch};
use game_core::MatchEvent;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

pub struct AudioNotifier {
    clips: Option<[HtmlAudioElement; 3]>,
    switch: SoundSwitch,
    // Shared rejection handler for play() promises
    on_play_error: Closure<dyn FnMut(JsValue)>,
}

fn load_clips() -> Result<[HtmlAudioElement; 3], JsValue> {
    let [left, right, score] = Clip::ALL.map(Clip::src);
    Ok([
        HtmlAudioElement::new_with_src(left)?,
        HtmlAudioElement::new_with_src(right)?,
        HtmlAudioElement::new_with_src(score)?,
    ])
}

impl AudioNotifier {
    pub fn new() -> Self {
        let clips = match load_clips() {
            Ok(clips) => Some(clips),
            Err(err) => {
                log::warn!("Audio unavailable, running silent: {:?}", err);
                None
            }
        };

        Self {
            clips,
            switch: SoundSwitch::default(),
            on_play_error: Closure::new(|err: JsValue| {
                log::error!("Error playing sound: {:?}", err);
            }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.switch.is_enabled()
    }

    /// Play the effect for `event` from the beginning
    pub fn notify(&self, event: MatchEvent) {
        if let Some(clip) = self.switch.clip_for(event) {
            if let Some(element) = self.element(clip) {
                element.set_current_time(0.0);
                self.start(element);
            }
        }
    }

    /// Flip sound on/off. The first toggle also preloads every clip.
    pub fn toggle(&mut self) -> bool {
        let toggled = self.switch.toggle();
        if toggled.preload {
            for element in self.clips.iter().flatten() {
                element.load();
            }
        }

        log::info!("Sound: {}", if toggled.enabled { "On" } else { "Off" });
        toggled.enabled
    }

    pub fn test_sound(&self) {
        if let Some(element) = self.switch.test_clip().and_then(|c| self.element(c)) {
            self.start(element);
        }
    }

    fn element(&self, clip: Clip) -> Option<&HtmlAudioElement> {
        self.clips.as_ref().map(|clips| &clips[clip as usize])
    }

    fn start(&self, element: &HtmlAudioElement) {
        match element.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_play_error);
            }
            Err(err) => log::error!("Error playing sound: {:?}", err),
        }
    }
}
