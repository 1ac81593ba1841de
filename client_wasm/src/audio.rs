//! HTML media element playback

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use game_core::audio::{AudioBackend, SoundId};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, HtmlMediaElement};

const SOUND_DIR: &str = "./sounds";

fn db_to_gain(db: f32) -> f64 {
    10f64.powf(f64::from(db) / 20.0).clamp(0.0, 1.0)
}

pub struct HtmlAudio {
    elements: HashMap<SoundId, HtmlAudioElement>,
    master_db: f32,
    /// Sounds whose play() promise was rejected
    refused: Rc<RefCell<Vec<SoundId>>>,
}

impl HtmlAudio {
    pub fn load() -> Result<Self, JsValue> {
        let mut elements = HashMap::new();
        for id in SoundId::ALL {
            let element = HtmlAudioElement::new_with_src(&format!("{SOUND_DIR}/{}", id.file()))?;
            element.set_loop(id.looping());
            element.set_preload("auto");
            elements.insert(id, element);
        }
        let mut audio = Self {
            elements,
            master_db: 0.0,
            refused: Rc::new(RefCell::new(Vec::new())),
        };
        audio.apply_volume();
        Ok(audio)
    }

    pub fn element(&self, id: SoundId) -> Option<&HtmlAudioElement> {
        self.elements.get(&id)
    }

    pub fn take_refused(&self) -> Vec<SoundId> {
        std::mem::take(&mut *self.refused.borrow_mut())
    }

    fn apply_volume(&mut self) {
        for (id, element) in &self.elements {
            element.set_volume(db_to_gain(self.master_db + id.gain_db()));
        }
    }
}

impl AudioBackend for HtmlAudio {
    fn is_ready(&self, id: SoundId) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|e| e.ready_state() >= HtmlMediaElement::HAVE_ENOUGH_DATA)
    }

    fn is_playing(&self, id: SoundId) -> bool {
        self.elements.get(&id).is_some_and(|e| !e.paused())
    }

    fn start(&mut self, id: SoundId) {
        let Some(element) = self.elements.get(&id) else {
            return;
        };
        element.set_current_time(0.0);
        // Autoplay policy rejects this until the first user gesture
        match element.play() {
            Ok(promise) => {
                let refused = self.refused.clone();
                spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("Could not play {}: {:?}", id.file(), err);
                        refused.borrow_mut().push(id);
                    }
                });
            }
            Err(err) => {
                log::warn!("Could not play {}: {:?}", id.file(), err);
                self.refused.borrow_mut().push(id);
            }
        }
    }

    fn stop(&mut self, id: SoundId) {
        if let Some(element) = self.elements.get(&id) {
            if let Err(err) = element.pause() {
                log::warn!("Could not pause {}: {:?}", id.file(), err);
            }
            element.set_current_time(0.0);
        }
    }

    fn set_master_mute(&mut self, mute: bool) {
        for element in self.elements.values() {
            element.set_muted(mute);
        }
    }

    fn set_master_volume_db(&mut self, db: f32) {
        self.master_db = db;
        self.apply_volume();
    }

    fn set_playback_rate(&mut self, id: SoundId, rate: f32) {
        if let Some(element) = self.elements.get(&id) {
            element.set_playback_rate(f64::from(rate));
        }
    }
}
