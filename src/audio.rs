use crate::constants::sound_file;
use ambience_core::{Mixer, Sound};
use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One looping `<audio>` element per sound. Volumes and play state are
/// pushed here from the `Mixer`.
pub struct SoundDeck {
    players: FnvHashMap<Sound, web::HtmlAudioElement>,
}

fn create_player(sound: Sound, src: &str) -> Option<web::HtmlAudioElement> {
    match web::HtmlAudioElement::new_with_src(src) {
        Ok(el) => {
            el.set_loop(true);
            el.set_volume(0.0);
            let on_error = Closure::wrap(Box::new(move || {
                log::error!("[audio] error loading {}", sound.name());
            }) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
            on_error.forget();
            Some(el)
        }
        Err(e) => {
            log::error!("[audio] {} element error: {:?}", sound.name(), e);
            None
        }
    }
}

impl SoundDeck {
    pub fn new() -> Self {
        let mut players = FnvHashMap::default();
        for sound in Sound::ALL {
            let Some(src) = sound_file(sound.name()) else {
                log::warn!("[audio] no asset for {}", sound.name());
                continue;
            };
            if let Some(el) = create_player(sound, src) {
                players.insert(sound, el);
            }
        }
        log::info!("[audio] {} players ready", players.len());
        Self { players }
    }

    pub fn start(&self, sound: Sound, volume: f64) {
        if let Some(el) = self.players.get(&sound) {
            el.set_volume(volume);
            play(sound, el);
        }
    }

    pub fn stop(&self, sound: Sound) {
        if let Some(el) = self.players.get(&sound) {
            _ = el.pause();
        }
    }

    pub fn set_volume(&self, sound: Sound, volume: f64) {
        if let Some(el) = self.players.get(&sound) {
            el.set_volume(volume);
        }
    }

    /// Re-applies effective volumes to every active sound.
    pub fn sync_volumes(&self, mixer: &Mixer) {
        for sound in mixer.active_sounds() {
            self.set_volume(sound, mixer.effective_volume(sound));
        }
    }

    pub fn play_active(&self, mixer: &Mixer) {
        for sound in mixer.active_sounds() {
            self.start(sound, mixer.effective_volume(sound));
        }
    }

    pub fn pause_all(&self) {
        for el in self.players.values() {
            _ = el.pause();
        }
    }
}

// play() returns a promise that rejects e.g. before any user gesture
fn play(sound: Sound, el: &web::HtmlAudioElement) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] could not play {}: {:?}", sound.name(), e);
            }
        }),
        Err(e) => log::warn!("[audio] could not play {}: {:?}", sound.name(), e),
    }
}
