//! Looping-sound state: which sounds are on, their volumes, and the global
//! play/pause switch. Playback itself happens in the browser; this only
//! decides what should be playing and how loud.

use crate::constants::{DEFAULT_MASTER_VOLUME, DEFAULT_SOUND_VOLUME, VOLUME_MAX};
use crate::engine::{Channel, ToggleFlags};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Rain,
    Wind,
    Thunder,
    Waves,
    Birds,
    Forest,
    Fire,
    Cafe,
    Fan,
    Night,
}

impl Sound {
    pub const ALL: [Sound; 10] = [
        Sound::Rain,
        Sound::Wind,
        Sound::Thunder,
        Sound::Waves,
        Sound::Birds,
        Sound::Forest,
        Sound::Fire,
        Sound::Cafe,
        Sound::Fan,
        Sound::Night,
    ];

    /// Name used in `data-sound` attributes.
    pub fn name(self) -> &'static str {
        match self {
            Sound::Rain => "rain",
            Sound::Wind => "wind",
            Sound::Thunder => "thunder",
            Sound::Waves => "waves",
            Sound::Birds => "birds",
            Sound::Forest => "forest",
            Sound::Fire => "fire",
            Sound::Cafe => "cafe",
            Sound::Fan => "fan",
            Sound::Night => "night",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// The visual channel driven by this sound, if it has one.
    pub fn channel(self) -> Option<Channel> {
        match self {
            Sound::Rain => Some(Channel::Rain),
            Sound::Thunder => Some(Channel::Thunder),
            Sound::Waves => Some(Channel::Waves),
            Sound::Fire => Some(Channel::Fire),
            Sound::Night => Some(Channel::Night),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundState {
    pub active: bool,
    /// Individual volume, 0..=100.
    pub volume: u8,
}

impl Default for SoundState {
    fn default() -> Self {
        Self {
            active: false,
            volume: DEFAULT_SOUND_VOLUME,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The sound was switched on and should start playing.
    Started,
    /// The sound was switched off and should be paused.
    Stopped,
}

#[derive(Clone, Debug)]
pub struct Mixer {
    sounds: FnvHashMap<Sound, SoundState>,
    master: u8,
    playing: bool,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new(DEFAULT_MASTER_VOLUME)
    }
}

impl Mixer {
    pub fn new(master: u8) -> Self {
        let sounds = Sound::ALL
            .into_iter()
            .map(|s| (s, SoundState::default()))
            .collect();
        Self {
            sounds,
            master: master.min(VOLUME_MAX),
            playing: false,
        }
    }

    pub fn state(&self, sound: Sound) -> SoundState {
        self.sounds.get(&sound).copied().unwrap_or_default()
    }

    pub fn is_active(&self, sound: Sound) -> bool {
        self.state(sound).active
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn master(&self) -> u8 {
        self.master
    }

    pub fn has_active(&self) -> bool {
        self.sounds.values().any(|s| s.active)
    }

    /// Active sounds in declaration order.
    pub fn active_sounds(&self) -> impl Iterator<Item = Sound> + '_ {
        Sound::ALL.into_iter().filter(|s| self.is_active(*s))
    }

    /// master × individual, both as fractions.
    pub fn effective_volume(&self, sound: Sound) -> f64 {
        let individual = self.state(sound).volume as f64 / VOLUME_MAX as f64;
        self.master as f64 / VOLUME_MAX as f64 * individual
    }

    /// Flips a sound. Switching one on also turns global playback on.
    pub fn toggle(&mut self, sound: Sound) -> Transition {
        let state = self.sounds.entry(sound).or_default();
        state.active = !state.active;
        if state.active {
            self.playing = true;
            log::info!("[audio] {} on", sound.name());
            Transition::Started
        } else {
            log::info!("[audio] {} off", sound.name());
            Transition::Stopped
        }
    }

    /// Sets an individual volume; returns the new effective volume when the
    /// sound is active and its element needs updating.
    pub fn set_volume(&mut self, sound: Sound, volume: u8) -> Option<f64> {
        let state = self.sounds.entry(sound).or_default();
        state.volume = volume.min(VOLUME_MAX);
        let active = state.active;
        active.then(|| self.effective_volume(sound))
    }

    pub fn set_master(&mut self, master: u8) {
        self.master = master.min(VOLUME_MAX);
    }

    pub fn play_all(&mut self) {
        self.playing = true;
    }

    pub fn pause_all(&mut self) {
        self.playing = false;
    }

    /// Visual toggles mirror the sounds that drive a channel.
    pub fn toggle_flags(&self, color_adapt: bool) -> ToggleFlags {
        let mut flags = ToggleFlags {
            color_adapt,
            ..ToggleFlags::default()
        };
        for sound in self.active_sounds() {
            if let Some(channel) = sound.channel() {
                flags.set(channel, true);
            }
        }
        flags
    }
}
