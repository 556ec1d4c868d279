//! The per-frame scene: background fade, optional ambient sampling and the
//! enabled layers in a fixed order.

use crate::color::{rgb_to_hsl, AmbientColor, Color, Rgb};
use crate::constants::{
    FADE_ALPHA, FADE_DEFAULT_RGB, FIRE_POOL_SIZE, RAIN_POOL_SIZE, STAR_POOL_SIZE,
};
use crate::layers::{FireLayer, NightLayer, RainLayer, SceneContext, ThunderLayer, WavesLayer};
use crate::surface::Surface;
use crate::Viewport;
use rand::Rng;
use smallvec::SmallVec;

/// A visual channel. Declaration order is draw order: later channels are
/// composited over earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Rain,
    Fire,
    Thunder,
    Night,
    Waves,
}

impl Channel {
    pub const DRAW_ORDER: [Channel; 5] = [
        Channel::Rain,
        Channel::Fire,
        Channel::Thunder,
        Channel::Night,
        Channel::Waves,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Rain => "rain",
            Channel::Fire => "fire",
            Channel::Thunder => "thunder",
            Channel::Night => "night",
            Channel::Waves => "waves",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::DRAW_ORDER.into_iter().find(|c| c.name() == name)
    }
}

/// User-controlled on/off state, read once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleFlags {
    pub rain: bool,
    pub fire: bool,
    pub thunder: bool,
    pub night: bool,
    pub waves: bool,
    pub color_adapt: bool,
}

impl ToggleFlags {
    pub fn is_active(&self, channel: Channel) -> bool {
        match channel {
            Channel::Rain => self.rain,
            Channel::Fire => self.fire,
            Channel::Thunder => self.thunder,
            Channel::Night => self.night,
            Channel::Waves => self.waves,
        }
    }

    pub fn set(&mut self, channel: Channel, on: bool) {
        match channel {
            Channel::Rain => self.rain = on,
            Channel::Fire => self.fire = on,
            Channel::Thunder => self.thunder = on,
            Channel::Night => self.night = on,
            Channel::Waves => self.waves = on,
        }
    }
}

/// Which layers a page variant has, and whether a camera is wired in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub rain: bool,
    pub fire: bool,
    pub thunder: bool,
    pub night: bool,
    pub waves: bool,
    pub color_adapt: bool,
}

impl Capabilities {
    pub const fn all() -> Self {
        Self {
            rain: true,
            fire: true,
            thunder: true,
            night: true,
            waves: true,
            color_adapt: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            rain: false,
            fire: false,
            thunder: false,
            night: false,
            waves: false,
            color_adapt: false,
        }
    }

    pub fn has(&self, channel: Channel) -> bool {
        match channel {
            Channel::Rain => self.rain,
            Channel::Fire => self.fire,
            Channel::Thunder => self.thunder,
            Channel::Night => self.night,
            Channel::Waves => self.waves,
        }
    }

    pub fn with(mut self, channel: Channel) -> Self {
        match channel {
            Channel::Rain => self.rain = true,
            Channel::Fire => self.fire = true,
            Channel::Thunder => self.thunder = true,
            Channel::Night => self.night = true,
            Channel::Waves => self.waves = true,
        }
        self
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub capabilities: Capabilities,
    pub fire_particles: usize,
    pub rain_particles: usize,
    pub star_particles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::all(),
            fire_particles: FIRE_POOL_SIZE,
            rain_particles: RAIN_POOL_SIZE,
            star_particles: STAR_POOL_SIZE,
        }
    }
}

/// Source of the average room color, typically a camera.
pub trait ColorProbe {
    /// `None` when no frame is available right now.
    fn sample(&mut self) -> Option<Rgb>;
}

/// Probe for pages without a camera.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCamera;

impl ColorProbe for NoCamera {
    fn sample(&mut self) -> Option<Rgb> {
        None
    }
}

/// A probe that may not exist yet, e.g. while camera permission is pending.
impl<P: ColorProbe> ColorProbe for Option<P> {
    fn sample(&mut self) -> Option<Rgb> {
        self.as_mut().and_then(|p| p.sample())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Ambient color the layers were tinted with, if adapting.
    pub ambient: Option<AmbientColor>,
    /// Whether the probe produced a sample this frame.
    pub sampled: bool,
    pub layers_drawn: usize,
}

pub struct Scene<R> {
    capabilities: Capabilities,
    rain: Option<RainLayer>,
    fire: Option<FireLayer>,
    thunder: Option<ThunderLayer>,
    night: Option<NightLayer>,
    waves: Option<WavesLayer>,
    ambient: AmbientColor,
    rng: R,
    frames: u64,
}

impl<R: Rng> Scene<R> {
    /// Builds only the layers the capabilities name; pools are filled here
    /// and never resized.
    pub fn new(config: &EngineConfig, viewport: Viewport, mut rng: R) -> Self {
        let caps = config.capabilities;
        let rain = caps
            .rain
            .then(|| RainLayer::new(config.rain_particles, viewport, &mut rng));
        let fire = caps
            .fire
            .then(|| FireLayer::new(config.fire_particles, viewport, &mut rng));
        let night = caps
            .night
            .then(|| NightLayer::new(config.star_particles, viewport, &mut rng));
        log::info!(
            "[scene] layers rain={} fire={} thunder={} night={} waves={} color_adapt={}",
            caps.rain,
            caps.fire,
            caps.thunder,
            caps.night,
            caps.waves,
            caps.color_adapt
        );
        Self {
            capabilities: caps,
            rain,
            fire,
            thunder: caps.thunder.then(ThunderLayer::new),
            night,
            waves: caps.waves.then(WavesLayer::new),
            ambient: AmbientColor::default(),
            rng,
            frames: 0,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn ambient(&self) -> AmbientColor {
        self.ambient
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rain(&self) -> Option<&RainLayer> {
        self.rain.as_ref()
    }

    pub fn fire(&self) -> Option<&FireLayer> {
        self.fire.as_ref()
    }

    pub fn thunder(&self) -> Option<&ThunderLayer> {
        self.thunder.as_ref()
    }

    pub fn night(&self) -> Option<&NightLayer> {
        self.night.as_ref()
    }

    pub fn waves(&self) -> Option<&WavesLayer> {
        self.waves.as_ref()
    }

    pub fn is_adapting(&self, flags: &ToggleFlags) -> bool {
        self.capabilities.color_adapt && flags.color_adapt
    }

    /// Channels that will be drawn this frame, in draw order.
    pub fn active_layers(&self, flags: &ToggleFlags) -> SmallVec<[Channel; 5]> {
        Channel::DRAW_ORDER
            .into_iter()
            .filter(|c| self.capabilities.has(*c) && flags.is_active(*c))
            .collect()
    }

    pub fn background(&self, adapting: bool) -> Color {
        if adapting {
            Color::hsla(self.ambient.h, 30.0, 5.0, FADE_ALPHA)
        } else {
            Color::rgba(FADE_DEFAULT_RGB, FADE_ALPHA)
        }
    }

    /// Runs one animation cycle against `surface`.
    pub fn frame<S, P>(
        &mut self,
        surface: &mut S,
        probe: &mut P,
        viewport: Viewport,
        flags: &ToggleFlags,
    ) -> FrameReport
    where
        S: Surface + ?Sized,
        P: ColorProbe + ?Sized,
    {
        self.frames += 1;
        let adapting = self.is_adapting(flags);
        let mut sampled = false;
        if adapting {
            if let Some(rgb) = probe.sample() {
                self.ambient.approach(rgb_to_hsl(rgb.r, rgb.g, rgb.b));
                sampled = true;
            }
        }

        surface.set_fill(self.background(adapting));
        surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);

        let ctx = SceneContext {
            viewport,
            ambient: adapting.then_some(self.ambient),
        };
        let active = self.active_layers(flags);
        for channel in &active {
            self.draw_channel(*channel, surface, &ctx);
        }
        FrameReport {
            ambient: ctx.ambient,
            sampled,
            layers_drawn: active.len(),
        }
    }

    fn draw_channel<S>(&mut self, channel: Channel, surface: &mut S, ctx: &SceneContext)
    where
        S: Surface + ?Sized,
    {
        let rng = &mut self.rng;
        match channel {
            Channel::Rain => {
                if let Some(layer) = self.rain.as_mut() {
                    layer.draw(surface, ctx, rng);
                }
            }
            Channel::Fire => {
                if let Some(layer) = self.fire.as_mut() {
                    layer.draw(surface, ctx, rng);
                }
            }
            Channel::Thunder => {
                if let Some(layer) = self.thunder.as_mut() {
                    layer.draw(surface, ctx, rng);
                }
            }
            Channel::Night => {
                if let Some(layer) = self.night.as_mut() {
                    layer.draw(surface, ctx, rng);
                }
            }
            Channel::Waves => {
                if let Some(layer) = self.waves.as_mut() {
                    layer.draw(surface, ctx);
                }
            }
        }
    }
}
