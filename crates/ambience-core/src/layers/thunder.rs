use super::SceneContext;
use crate::color::Color;
use crate::constants::{LIGHTNING_CHANCE, LIGHTNING_DECAY, LIGHTNING_DEFAULT_RGB};
use crate::surface::Surface;
use rand::Rng;

/// Full-screen flash with a linear fade.
#[derive(Clone, Debug, Default)]
pub struct ThunderLayer {
    pub opacity: f32,
}

impl ThunderLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flashing(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn trigger(&mut self) {
        self.opacity = 1.0;
    }

    /// One decay step of an active flash.
    pub fn decay(&mut self) {
        self.opacity -= LIGHTNING_DECAY;
    }

    pub fn flash_color(&self, ctx: &SceneContext) -> Color {
        match ctx.ambient {
            Some(a) => Color::hsla(a.h, 100.0, 90.0, self.opacity),
            None => Color::rgba(LIGHTNING_DEFAULT_RGB, self.opacity),
        }
    }

    pub fn draw<S, R>(&mut self, surface: &mut S, ctx: &SceneContext, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.is_flashing() && rng.gen_bool(LIGHTNING_CHANCE) {
            self.trigger();
            log::debug!("[scene] lightning");
        }
        if self.is_flashing() {
            surface.set_fill(self.flash_color(ctx));
            surface.fill_rect(0.0, 0.0, ctx.viewport.width, ctx.viewport.height);
            self.decay();
        }
    }
}
