use super::SceneContext;
use crate::color::Color;
use crate::constants::FIRE_BASE_HUE;
use crate::particles::{FireParticle, ParticlePool};
use crate::surface::{Composite, Surface};
use crate::Viewport;
use rand::Rng;

pub struct FireLayer {
    pub embers: ParticlePool<FireParticle>,
}

impl FireLayer {
    pub fn new<R: Rng + ?Sized>(size: usize, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            embers: ParticlePool::new(size, viewport, rng),
        }
    }

    pub fn ember_color(ember: &FireParticle, ctx: &SceneContext) -> Color {
        let base = ctx.ambient.map(|a| a.h).unwrap_or(FIRE_BASE_HUE);
        Color::hsla(base + ember.hue_offset, 100.0, 50.0, ember.opacity)
    }

    /// Draws with additive blending and leaves the surface in `SourceOver`.
    /// Returns how many embers were respawned this frame.
    pub fn draw<S, R>(&mut self, surface: &mut S, ctx: &SceneContext, rng: &mut R) -> usize
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let mut respawned = 0;
        surface.set_composite(Composite::Lighter);
        for ember in self.embers.iter_mut() {
            surface.set_fill(Self::ember_color(ember, ctx));
            surface.fill_circle(ember.pos.x, ember.pos.y, ember.radius);
            if ember.step(ctx.viewport, rng) {
                respawned += 1;
            }
        }
        surface.set_composite(Composite::SourceOver);
        respawned
    }
}
