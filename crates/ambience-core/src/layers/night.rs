use super::SceneContext;
use crate::color::Color;
use crate::constants::STAR_DEFAULT_RGB;
use crate::particles::{ParticlePool, StarParticle};
use crate::surface::Surface;
use crate::Viewport;
use rand::Rng;

/// Twinkling starfield.
pub struct NightLayer {
    pub stars: ParticlePool<StarParticle>,
}

impl NightLayer {
    pub fn new<R: Rng + ?Sized>(size: usize, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            stars: ParticlePool::new(size, viewport, rng),
        }
    }

    pub fn star_color(star: &StarParticle, ctx: &SceneContext) -> Color {
        match ctx.ambient {
            Some(a) => Color::hsla(a.h, 50.0, 90.0, star.opacity),
            None => Color::rgba(STAR_DEFAULT_RGB, star.opacity),
        }
    }

    pub fn draw<S, R>(&mut self, surface: &mut S, ctx: &SceneContext, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        for star in self.stars.iter_mut() {
            surface.set_fill(Self::star_color(star, ctx));
            surface.fill_circle(star.pos.x, star.pos.y, star.radius);
            star.step(ctx.viewport, rng);
        }
    }
}
