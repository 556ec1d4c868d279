use super::SceneContext;
use crate::color::Color;
use crate::constants::{RAIN_ALPHA, RAIN_DEFAULT_RGB, RAIN_LINE_WIDTH};
use crate::particles::{ParticlePool, RainParticle};
use crate::surface::{LineCap, Surface};
use crate::Viewport;
use rand::Rng;

pub struct RainLayer {
    pub drops: ParticlePool<RainParticle>,
}

impl RainLayer {
    pub fn new<R: Rng + ?Sized>(size: usize, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            drops: ParticlePool::new(size, viewport, rng),
        }
    }

    pub fn stroke_color(ctx: &SceneContext) -> Color {
        match ctx.ambient {
            Some(a) => Color::hsla(a.h, a.s * 100.0, a.l * 100.0, RAIN_ALPHA),
            None => Color::rgba(RAIN_DEFAULT_RGB, RAIN_ALPHA),
        }
    }

    pub fn draw<S, R>(&mut self, surface: &mut S, ctx: &SceneContext, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.set_stroke(Self::stroke_color(ctx));
        surface.set_line_width(RAIN_LINE_WIDTH);
        surface.set_line_cap(LineCap::Round);
        for drop in self.drops.iter_mut() {
            surface.begin_path();
            surface.move_to(drop.pos.x, drop.pos.y);
            surface.line_to(drop.pos.x, drop.pos.y + drop.length);
            surface.stroke();
            drop.step(ctx.viewport, rng);
        }
    }
}
