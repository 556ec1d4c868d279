use super::SceneContext;
use crate::color::Color;
use crate::constants::{
    WAVE_ADAPT_LIGHTNESS, WAVE_ALPHAS, WAVE_AMPLITUDES, WAVE_BASELINES, WAVE_DEFAULT_RGB,
    WAVE_FREQUENCIES, WAVE_PHASE_STEP,
};
use crate::surface::Surface;
use crate::Viewport;

/// Three filled sine bands along the bottom of the viewport sharing one phase.
#[derive(Clone, Debug, Default)]
pub struct WavesLayer {
    pub phase: f32,
}

impl WavesLayer {
    pub const BANDS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn band_color(band: usize, ctx: &SceneContext) -> Color {
        match ctx.ambient {
            Some(a) => Color::hsla(a.h, 60.0, WAVE_ADAPT_LIGHTNESS[band], WAVE_ALPHAS[band]),
            None => Color::rgba(WAVE_DEFAULT_RGB[band], WAVE_ALPHAS[band]),
        }
    }

    /// Crest height of `band` at column `x` for the current phase.
    pub fn crest_y(&self, band: usize, x: f32, height: f32) -> f32 {
        let base = height * WAVE_BASELINES[band];
        base + (x * WAVE_FREQUENCIES[band] + self.phase + band as f32 * 2.0).sin()
            * WAVE_AMPLITUDES[band]
    }

    pub fn draw<S>(&mut self, surface: &mut S, ctx: &SceneContext)
    where
        S: Surface + ?Sized,
    {
        let Viewport { width, height } = ctx.viewport;
        for band in 0..Self::BANDS {
            surface.set_fill(Self::band_color(band, ctx));
            surface.begin_path();
            surface.move_to(0.0, height);
            // left edge: phase + band, unlike the columns' phase + 2 * band
            let start = height * WAVE_BASELINES[band]
                + (self.phase + band as f32).sin() * WAVE_AMPLITUDES[band];
            surface.line_to(0.0, start);
            let columns = width.max(0.0) as u32;
            for x in 1..columns {
                surface.line_to(x as f32, self.crest_y(band, x as f32, height));
            }
            surface.line_to(width, height);
            surface.close_path();
            surface.fill();
        }
        self.phase += WAVE_PHASE_STEP;
    }
}
