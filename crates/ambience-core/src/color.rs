//! Color types shared by the layers, plus the camera color pipeline:
//! pixel averaging, RGB to HSL conversion and ambient smoothing.

use crate::constants::{
    AMBIENT_INITIAL_HSL, AMBIENT_LIGHTNESS_TARGET, AMBIENT_SATURATION_FLOOR, AMBIENT_SMOOTHING,
};
use std::fmt;
use thiserror::Error;

/// 8-bit RGB triple, as produced by averaging a camera frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("pixel buffer is empty")]
    Empty,
    #[error("pixel buffer length {0} is not a multiple of 4")]
    Misaligned(usize),
}

/// Mean of each channel over an RGBA buffer, floored. Alpha is ignored.
pub fn average_rgba(pixels: &[u8]) -> Result<Rgb, SampleError> {
    if pixels.is_empty() {
        return Err(SampleError::Empty);
    }
    if pixels.len() % 4 != 0 {
        return Err(SampleError::Misaligned(pixels.len()));
    }
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for px in pixels.chunks_exact(4) {
        r += px[0] as u64;
        g += px[1] as u64;
        b += px[2] as u64;
    }
    let count = (pixels.len() / 4) as u64;
    Ok(Rgb::new(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
    ))
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    Hsl {
        h: sector / 6.0 * 360.0,
        s,
        l,
    }
}

/// Slowly smoothed color derived from the camera feed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientColor {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Default for AmbientColor {
    fn default() -> Self {
        let [h, s, l] = AMBIENT_INITIAL_HSL;
        Self { h, s, l }
    }
}

impl AmbientColor {
    /// First-order smoothing toward a freshly sampled color.
    ///
    /// Hue follows the sample directly (no wraparound at 360). Saturation is
    /// pulled toward the sample but never below the floor, and lightness
    /// always heads for a fixed target so dark rooms still give vivid visuals.
    pub fn approach(&mut self, target: Hsl) {
        self.h += (target.h - self.h) * AMBIENT_SMOOTHING;
        self.s += (target.s.max(AMBIENT_SATURATION_FLOOR) - self.s) * AMBIENT_SMOOTHING;
        self.l += (AMBIENT_LIGHTNESS_TARGET - self.l) * AMBIENT_SMOOTHING;
    }
}

/// CSS color value. Percentages for `Hsla` are in 0..=100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba([u8; 3], f32),
    Hsla {
        h: f32,
        s: f32,
        l: f32,
        a: f32,
    },
}

impl Color {
    pub const fn rgba(rgb: [u8; 3], a: f32) -> Self {
        Color::Rgba(rgb, a)
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba([r, g, b], a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}
