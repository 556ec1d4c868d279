//! Particle records and their randomized spawn states.
//!
//! Every particle type lives in a fixed-size [`ParticlePool`] that is filled
//! once and recycled in place through [`Particle::reset`], so the render loop
//! never allocates.

use crate::constants::*;
use crate::Viewport;
use glam::Vec2;
use rand::Rng;

pub trait Particle: Sized {
    /// Fresh randomized state confined to the viewport.
    fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self;

    fn reset<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        *self = Self::spawn(viewport, rng);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FireParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub rise: f32,
    pub drift: f32,
    pub hue_offset: f32,
    pub opacity: f32,
    /// Frames since the last spawn.
    pub age: u32,
}

impl Particle for FireParticle {
    fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                viewport.height - rng.gen::<f32>() * FIRE_SPAWN_BAND,
            ),
            radius: rng.gen_range(FIRE_RADIUS_MIN..FIRE_RADIUS_MAX),
            rise: rng.gen_range(FIRE_RISE_MIN..FIRE_RISE_MAX),
            drift: rng.gen_range(-FIRE_DRIFT_MAX..FIRE_DRIFT_MAX),
            hue_offset: rng.gen_range(-FIRE_HUE_SPREAD..FIRE_HUE_SPREAD),
            opacity: rng.gen_range(FIRE_OPACITY_MIN..=FIRE_OPACITY_MAX),
            age: 0,
        }
    }
}

impl FireParticle {
    /// One simulation step. Returns true when the particle burnt out or left
    /// the top of the viewport and was respawned.
    pub fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        self.pos.y -= self.rise;
        self.pos.x += self.drift;
        self.opacity -= FIRE_OPACITY_DECAY;
        self.age += 1;
        if rng.gen_bool(FIRE_JITTER_CHANCE) {
            self.pos.x += rng.gen_range(-FIRE_JITTER_MAX..FIRE_JITTER_MAX);
        }
        if self.opacity <= 0.0 || self.pos.y <= 0.0 {
            self.reset(viewport, rng);
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RainParticle {
    pub pos: Vec2,
    pub length: f32,
    pub speed: f32,
}

impl Particle for RainParticle {
    fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            length: rng.gen_range(RAIN_LENGTH_MIN..RAIN_LENGTH_MAX),
            speed: rng.gen_range(RAIN_SPEED_MIN..RAIN_SPEED_MAX),
        }
    }
}

impl RainParticle {
    /// Falls by `speed`; past the bottom edge the streak wraps to just above
    /// the top at a new column. Returns true on wrap.
    pub fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        self.pos.y += self.speed;
        if self.pos.y > viewport.height {
            self.pos.y = -self.length;
            self.pos.x = rng.gen::<f32>() * viewport.width;
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub fade_speed: f32,
    pub fading_in: bool,
}

impl Particle for StarParticle {
    fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            radius: rng.gen_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX),
            opacity: rng.gen_range(0.0..STAR_OPACITY_MAX_INITIAL),
            fade_speed: rng.gen_range(STAR_FADE_MIN..STAR_FADE_MAX),
            fading_in: true,
        }
    }
}

impl StarParticle {
    /// Advances the twinkle cycle. A star that fades out completely moves to
    /// a new random spot and starts fading in again (returns true).
    pub fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        if self.fading_in {
            self.opacity += self.fade_speed;
            if self.opacity >= 1.0 {
                self.opacity = 1.0;
                self.fading_in = false;
            }
            return false;
        }
        self.opacity -= self.fade_speed;
        if self.opacity <= 0.0 {
            self.pos = Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            );
            self.opacity = 0.0;
            self.fading_in = true;
            return true;
        }
        false
    }
}

/// Fixed-capacity pool, filled once at construction.
#[derive(Clone, Debug)]
pub struct ParticlePool<T> {
    items: Vec<T>,
}

impl<T: Particle> ParticlePool<T> {
    pub fn new<R: Rng + ?Sized>(size: usize, viewport: Viewport, rng: &mut R) -> Self {
        let items = (0..size).map(|_| T::spawn(viewport, rng)).collect();
        Self { items }
    }
}

impl<T> ParticlePool<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}
