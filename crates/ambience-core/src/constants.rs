// Tuning constants for the particle layers and the ambient color pipeline.

// Pool sizes
pub const FIRE_POOL_SIZE: usize = 150;
pub const RAIN_POOL_SIZE: usize = 100;
pub const STAR_POOL_SIZE: usize = 150;

// Fire particles
pub const FIRE_SPAWN_BAND: f32 = 20.0; // spawn this far above the bottom edge at most
pub const FIRE_RADIUS_MIN: f32 = 2.0;
pub const FIRE_RADIUS_MAX: f32 = 7.0;
pub const FIRE_RISE_MIN: f32 = 1.0; // px/frame upward
pub const FIRE_RISE_MAX: f32 = 3.0;
pub const FIRE_DRIFT_MAX: f32 = 1.0; // |px/frame| horizontal
pub const FIRE_HUE_SPREAD: f32 = 15.0; // degrees either side of the base hue
pub const FIRE_OPACITY_MIN: f32 = 0.5;
pub const FIRE_OPACITY_MAX: f32 = 1.0;
pub const FIRE_OPACITY_DECAY: f32 = 0.015;
pub const FIRE_JITTER_CHANCE: f64 = 0.5;
pub const FIRE_JITTER_MAX: f32 = 1.0;
pub const FIRE_BASE_HUE: f32 = 25.0;

// Rain particles
pub const RAIN_LENGTH_MIN: f32 = 10.0;
pub const RAIN_LENGTH_MAX: f32 = 25.0;
pub const RAIN_SPEED_MIN: f32 = 2.0;
pub const RAIN_SPEED_MAX: f32 = 7.0;
pub const RAIN_LINE_WIDTH: f32 = 1.0;
pub const RAIN_ALPHA: f32 = 0.5;

// Star particles
pub const STAR_RADIUS_MIN: f32 = 0.5;
pub const STAR_RADIUS_MAX: f32 = 2.5;
pub const STAR_OPACITY_MAX_INITIAL: f32 = 0.5;
pub const STAR_FADE_MIN: f32 = 0.005;
pub const STAR_FADE_MAX: f32 = 0.015;

// Thunder
pub const LIGHTNING_CHANCE: f64 = 0.005; // per resting frame
pub const LIGHTNING_DECAY: f32 = 0.04; // opacity per frame, 25 frames per flash

// Waves
pub const WAVE_PHASE_STEP: f32 = 0.02;
pub const WAVE_FREQUENCIES: [f32; 3] = [0.01, 0.015, 0.008];
pub const WAVE_AMPLITUDES: [f32; 3] = [30.0, 25.0, 35.0];
pub const WAVE_BASELINES: [f32; 3] = [0.80, 0.82, 0.84]; // fraction of viewport height
pub const WAVE_ALPHAS: [f32; 3] = [0.4, 0.3, 0.2];
pub const WAVE_ADAPT_LIGHTNESS: [f32; 3] = [50.0, 45.0, 40.0];
pub const WAVE_DEFAULT_RGB: [[u8; 3]; 3] = [[50, 100, 200], [40, 120, 220], [30, 140, 240]];

// Background fade drawn before the layers every frame
pub const FADE_ALPHA: f32 = 0.25;
pub const FADE_DEFAULT_RGB: [u8; 3] = [25, 24, 24];

// Default palette for the other layers
pub const RAIN_DEFAULT_RGB: [u8; 3] = [174, 194, 224];
pub const LIGHTNING_DEFAULT_RGB: [u8; 3] = [200, 220, 255];
pub const STAR_DEFAULT_RGB: [u8; 3] = [255, 255, 255];

// Ambient color sampling
pub const SENSOR_SIZE: u32 = 64; // camera frames are downsampled to SENSOR_SIZE^2
pub const AMBIENT_SMOOTHING: f32 = 0.05; // fraction of the gap closed per sample
pub const AMBIENT_SATURATION_FLOOR: f32 = 0.6;
pub const AMBIENT_LIGHTNESS_TARGET: f32 = 0.6;
pub const AMBIENT_INITIAL_HSL: [f32; 3] = [220.0, 0.5, 0.6];

// Mixer
pub const VOLUME_MAX: u8 = 100;
pub const DEFAULT_SOUND_VOLUME: u8 = 50;
pub const DEFAULT_MASTER_VOLUME: u8 = 50;
