pub mod color;
pub mod constants;
pub mod engine;
pub mod layers;
pub mod mixer;
pub mod particles;
pub mod surface;

pub use color::*;
pub use engine::*;
pub use mixer::*;
pub use surface::*;

/// Drawable area in pixels. Re-read from the canvas every frame so resizes
/// apply immediately.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
