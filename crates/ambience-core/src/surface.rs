use crate::color::Color;

/// How newly drawn pixels combine with what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    /// Additive blending, so overlapping shapes brighten.
    Lighter,
}

impl Composite {
    pub fn as_css(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

impl LineCap {
    pub fn as_css(self) -> &'static str {
        match self {
            LineCap::Round => "round",
        }
    }
}

/// The part of the Canvas 2D API the layers draw with.
///
/// Path calls build up a current path that `fill`/`stroke` consume, exactly
/// like a `CanvasRenderingContext2d`.
pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_composite(&mut self, mode: Composite);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);

    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Filled full circle as a fresh path.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f32::consts::TAU);
        self.fill();
    }
}
