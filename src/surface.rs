use ambience_core::{Color, Composite, LineCap, Surface, Viewport};
use std::fmt::Write;
use web_sys as web;

/// `Surface` over a 2D canvas context. Colors are formatted into one reused
/// buffer so steady-state frames do not allocate.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    css: String,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            css: String::with_capacity(48),
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

fn format_css(buf: &mut String, color: Color) -> &str {
    buf.clear();
    _ = write!(buf, "{}", color);
    buf
}

impl Surface for CanvasSurface {
    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(format_css(&mut self.css, color));
    }

    fn set_stroke(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(format_css(&mut self.css, color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_css());
    }

    fn set_composite(&mut self, mode: Composite) {
        _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, start as f64, end as f64);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
