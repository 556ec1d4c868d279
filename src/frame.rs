use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::events::AdaptState;
use crate::surface::CanvasSurface;
use crate::ui;
use ambience_core::{Mixer, Scene};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene<StdRng>,
    pub surface: CanvasSurface,
    pub mixer: Rc<RefCell<Mixer>>,
    pub adapt: AdaptState,
    pub adapt_button: Option<web::HtmlElement>,

    pub last_instant: Instant,
    pub fps_frames: u32,
    pub fps_elapsed: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let flags = self.mixer.borrow().toggle_flags(self.adapt.enabled.get());
        let viewport = self.surface.viewport();
        let report = {
            let mut camera = self.adapt.camera.borrow_mut();
            self.scene
                .frame(&mut self.surface, &mut *camera, viewport, &flags)
        };

        if let (Some(ambient), Some(button)) = (report.ambient, &self.adapt_button) {
            ui::paint_adapt_button(button, &ambient);
        }

        self.fps_frames += 1;
        self.fps_elapsed += dt_sec;
        if self.fps_elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[scene] {:.1} fps, {} layers, viewport {}x{}",
                self.fps_frames as f32 / self.fps_elapsed,
                report.layers_drawn,
                viewport.width,
                viewport.height
            );
            self.fps_frames = 0;
            self.fps_elapsed = 0.0;
        }
    }
}

/// Runs `frame` on every animation frame, forever.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
