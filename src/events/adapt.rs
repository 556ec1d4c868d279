use crate::camera::CameraProbe;
use crate::constants::ADAPT_BUTTON_ID;
use crate::ui;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared between the adapt button, the camera setup task and the frame loop.
#[derive(Clone, Default)]
pub struct AdaptState {
    pub enabled: Rc<Cell<bool>>,
    pub camera: Rc<RefCell<Option<CameraProbe>>>,
}

impl AdaptState {
    pub fn camera_ready(&self) -> bool {
        self.camera.borrow().is_some()
    }
}

/// The button only switches on once a camera is available; without one it
/// stays in its idle look and the layers keep their default palette.
pub fn wire_adapt_button(document: &web::Document, state: &AdaptState) -> Option<web::HtmlElement> {
    let button = document
        .get_element_by_id(ADAPT_BUTTON_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())?;
    let state = state.clone();
    let button_inner = button.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !state.camera_ready() {
            log::warn!("[camera] color adaptation unavailable: no camera");
            return;
        }
        let on = !state.enabled.get();
        state.enabled.set(on);
        ui::set_active(&button_inner, on);
        if !on {
            ui::reset_adapt_button(&button_inner);
        }
        log::info!("[camera] color adaptation {}", if on { "on" } else { "off" });
    }) as Box<dyn FnMut()>);
    _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    Some(button)
}
