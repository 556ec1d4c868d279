#![cfg(target_arch = "wasm32")]
use ambience_core::{Capabilities, Channel, EngineConfig, Mixer, Scene};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod surface;
mod ui;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Page variants differ in which sound cards exist and whether a camera
/// feed is present; build only what the page has.
fn discover_capabilities(document: &web::Document) -> Capabilities {
    let mut caps = Capabilities::none();
    for channel in Channel::DRAW_ORDER {
        let selector = format!("[data-sound=\"{}\"]", channel.name());
        if matches!(document.query_selector(&selector), Ok(Some(_))) {
            caps = caps.with(channel);
        }
    }
    caps.color_adapt = document.get_element_by_id(VIDEO_ID).is_some()
        && document.get_element_by_id(ADAPT_BUTTON_ID).is_some();
    caps
}

fn spawn_camera_setup(document: web::Document, adapt: events::AdaptState) {
    let video: web::HtmlVideoElement = match dom::element_by_id(&document, VIDEO_ID) {
        Ok(v) => v,
        Err(e) => {
            log::error!("[camera] {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        match camera::setup_camera(&document, video).await {
            Ok(probe) => {
                *adapt.camera.borrow_mut() = Some(probe);
            }
            Err(e) => {
                log::error!("[camera] unavailable, keeping default palette: {:?}", e);
            }
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambience starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Canvas tracks the window size; every frame re-reads it
    wire_canvas_resize(&canvas);
    let surface = surface::CanvasSurface::new(canvas, ctx);

    let config = EngineConfig {
        capabilities: discover_capabilities(&document),
        ..EngineConfig::default()
    };
    let scene = Scene::new(&config, surface.viewport(), StdRng::from_entropy());

    // Audio and controls
    let controls = events::ControlWiring {
        document: document.clone(),
        mixer: Rc::new(RefCell::new(Mixer::default())),
        deck: Rc::new(audio::SoundDeck::new()),
    };
    events::wire_sound_controls(&controls);
    events::wire_transport(&controls);
    match dom::element_by_id::<web::HtmlInputElement>(&document, MASTER_VOLUME_ID) {
        Ok(slider) => events::wire_master_volume(&controls, &slider),
        Err(e) => log::warn!("[ui] {:?}", e),
    }
    ui::update_transport(&document, controls.mixer.borrow().is_playing());

    // Camera permission is awaited off the render path
    let adapt = events::AdaptState::default();
    let adapt_button = if config.capabilities.color_adapt {
        spawn_camera_setup(document.clone(), adapt.clone());
        events::wire_adapt_button(&document, &adapt)
    } else {
        None
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        surface,
        mixer: controls.mixer.clone(),
        adapt,
        adapt_button,
        last_instant: Instant::now(),
        fps_frames: 0,
        fps_elapsed: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
