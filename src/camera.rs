use crate::constants::{CAMERA_HEIGHT, CAMERA_WIDTH};
use ambience_core::constants::SENSOR_SIZE;
use ambience_core::{average_rgba, ColorProbe, Rgb};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

/// Samples the average color of a live camera feed through a tiny offscreen
/// canvas.
pub struct CameraProbe {
    video: web::HtmlVideoElement,
    sensor: web::CanvasRenderingContext2d,
}

impl ColorProbe for CameraProbe {
    fn sample(&mut self) -> Option<Rgb> {
        if self.video.ready_state() < HAVE_CURRENT_DATA {
            return None;
        }
        let side = SENSOR_SIZE as f64;
        if let Err(e) = self
            .sensor
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, side, side)
        {
            log::debug!("[camera] drawImage failed: {:?}", e);
            return None;
        }
        let image = match self.sensor.get_image_data(0.0, 0.0, side, side) {
            Ok(i) => i,
            Err(e) => {
                log::debug!("[camera] getImageData failed: {:?}", e);
                return None;
            }
        };
        match average_rgba(&image.data()) {
            Ok(rgb) => Some(rgb),
            Err(e) => {
                log::debug!("[camera] skipped frame: {}", e);
                None
            }
        }
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn create_sensor(document: &web::Document) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(SENSOR_SIZE);
    canvas.set_height(SENSOR_SIZE);
    canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context for sensor canvas"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Requests the camera once, attaches it to `video` and waits for playback.
pub async fn setup_camera(
    document: &web::Document,
    video: web::HtmlVideoElement,
) -> anyhow::Result<CameraProbe> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window.navigator().media_devices().map_err(js_err)?;

    let video_constraints = js_sys::Object::new();
    js_sys::Reflect::set(&video_constraints, &"width".into(), &CAMERA_WIDTH.into())
        .map_err(js_err)?;
    js_sys::Reflect::set(&video_constraints, &"height".into(), &CAMERA_HEIGHT.into())
        .map_err(js_err)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_constraints.into());
    constraints.set_audio(&JsValue::FALSE);

    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_err)?;
    let stream: web::MediaStream = JsFuture::from(request)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    video.set_src_object(Some(&stream));

    let loaded = js_sys::Promise::new(&mut |resolve, _reject| {
        video.set_onloadedmetadata(Some(&resolve));
    });
    JsFuture::from(loaded).await.map_err(js_err)?;
    video.set_onloadedmetadata(None);
    JsFuture::from(video.play().map_err(js_err)?)
        .await
        .map_err(js_err)?;

    let sensor = create_sensor(document)?;
    log::info!(
        "[camera] ready {}x{}",
        video.video_width(),
        video.video_height()
    );
    Ok(CameraProbe { video, sensor })
}
