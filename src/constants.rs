// Page wiring and browser-side tuning.

// Element ids and selectors
pub const CANVAS_ID: &str = "ambient-canvas";
pub const VIDEO_ID: &str = "webcam-feed";
pub const ADAPT_BUTTON_ID: &str = "color-adapt-btn";
pub const MASTER_VOLUME_ID: &str = "master-volume";
pub const MASTER_VOLUME_READOUT_ID: &str = "rangeValue";
pub const PLAY_BUTTON_ID: &str = "play-btn";
pub const PAUSE_BUTTON_ID: &str = "pause-btn";
pub const SOUND_CONTROL_SELECTOR: &str = ".sound-control";
pub const SOUND_VOLUME_CLASS: &str = "sound-volume";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "d-none";

// Camera request
pub const CAMERA_WIDTH: u32 = 320;
pub const CAMERA_HEIGHT: u32 = 240;

// Adapt button styling while sampling (hue comes from the ambient color)
pub const ADAPT_BUTTON_SATURATION: f32 = 90.0;
pub const ADAPT_BUTTON_LIGHTNESS: f32 = 60.0;
pub const ADAPT_BUTTON_GLOW_PX: u32 = 20;
pub const ADAPT_BUTTON_IDLE_BACKGROUND: &str = "#1e1e1e";
pub const ADAPT_BUTTON_IDLE_TEXT: &str = "#888";
pub const ADAPT_BUTTON_IDLE_BORDER: &str = "2px solid #333";

// Frame-rate diagnostics
pub const FPS_LOG_INTERVAL_SEC: f32 = 10.0;

// Looping sound assets, keyed by `data-sound` name
pub const SOUND_FILES: [(&str, &str); 10] = [
    ("rain", "./sounds/rain.mp3"),
    ("wind", "./sounds/wind.wav"),
    ("thunder", "./sounds/thunder.wav"),
    ("waves", "./sounds/waves.wav"),
    ("birds", "./sounds/birds.wav"),
    ("forest", "./sounds/forest.mp3"),
    ("fire", "./sounds/fire.wav"),
    ("cafe", "./sounds/coffee_shop.wav"),
    ("fan", "./sounds/fan.mp3"),
    ("night", "./sounds/night.wav"),
];

#[inline]
pub fn sound_file(name: &str) -> Option<&'static str> {
    SOUND_FILES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, path)| *path)
}
