//! One renderer per visual channel. Each `draw` paints the current state and
//! advances it by exactly one simulation step.

mod fire;
mod night;
mod rain;
mod thunder;
mod waves;

pub use fire::FireLayer;
pub use night::NightLayer;
pub use rain::RainLayer;
pub use thunder::ThunderLayer;
pub use waves::WavesLayer;

use crate::color::AmbientColor;
use crate::Viewport;

/// Per-frame inputs shared by every layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneContext {
    pub viewport: Viewport,
    /// Present only while color adaptation is running.
    pub ambient: Option<AmbientColor>,
}
