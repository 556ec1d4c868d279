pub mod adapt;
pub mod controls;

pub use adapt::{wire_adapt_button, AdaptState};
pub use controls::{wire_master_volume, wire_sound_controls, wire_transport, ControlWiring};
