extern crate dbsdk_rs;

pub mod common;
pub mod config;
pub mod curve;
pub mod debug_draw;
pub mod entity_def;
pub mod host;
pub mod input;
pub mod motion;
pub mod mover;
pub mod parse_utils;
pub mod smooth_damp;
pub mod spawn;

#[cfg(target_arch = "wasm32")]
pub mod logging;

pub mod component {
    pub mod camera;
    pub mod motion;
    pub mod playerinput;
    pub mod transform3d;
}

pub mod system {
    pub mod motion_system;
}

/// Frame timing handed to systems
#[derive(Clone, Copy, Default)]
pub struct TimeData {
    pub delta_time: f32,
}

/// Player input for the current frame. `jump` is a press edge, not a held state.
#[derive(Clone, Copy, Default)]
pub struct InputState {
    pub move_x: f32,
    pub move_y: f32,
    pub jump: bool,
}
