use std::sync::Arc;

use dbsdk_rs::math::Vector3;

use crate::{common, curve::{KeyframeCurve, SharedCurve}};

pub const DEFAULT_REST_BIAS: f32 = -0.1;
pub const DEFAULT_FACING_DEADZONE: f32 = 0.1;

/// How vertical velocity responds to the jump edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JumpPolicy {
    /// Jump only while grounded, launching at a fixed vertical speed. Gravity is only
    /// integrated while airborne.
    GroundOnly { jump_power: f32 },
    /// Up to `max_jumps` jumps between ground contacts, each launching high enough to
    /// reach `jump_height`. Gravity is integrated every frame.
    AirJumps { jump_height: f32, max_jumps: u32 },
}

impl JumpPolicy {
    pub fn allow_air_jumps(&self) -> bool {
        matches!(self, JumpPolicy::AirJumps { .. })
    }
}

/// Per-character movement tuning. Set once when the character is created.
#[derive(Clone)]
pub struct MotionConfig {
    pub move_speed: f32,
    /// Facing slerp rate; `None` leaves the character's rotation alone
    pub rotation_speed: Option<f32>,
    pub gravity: f32,
    pub jump: JumpPolicy,
    /// Maps direction similarity in [0, 1] to a fraction of `max_turn_time`
    pub turn_time_curve: SharedCurve,
    pub max_turn_time: f32,
    pub max_smoothing_speed: f32,
    /// Vertical velocity held while grounded, keeps the collision sweep touching the floor
    pub rest_bias: f32,
    pub facing_deadzone: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            move_speed: 6.0,
            rotation_speed: Some(10.0),
            gravity: 20.0,
            jump: JumpPolicy::AirJumps { jump_height: 2.0, max_jumps: 2 },
            turn_time_curve: Arc::new(KeyframeCurve::linear(1.0, 0.25)),
            max_turn_time: 0.2,
            max_smoothing_speed: f32::INFINITY,
            rest_bias: DEFAULT_REST_BIAS,
            facing_deadzone: DEFAULT_FACING_DEADZONE,
        }
    }
}

impl MotionConfig {
    pub fn with_jump(mut self, jump: JumpPolicy) -> MotionConfig {
        self.jump = jump;
        self
    }

    pub fn with_turn_time_curve(mut self, curve: SharedCurve) -> MotionConfig {
        self.turn_time_curve = curve;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: Option<f32>) -> MotionConfig {
        self.rotation_speed = rotation_speed;
        self
    }
}

/// Motion carried from one frame to the next
#[derive(Clone, Copy)]
pub struct MotionState {
    /// XZ is horizontal velocity, Y is vertical velocity
    pub direction: Vector3,
    /// Accumulator owned by the horizontal smooth damp
    pub smoothing_velocity: Vector3,
    pub jumps_used: u32,
    /// Last well-defined camera-relative forward
    pub last_forward: Vector3,
}

impl Default for MotionState {
    fn default() -> Self {
        MotionState {
            direction: Vector3::zero(),
            smoothing_velocity: Vector3::zero(),
            jumps_used: 0,
            last_forward: common::world_forward(),
        }
    }
}

/// Input gathered for a character this frame
#[derive(Clone, Copy)]
pub struct MotionInput {
    pub move_x: f32,
    pub move_y: f32,
    pub jump_pressed: bool,
    pub camera_position: Vector3,
}

impl Default for MotionInput {
    fn default() -> Self {
        MotionInput {
            move_x: 0.0,
            move_y: 0.0,
            jump_pressed: false,
            camera_position: Vector3::zero(),
        }
    }
}

/// Ground contact reported by the mover after the last move
#[derive(Clone, Copy, Default)]
pub struct GroundContact {
    pub grounded: bool,
}
