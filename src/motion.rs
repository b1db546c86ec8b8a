//! Per-frame motion integration for a camera-relative third-person character.
//!
//! A frame runs in this order:
//!
//! 1. map analog input to a world-space horizontal target through the camera
//! 2. look up a smoothing time constant from how far the target turns away from the current heading
//! 3. smooth damp the horizontal velocity toward the target
//! 4. resolve vertical velocity from gravity, ground contact and the jump edge
//! 5. optionally slerp the facing toward the horizontal heading
//!
//! The host then moves the body by `direction * dt`.

use dbsdk_rs::math::{Quaternion, Vector3};

use crate::{common, component::motion::{JumpPolicy, MotionConfig, MotionState}, curve::ResponseCurve, smooth_damp::smooth_damp_vec3};

/// Below this squared length the camera-to-character offset has no usable heading
const MIN_FORWARD_LENGTH_SQ: f32 = 1e-6;

/// Everything the host reports for one frame
#[derive(Clone, Copy)]
pub struct FrameInput {
    pub vertical: f32,
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub grounded: bool,
    pub delta_time: f32,
    pub camera_position: Vector3,
    pub position: Vector3,
    pub rotation: Quaternion,
}

/// Result of one integration step
#[derive(Clone, Copy)]
pub struct MotionStep {
    pub state: MotionState,
    /// World-space displacement for the host's mover
    pub displacement: Vector3,
    /// New facing, if facing updates are enabled and the character is moving
    pub facing: Option<Quaternion>,
}

/// Horizontal forward from the camera toward the character.
/// Returns `None` when the camera is directly above or below.
pub fn camera_forward(position: Vector3, camera_position: Vector3) -> Option<Vector3> {
    let forward = common::project_on_xz(position - camera_position);

    if forward.length_sq() <= MIN_FORWARD_LENGTH_SQ {
        return None;
    }

    Some(forward.normalized())
}

/// Maps the two input axes onto the camera's horizontal frame, scaled by move speed.
/// Returns the target horizontal velocity and the forward it was built from.
pub fn input_direction(config: &MotionConfig, state: &MotionState, frame: &FrameInput) -> (Vector3, Vector3) {
    let forward = match camera_forward(frame.position, frame.camera_position) {
        Some(v) => v,
        None => {
            log::trace!("camera is vertically aligned with character, reusing last forward");
            state.last_forward
        }
    };

    let right = common::right_of(forward);
    let direction = ((forward * frame.vertical) + (right * frame.horizontal)) * config.move_speed;

    (direction, forward)
}

/// Cosine similarity of two horizontal headings remapped from [-1, 1] to [0, 1].
/// A zero-length heading counts as orthogonal.
pub fn direction_similarity(current: Vector3, target: Vector3) -> f32 {
    let current = common::project_on_xz(current);
    let target = common::project_on_xz(target);

    let cos = if current.length_sq() <= f32::EPSILON || target.length_sq() <= f32::EPSILON {
        0.0
    }
    else {
        Vector3::dot(&current.normalized(), &target.normalized()).clamp(-1.0, 1.0)
    };

    (cos + 1.0) * 0.5
}

/// Smoothing time constant for turning from `current` toward `target`
pub fn turn_time(config: &MotionConfig, current: Vector3, target: Vector3) -> f32 {
    let similarity = direction_similarity(current, target);
    config.turn_time_curve.evaluate(similarity) * config.max_turn_time
}

/// Smooth damps the horizontal part of `state.direction` toward `target`
pub fn update_horizontal(config: &MotionConfig, state: &mut MotionState, target: Vector3, delta_time: f32) {
    let current = common::project_on_xz(state.direction);
    let target = common::project_on_xz(target);
    let tau = turn_time(config, current, target);

    let next = smooth_damp_vec3(current, target, &mut state.smoothing_velocity, tau, config.max_smoothing_speed, delta_time);

    state.direction.x = next.x;
    state.direction.z = next.z;
}

/// Launch speed needed to peak at `height` under `gravity`
pub fn jump_velocity(gravity: f32, height: f32) -> f32 {
    (2.0 * gravity * height).sqrt()
}

/// Resolves vertical velocity for this frame from the jump policy
pub fn update_vertical(config: &MotionConfig, state: &mut MotionState, grounded: bool, jump_pressed: bool, delta_time: f32) {
    match config.jump {
        JumpPolicy::AirJumps { jump_height, max_jumps } => {
            state.direction.y -= config.gravity * delta_time;

            if grounded {
                state.direction.y = config.rest_bias;
                state.jumps_used = 0;
            }

            if jump_pressed && state.jumps_used < max_jumps {
                state.direction.y = jump_velocity(config.gravity, jump_height);
                state.jumps_used += 1;
                log::debug!("jump {} of {}", state.jumps_used, max_jumps);
            }
        }
        JumpPolicy::GroundOnly { jump_power } => {
            if grounded {
                state.jumps_used = 0;
                state.direction.y = config.rest_bias;

                if jump_pressed {
                    state.direction.y = jump_power;
                    log::debug!("jump");
                }
            }
            else {
                state.direction.y -= config.gravity * delta_time;
            }
        }
    }
}

/// Turns `rotation` toward the horizontal heading of `direction`.
/// Returns `None` inside the deadzone, or when facing updates are disabled.
pub fn update_facing(config: &MotionConfig, direction: Vector3, rotation: Quaternion, delta_time: f32) -> Option<Quaternion> {
    let rotation_speed = config.rotation_speed?;

    if common::horizontal_length(direction) <= config.facing_deadzone {
        return None;
    }

    let target = common::look_rotation_xz(direction);
    Some(common::slerp(rotation, target, delta_time * rotation_speed))
}

/// Advances a character's motion by one frame
pub fn integrate(config: &MotionConfig, state: &MotionState, frame: &FrameInput) -> MotionStep {
    let mut state = *state;

    let (target, forward) = input_direction(config, &state, frame);
    state.last_forward = forward;

    update_horizontal(config, &mut state, target, frame.delta_time);
    update_vertical(config, &mut state, frame.grounded, frame.jump_pressed, frame.delta_time);

    let facing = update_facing(config, state.direction, frame.rotation, frame.delta_time);

    MotionStep {
        state,
        displacement: state.direction * frame.delta_time,
        facing,
    }
}
