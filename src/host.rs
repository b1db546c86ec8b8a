//! Standalone integrator for hosts that don't run an ECS world.
//!
//! The host implements [`MotionHost`] and calls [`MotionIntegrator::update`] once per frame.

use dbsdk_rs::{math::{Quaternion, Vector3}, vdp::Color32};

use crate::{component::motion::{MotionConfig, MotionState}, debug_draw::{self, DebugDraw}, motion::{self, FrameInput, MotionStep}};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Everything the integrator needs from the engine hosting the character
pub trait MotionHost {
    fn elapsed_frame_time(&self) -> f32;

    /// Analog axis in [-1, 1]
    fn axis(&self, axis: Axis) -> f32;

    fn jump_pressed_this_frame(&self) -> bool;

    fn is_grounded(&self) -> bool;

    fn camera_reference_point(&self) -> Vector3;

    fn position(&self) -> Vector3;

    fn rotation(&self) -> Quaternion;

    /// Collision-aware move of the character's body
    fn move_by(&mut self, displacement: Vector3);

    fn set_facing(&mut self, rotation: Quaternion);

    fn draw_line(&mut self, _start: Vector3, _end: Vector3, _color: Color32) {
    }
}

struct HostDraw<'a, H: MotionHost + ?Sized>(&'a mut H);

impl<'a, H: MotionHost + ?Sized> DebugDraw for HostDraw<'a, H> {
    fn draw_line(&mut self, start: Vector3, end: Vector3, color: Color32) {
        self.0.draw_line(start, end, color);
    }
}

pub struct MotionIntegrator {
    config: MotionConfig,
    state: MotionState,
}

impl MotionIntegrator {
    pub fn new(config: MotionConfig) -> MotionIntegrator {
        MotionIntegrator {
            config,
            state: MotionState::default(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Samples this frame's input from the host
    pub fn frame_input<H: MotionHost + ?Sized>(host: &H) -> FrameInput {
        FrameInput {
            vertical: host.axis(Axis::Vertical),
            horizontal: host.axis(Axis::Horizontal),
            jump_pressed: host.jump_pressed_this_frame(),
            grounded: host.is_grounded(),
            delta_time: host.elapsed_frame_time(),
            camera_position: host.camera_reference_point(),
            position: host.position(),
            rotation: host.rotation(),
        }
    }

    /// Runs one frame: integrates, turns the character, and asks the host to move it
    pub fn update<H: MotionHost + ?Sized>(&mut self, host: &mut H) -> MotionStep {
        let frame = MotionIntegrator::frame_input(host);
        let step = motion::integrate(&self.config, &self.state, &frame);
        self.state = step.state;

        if let Some(facing) = step.facing {
            host.set_facing(facing);
        }

        host.move_by(step.displacement);
        step
    }

    pub fn draw_debug<H: MotionHost + ?Sized>(&self, host: &mut H) {
        let position = host.position();
        let camera_position = host.camera_reference_point();
        debug_draw::draw_gizmo(&mut HostDraw(host), position, camera_position, self.state.direction);
    }
}
