use dbsdk_rs::math::Vector3;
use hecs::{CommandBuffer, Entity, World};

use crate::{component::{camera::ViewCamera, motion::{GroundContact, MotionConfig, MotionInput, MotionState}, playerinput::PlayerInput, transform3d::Transform3D}, debug_draw::{self, DebugDraw}, motion::{self, FrameInput}, mover::CharacterMover, InputState, TimeData};

/// System which initializes motion state on newly configured characters
pub fn motion_init(world: &mut World) {
    let mut cmd_buffer = CommandBuffer::new();
    for (eid, _) in world.query_mut::<&MotionConfig>().without::<&MotionState>() {
        cmd_buffer.insert(eid, (MotionState::default(), MotionInput::default(), GroundContact::default()));
    }
    cmd_buffer.run_on(world);
}

/// System which feeds player input and camera position to characters with a PlayerInput component
pub fn motion_input_update(input: &InputState, world: &mut World) {
    // resolve camera positions first
    let mut camera_iter = world.query::<&ViewCamera>();
    let camera_points = camera_iter
        .iter()
        .filter_map(|(eid, cam)| {
            world.get::<&Transform3D>(cam.camera_entity).ok().map(|t| (eid, t.position))
        })
        .collect::<Vec<(Entity, Vector3)>>();
    drop(camera_iter);

    for (eid, camera_pos) in camera_points {
        if let Ok(mut motion_input) = world.get::<&mut MotionInput>(eid) {
            motion_input.camera_position = camera_pos;
        }
    }

    for (_, (motion_input, _)) in world.query_mut::<(&mut MotionInput, &PlayerInput)>() {
        motion_input.move_x = input.move_x;
        motion_input.move_y = input.move_y;
        motion_input.jump_pressed = input.jump;
    }
}

/// System which integrates character motion and moves characters through the host's collision sweep
pub fn motion_update<M: CharacterMover>(time: &TimeData, mover: &mut M, world: &mut World) {
    for (eid, (config, state, input, contact, transform)) in world.query_mut::<(&MotionConfig, &mut MotionState, &MotionInput, &mut GroundContact, &mut Transform3D)>() {
        let frame = FrameInput {
            vertical: input.move_y,
            horizontal: input.move_x,
            jump_pressed: input.jump_pressed,
            grounded: contact.grounded,
            delta_time: time.delta_time,
            camera_position: input.camera_position,
            position: transform.position,
            rotation: transform.rotation,
        };

        let step = motion::integrate(config, state, &frame);
        *state = step.state;

        if let Some(facing) = step.facing {
            transform.rotation = facing;
        }

        let result = mover.move_by(eid, transform.position, step.displacement);
        transform.position = result.position;
        contact.grounded = result.grounded;
    }
}

/// System which draws camera basis & motion direction of each character
pub fn motion_debug_draw<D: DebugDraw>(draw: &mut D, world: &World) {
    let mut query = world.query::<(&MotionState, &MotionInput, &Transform3D)>();
    for (_, (state, input, transform)) in query.iter() {
        debug_draw::draw_gizmo(draw, transform.position, input.camera_position, state.direction);
    }
}
