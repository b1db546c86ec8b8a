use dbsdk_rs::{math::Vector3, vdp::Color32};
use hecs::World;

use reverie_locomotion::{
    component::{camera::ViewCamera, motion::{GroundContact, JumpPolicy, MotionConfig, MotionState}, transform3d::Transform3D},
    debug_draw::DebugDraw,
    entity_def::EntityDefs,
    input::ButtonEdge,
    mover::GroundPlaneMover,
    spawn,
    system::motion_system::{motion_debug_draw, motion_init, motion_input_update, motion_update},
    InputState, TimeData,
};

const DT: f32 = 1.0 / 60.0;

struct LineCounter(usize);

impl DebugDraw for LineCounter {
    fn draw_line(&mut self, _: Vector3, _: Vector3, _: Color32) {
        self.0 += 1;
    }
}

fn setup(config: MotionConfig) -> (World, hecs::Entity, hecs::Entity) {
    let mut world = World::new();

    let camera = world.spawn((Transform3D::default().with_position(Vector3::new(0.0, 3.0, 8.0)),));
    let character = spawn::spawn_character(&mut world, Transform3D::default(), config);
    world.insert_one(character, ViewCamera::new(camera)).unwrap();

    motion_init(&mut world);
    (world, character, camera)
}

fn run_frame(world: &mut World, input: &InputState, mover: &mut GroundPlaneMover) {
    let time = TimeData { delta_time: DT };
    motion_input_update(input, world);
    motion_update(&time, mover, world);
}

#[test]
fn init_attaches_state() {
    let (world, character, camera) = setup(MotionConfig::default());

    assert!(world.get::<&MotionState>(character).is_ok());
    assert!(world.get::<&GroundContact>(character).is_ok());
    assert!(world.get::<&MotionState>(camera).is_err());
}

#[test]
fn walks_away_from_camera() {
    let (mut world, character, _) = setup(MotionConfig::default());
    let mut mover = GroundPlaneMover::new(0.0);
    let input = InputState { move_x: 0.0, move_y: 1.0, jump: false };

    for _ in 0..90 {
        run_frame(&mut world, &input, &mut mover);
    }

    let transform = world.get::<&Transform3D>(character).unwrap();
    assert!(transform.position.z < -3.0);
    assert!(transform.position.x.abs() < 1e-4);
    // turned to face the direction of travel
    assert!(transform.forward().z < -0.9);

    let contact = world.get::<&GroundContact>(character).unwrap();
    assert!(contact.grounded);
}

#[test]
fn double_jump_then_land() {
    let config = MotionConfig::default().with_jump(JumpPolicy::AirJumps { jump_height: 2.0, max_jumps: 2 });
    let (mut world, character, _) = setup(config);
    let mut mover = GroundPlaneMover::new(0.0);
    let mut jump_button = ButtonEdge::new();

    // settle onto the floor
    for _ in 0..3 {
        let input = InputState { jump: jump_button.update(false), ..InputState::default() };
        run_frame(&mut world, &input, &mut mover);
    }
    assert!(world.get::<&GroundContact>(character).unwrap().grounded);

    // hold jump for several frames: only the press frame jumps
    for _ in 0..5 {
        let input = InputState { jump: jump_button.update(true), ..InputState::default() };
        run_frame(&mut world, &input, &mut mover);
    }
    assert_eq!(world.get::<&MotionState>(character).unwrap().jumps_used, 1);

    // release and press again in the air
    let input = InputState { jump: jump_button.update(false), ..InputState::default() };
    run_frame(&mut world, &input, &mut mover);
    let input = InputState { jump: jump_button.update(true), ..InputState::default() };
    run_frame(&mut world, &input, &mut mover);
    assert_eq!(world.get::<&MotionState>(character).unwrap().jumps_used, 2);

    // a third press is refused
    let input = InputState { jump: jump_button.update(false), ..InputState::default() };
    run_frame(&mut world, &input, &mut mover);
    let input = InputState { jump: jump_button.update(true), ..InputState::default() };
    run_frame(&mut world, &input, &mut mover);
    assert_eq!(world.get::<&MotionState>(character).unwrap().jumps_used, 2);

    for _ in 0..240 {
        let input = InputState { jump: jump_button.update(false), ..InputState::default() };
        run_frame(&mut world, &input, &mut mover);
    }

    let state = *world.get::<&MotionState>(character).unwrap();
    assert_eq!(state.jumps_used, 0);
    assert_eq!(state.direction.y, -0.1);
    assert_eq!(world.get::<&Transform3D>(character).unwrap().position.y, 0.0);
}

#[test]
fn characters_from_entity_definitions() {
    let defs = EntityDefs::new(r#"
{
"classname" "info_player_start"
"origin" "0 0 0"
"move_speed" "4"
"allow_air_jumps" "0"
"jump_power" "6"
}
"#);

    let mut world = World::new();
    let spawned = spawn::spawn_characters(&defs, &mut world);
    assert_eq!(spawned.len(), 1);

    let camera = world.spawn((Transform3D::default().with_position(Vector3::new(5.0, 2.0, 0.0)),));
    world.insert_one(spawned[0], ViewCamera::new(camera)).unwrap();
    motion_init(&mut world);

    let mut mover = GroundPlaneMover::new(0.0);
    let input = InputState { move_x: 0.0, move_y: 1.0, jump: false };
    for _ in 0..120 {
        run_frame(&mut world, &input, &mut mover);
    }

    // camera on +X looks toward -X
    let transform = world.get::<&Transform3D>(spawned[0]).unwrap();
    assert!(transform.position.x < -4.0);

    let mut lines = LineCounter(0);
    motion_debug_draw(&mut lines, &world);
    assert_eq!(lines.0, 3);
}
