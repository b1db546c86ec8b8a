use dbsdk_rs::math::Vector3;
use hecs::{Entity, World};

use crate::{common, component::{motion::MotionConfig, playerinput::PlayerInput, transform3d::Transform3D}, config::{self, ConfigError}, entity_def::EntityDefs, parse_utils};

pub const CHARACTER_CLASSNAMES: [&str; 2] = ["info_player_start", "character"];

/// Spawns a motion-driven, player-controlled character
pub fn spawn_character(world: &mut World, transform: Transform3D, config: MotionConfig) -> Entity {
    world.spawn((transform, config, PlayerInput {}))
}

/// Spawns every character entity found in the definitions. Entities whose settings fail
/// to parse are skipped with a warning.
pub fn spawn_characters(defs: &EntityDefs, world: &mut World) -> Vec<Entity> {
    let mut spawned = Vec::new();

    defs.parse(|ent| {
        let classname = match config::required(&ent, "classname") {
            Ok(v) => v,
            Err(_) => return,
        };

        if !CHARACTER_CLASSNAMES.iter().any(|c| *c == classname) {
            return;
        }

        match character_from_entity(&ent) {
            Ok((transform, motion_config)) => {
                spawned.push(spawn_character(world, transform, motion_config));
            }
            Err(e) => {
                log::warn!("skipping {}: {}", classname, e);
            }
        }
    });

    log::info!("spawned {} character(s)", spawned.len());
    spawned
}

fn character_from_entity(ent: &std::collections::HashMap<&str, &str>) -> Result<(Transform3D, MotionConfig), ConfigError> {
    let origin = match ent.get("origin") {
        Some(v) => parse_utils::parse_vec3("origin", v)?,
        None => Vector3::zero(),
    };

    // yaw in degrees, 0 faces world forward
    let angle = match ent.get("angle") {
        Some(v) => parse_utils::parse_f32("angle", v)?,
        None => 0.0,
    };

    let transform = Transform3D::default()
        .with_position(origin)
        .with_rotation(common::yaw_rotation(angle.to_radians()));

    Ok((transform, MotionConfig::from_entity(ent)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_util::{approx, approx_vec};
    use crate::component::motion::JumpPolicy;

    const MAP: &str = r#"
{
"classname" "worldspawn"
}
{
"classname" "info_player_start"
"origin" "4 0 -8"
"angle" "90"
"allow_air_jumps" "0"
"jump_power" "5"
}
{
"classname" "character"
"gravity" "lots"
}
{
"classname" "light"
"origin" "0 64 0"
}
"#;

    #[test]
    fn test_spawns_valid_characters_only() {
        let mut world = World::new();
        let spawned = spawn_characters(&EntityDefs::new(MAP), &mut world);

        assert_eq!(spawned.len(), 1);

        let transform = world.get::<&Transform3D>(spawned[0]).unwrap();
        assert!(approx_vec(transform.position, Vector3::new(4.0, 0.0, -8.0)));
        // 90 degrees about +Y turns forward (-Z) to -X
        assert!(approx(transform.forward().x, -1.0));

        let config = world.get::<&MotionConfig>(spawned[0]).unwrap();
        assert_eq!(config.jump, JumpPolicy::GroundOnly { jump_power: 5.0 });

        assert!(world.get::<&PlayerInput>(spawned[0]).is_ok());
    }
}
