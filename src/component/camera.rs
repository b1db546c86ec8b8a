use hecs::Entity;

/// Points a character at the camera its movement input is relative to
#[derive(Clone, Copy)]
pub struct ViewCamera {
    pub camera_entity: Entity,
}

impl ViewCamera {
    pub fn new(camera_entity: Entity) -> ViewCamera {
        ViewCamera {
            camera_entity
        }
    }
}
