use dbsdk_rs::math::Vector3;
use hecs::Entity;

/// Outcome of a collision-aware move
#[derive(Clone, Copy)]
pub struct MoveResult {
    pub position: Vector3,
    pub grounded: bool,
}

/// Collision sweep owned by the host. Moves a character and reports whether it ended up
/// resting on walkable ground.
pub trait CharacterMover {
    fn move_by(&mut self, entity: Entity, from: Vector3, displacement: Vector3) -> MoveResult;
}

/// Flat, infinite floor at a fixed height. Stands in for a real collision world.
#[derive(Clone, Copy)]
pub struct GroundPlaneMover {
    pub height: f32,
}

impl GroundPlaneMover {
    pub fn new(height: f32) -> GroundPlaneMover {
        GroundPlaneMover {
            height
        }
    }
}

impl CharacterMover for GroundPlaneMover {
    fn move_by(&mut self, _: Entity, from: Vector3, displacement: Vector3) -> MoveResult {
        let mut position = from + displacement;

        // only a downward move can land
        let grounded = displacement.y <= 0.0 && position.y <= self.height;
        if position.y < self.height {
            position.y = self.height;
        }

        MoveResult {
            position,
            grounded,
        }
    }
}
