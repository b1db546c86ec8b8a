use dbsdk_rs::math::{Quaternion, Vector3};

use crate::common;

#[derive(Clone, Copy)]
pub struct Transform3D {
    pub position: Vector3,
    pub rotation: Quaternion,
}

impl Default for Transform3D {
    fn default() -> Self {
        Transform3D {
            position: Vector3::zero(),
            rotation: Quaternion::identity(),
        }
    }
}

impl Transform3D {
    pub fn with_position(&self, new_position: Vector3) -> Transform3D {
        let mut result = *self;
        result.position = new_position;
        result
    }

    pub fn with_rotation(&self, new_rotation: Quaternion) -> Transform3D {
        let mut result = *self;
        result.rotation = new_rotation;
        result
    }

    /// World-space direction the entity is facing
    pub fn forward(&self) -> Vector3 {
        common::rotate_vector(self.rotation, common::world_forward())
    }
}
