use dbsdk_rs::math::{Quaternion, Vector3};

// DreamBox coordinate system:
// +X is right
// +Y is up
// -Z is forwards

pub fn world_up() -> Vector3 {
    Vector3::new(0.0, 1.0, 0.0)
}

pub fn world_forward() -> Vector3 {
    Vector3::new(0.0, 0.0, -1.0)
}

/// Drops the vertical component of a vector
pub fn project_on_xz(v: Vector3) -> Vector3 {
    Vector3::new(v.x, 0.0, v.z)
}

pub fn horizontal_length(v: Vector3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Returns the vector pointing 90 degrees clockwise (seen from above) of the given horizontal vector
pub fn right_of(forward: Vector3) -> Vector3 {
    Vector3::cross(&forward, &world_up())
}

/// Rotation about +Y by the given angle (radians)
pub fn yaw_rotation(angle: f32) -> Quaternion {
    let half = angle * 0.5;
    Quaternion::new(0.0, half.sin(), 0.0, half.cos())
}

/// Rotation which turns world forward to face along the horizontal part of `dir`
pub fn look_rotation_xz(dir: Vector3) -> Quaternion {
    yaw_rotation(f32::atan2(-dir.x, -dir.z))
}

/// Rotates a vector by a unit quaternion
pub fn rotate_vector(q: Quaternion, v: Vector3) -> Vector3 {
    let u = Vector3::new(q.x, q.y, q.z);
    let uv = Vector3::cross(&u, &v);
    let uuv = Vector3::cross(&u, &uv);

    v + (uv * (2.0 * q.w)) + (uuv * 2.0)
}

pub fn quat_dot(a: Quaternion, b: Quaternion) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
}

fn quat_normalized(q: Quaternion) -> Quaternion {
    let len = quat_dot(q, q).sqrt();
    if len <= f32::EPSILON {
        return Quaternion::identity();
    }

    Quaternion::new(q.x / len, q.y / len, q.z / len, q.w / len)
}

/// Spherical interpolation along the shortest arc. `t` is clamped to [0, 1].
pub fn slerp(a: Quaternion, b: Quaternion, t: f32) -> Quaternion {
    let t = t.clamp(0.0, 1.0);

    let mut cos_theta = quat_dot(a, b);
    let mut b = b;

    // q and -q are the same rotation, take the short way around
    if cos_theta < 0.0 {
        b = Quaternion::new(-b.x, -b.y, -b.z, -b.w);
        cos_theta = -cos_theta;
    }

    let (wa, wb) = if cos_theta > 0.9995 {
        // nearly parallel, fall back to nlerp
        (1.0 - t, t)
    }
    else {
        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        (((1.0 - t) * theta).sin() / sin_theta, (t * theta).sin() / sin_theta)
    };

    quat_normalized(Quaternion::new(
        a.x * wa + b.x * wb,
        a.y * wa + b.y * wb,
        a.z * wa + b.z * wb,
        a.w * wa + b.w * wb,
    ))
}
