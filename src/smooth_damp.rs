//! Critically damped spring interpolation.
//!
//! Approximates `exp(-omega * dt)` with a cubic Taylor expansion, which is stable for any
//! positive time step. The caller owns the velocity accumulator and must pass the same one
//! back in every frame.

use dbsdk_rs::math::Vector3;

const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Moves `current` toward `target`, reaching it in roughly `smooth_time` seconds.
/// The change per step is clamped to `max_speed * smooth_time`, and the result never
/// overshoots the target.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, max_speed: f32, delta_time: f32) -> f32 {
    let smooth_time = f32::max(MIN_SMOOTH_TIME, smooth_time);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let clamped_target = current - change;

    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = clamped_target + (change + temp) * exp;

    // don't overshoot
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Vector form of [`smooth_damp`]; the speed clamp applies to the whole vector's length.
pub fn smooth_damp_vec3(current: Vector3, target: Vector3, velocity: &mut Vector3, smooth_time: f32, max_speed: f32, delta_time: f32) -> Vector3 {
    let smooth_time = f32::max(MIN_SMOOTH_TIME, smooth_time);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let mut change = current - target;

    let max_change = max_speed * smooth_time;
    let change_sq = change.length_sq();
    if change_sq > max_change * max_change {
        change = change * (max_change / change_sq.sqrt());
    }

    let clamped_target = current - change;

    let temp = (*velocity + (change * omega)) * delta_time;
    *velocity = (*velocity - (temp * omega)) * exp;
    let mut output = clamped_target + ((change + temp) * exp);

    // don't overshoot
    let to_target = target - current;
    let past_target = output - target;
    if Vector3::dot(&to_target, &past_target) > 0.0 {
        output = target;
        *velocity = Vector3::zero();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_util::{approx, approx_vec};

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_scalar_converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;

        for _ in 0..240 {
            value = smooth_damp(value, 10.0, &mut velocity, 0.3, f32::INFINITY, DT);
            assert!(value <= 10.0);
        }

        assert!(approx(value, 10.0));
    }

    #[test]
    fn test_scalar_speed_is_clamped() {
        let mut velocity = 0.0;
        let value = smooth_damp(0.0, 1000.0, &mut velocity, 0.5, 2.0, DT);

        // cannot outrun max_speed over one step
        assert!(value <= 2.0 * DT + 1e-4);
    }

    #[test]
    fn test_vec_zero_stays_zero() {
        let mut velocity = Vector3::zero();
        let out = smooth_damp_vec3(Vector3::zero(), Vector3::zero(), &mut velocity, 0.2, f32::INFINITY, DT);

        assert_eq!(out.x, 0.0);
        assert_eq!(out.y, 0.0);
        assert_eq!(out.z, 0.0);
        assert_eq!(velocity.length_sq(), 0.0);
    }

    #[test]
    fn test_vec_distance_shrinks_monotonically() {
        let target = Vector3::new(3.0, 0.0, -4.0);
        let mut current = Vector3::new(-2.0, 0.0, 1.0);
        let mut velocity = Vector3::zero();
        let mut prev_dist = (target - current).length_sq();

        for _ in 0..300 {
            current = smooth_damp_vec3(current, target, &mut velocity, 0.25, f32::INFINITY, DT);
            let dist = (target - current).length_sq();
            assert!(dist <= prev_dist + 1e-6);
            prev_dist = dist;
        }

        assert!(approx_vec(current, target));
    }

    #[test]
    fn test_longer_time_constant_settles_slower() {
        let target = Vector3::new(5.0, 0.0, 0.0);

        let mut fast = Vector3::zero();
        let mut fast_vel = Vector3::zero();
        let mut slow = Vector3::zero();
        let mut slow_vel = Vector3::zero();

        for _ in 0..10 {
            fast = smooth_damp_vec3(fast, target, &mut fast_vel, 0.1, f32::INFINITY, DT);
            slow = smooth_damp_vec3(slow, target, &mut slow_vel, 0.5, f32::INFINITY, DT);
        }

        assert!(fast.x > slow.x);
    }

    #[test]
    fn test_zero_time_step_is_noop() {
        let mut velocity = Vector3::zero();
        let current = Vector3::new(1.0, 0.0, 2.0);
        let out = smooth_damp_vec3(current, Vector3::zero(), &mut velocity, 0.2, f32::INFINITY, 0.0);
        assert!(approx_vec(out, current));
    }
}
