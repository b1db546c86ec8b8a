use dbsdk_rs::{math::Vector3, vdp::Color32};

use crate::common;

const FORWARD_LINE_SCALE: f32 = 4.0;
const RIGHT_LINE_SCALE: f32 = 4.0;
const DIRECTION_LINE_SCALE: f32 = 6.0;

#[derive(Clone, Copy)]
pub struct DebugLine {
    pub start: Vector3,
    pub end: Vector3,
    pub color: Color32,
}

/// Receives diagnostic line segments
pub trait DebugDraw {
    fn draw_line(&mut self, start: Vector3, end: Vector3, color: Color32);
}

pub fn forward_color() -> Color32 {
    Color32::new(0, 255, 0, 255)
}

pub fn direction_color() -> Color32 {
    Color32::new(0, 0, 255, 255)
}

/// Camera forward, camera right and motion direction, drawn from the character origin.
/// Forward and right are the raw camera offset (not normalized), so their length shows
/// camera distance.
pub fn gizmo_lines(position: Vector3, camera_position: Vector3, direction: Vector3) -> [DebugLine; 3] {
    let forward = common::project_on_xz(position - camera_position);
    let right = common::right_of(forward);

    [
        DebugLine { start: position, end: position + (forward * FORWARD_LINE_SCALE), color: forward_color() },
        DebugLine { start: position, end: position + (right * RIGHT_LINE_SCALE), color: forward_color() },
        DebugLine { start: position, end: position + (direction * DIRECTION_LINE_SCALE), color: direction_color() },
    ]
}

pub fn draw_gizmo<D: DebugDraw + ?Sized>(draw: &mut D, position: Vector3, camera_position: Vector3, direction: Vector3) {
    for line in gizmo_lines(position, camera_position, direction) {
        draw.draw_line(line.start, line.end, line.color);
    }
}
