//! Robotic arm angles and overlay geometry.
//!
//! The arm is purely decorative: a fixed vertical column with a pivoting
//! segment whose angle follows the pair of boxes being swapped.

use crate::config::ArmConfig;

/// Heading, in degrees, of the vector from `from` to `to`.
pub fn heading_degrees(from: (i32, i32), to: (i32, i32)) -> f32 {
    let dx = (to.0 - from.0) as f32;
    let dy = (to.1 - from.1) as f32;
    dy.atan2(dx).to_degrees()
}

/// Current joint angles of the arm, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArmState {
    /// Smoothed heading of the arm base
    pub base_angle: f32,
    /// Angle of the pivoting segment
    pub segment_angle: f32,
}

impl ArmState {
    /// Points the arm along the vector from `from` to `to`.
    ///
    /// The segment snaps to the new heading while the base closes `smoothing`
    /// of its remaining error.
    pub fn track(&mut self, from: (i32, i32), to: (i32, i32), smoothing: f32) {
        let target = heading_degrees(from, to);
        self.base_angle += (target - self.base_angle) * smoothing;
        self.segment_angle = target;
    }
}

/// Screen-space pieces of the arm overlay, relative to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmGeometry {
    /// Top-left corner of the vertical column
    pub column_min: (f32, f32),
    /// Width and height of the column
    pub column_size: (f32, f32),
    /// Pivot where the segment starts
    pub segment_start: (f32, f32),
    /// Free end of the segment, where the gripper sits
    pub segment_end: (f32, f32),
    /// End of the short marker showing the base heading
    pub base_marker_end: (f32, f32),
}

impl ArmGeometry {
    /// Lays out the arm for a scene of `box_count` boxes.
    pub fn compute(
        arm: &ArmConfig,
        state: &ArmState,
        box_count: usize,
        box_height: i32,
        box_gap: i32,
    ) -> Self {
        let column_height = (box_count.saturating_sub(1) as i32) * (box_height + box_gap);
        let column_left = arm.base_x - arm.thickness / 2;
        let segment_length = (box_height * 5 + box_gap) as f32;
        let start = ((column_left + arm.thickness / 2) as f32, arm.base_y as f32);

        let segment = state.segment_angle.to_radians();
        let end = (
            start.0 - segment_length * segment.cos(),
            start.1 - segment_length * segment.sin(),
        );

        let marker_length = arm.thickness as f32 * 1.5;
        let base = state.base_angle.to_radians();
        let marker_end = (
            start.0 - marker_length * base.cos(),
            start.1 - marker_length * base.sin(),
        );

        Self {
            column_min: (column_left as f32, arm.base_y as f32),
            column_size: (arm.thickness as f32, column_height as f32),
            segment_start: start,
            segment_end: end,
            base_marker_end: marker_end,
        }
    }
}
