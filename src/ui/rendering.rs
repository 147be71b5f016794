//! Canvas rendering functionality for boxes and the robotic arm.

use super::state::SwapApp;
use crate::arm::ArmGeometry;
use crate::types::{Rgb, Shape};
use eframe::egui;
use eframe::epaint::StrokeKind;

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn point(origin: egui::Pos2, p: (f32, f32)) -> egui::Pos2 {
    SwapApp::scene_to_screen(p, origin)
}

/// Screen rectangle covered by a shape.
pub fn shape_rect(shape: &Shape, origin: egui::Pos2) -> egui::Rect {
    let min = point(origin, (shape.position.0 as f32, shape.position.1 as f32));
    egui::Rect::from_min_size(min, egui::vec2(shape.width as f32, shape.height as f32))
}

/// Paints a filled box with its label centered in black.
pub fn draw_shape(painter: &egui::Painter, shape: &Shape, origin: egui::Pos2) {
    let rect = shape_rect(shape, origin);
    painter.rect_filled(rect, 0.0, color(shape.color));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        shape.label,
        egui::FontId::proportional(crate::constants::LABEL_FONT_SIZE),
        egui::Color32::BLACK,
    );
}

impl SwapApp {
    /// Renders the scene: boxes in scan order, the pending swap outline, and the arm.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `origin` - Top-left corner of the canvas in screen space
    pub fn render_scene(&self, painter: &egui::Painter, origin: egui::Pos2) {
        for shape in &self.scene.shapes {
            draw_shape(painter, shape, origin);
        }

        if let Some(shape) = self
            .interaction
            .pending_swap
            .and_then(|index| self.scene.shapes.get(index))
        {
            painter.rect_stroke(
                shape_rect(shape, origin),
                0.0,
                egui::Stroke::new(
                    crate::constants::PENDING_STROKE_WIDTH,
                    color(crate::constants::PENDING_STROKE_COLOR),
                ),
                StrokeKind::Outside,
            );
        }

        if self.show_arm {
            self.draw_arm(painter, origin);
        }
    }

    /// Draws the arm column, the pivoting segment, and the gripper.
    fn draw_arm(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let arm = &self.config.arm;
        let geometry = ArmGeometry::compute(
            arm,
            &self.arm,
            self.scene.len(),
            self.config.box_height,
            self.config.box_gap,
        );
        let arm_color = color(arm.color);
        let gripper_color = color(arm.gripper_color);
        let thickness = arm.thickness as f32;

        let column = egui::Rect::from_min_size(
            point(origin, geometry.column_min),
            egui::vec2(geometry.column_size.0, geometry.column_size.1),
        );
        painter.rect_filled(column, 0.0, arm_color);

        let start = point(origin, geometry.segment_start);
        let end = point(origin, geometry.segment_end);
        painter.line_segment([start, end], egui::Stroke::new(thickness, arm_color));

        let gripper = egui::Rect::from_center_size(
            end,
            egui::vec2(arm.gripper_size as f32, arm.gripper_size as f32),
        );
        painter.rect_filled(gripper, 2.0, gripper_color);

        // Pivot hub with a marker along the smoothed base heading
        painter.circle_filled(start, thickness * 0.75, arm_color);
        painter.line_segment(
            [start, point(origin, geometry.base_marker_end)],
            egui::Stroke::new(thickness * 0.25, gripper_color),
        );
    }
}
