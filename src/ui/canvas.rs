//! Canvas interaction functionality.
//!
//! This module handles box dragging with the primary button, the two-click swap
//! gesture with the secondary button, and coordinate conversion between screen
//! and scene space.

use super::state::SwapApp;
use eframe::egui;

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    /// Latest pointer position in screen space
    pub pos: Option<egui::Pos2>,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Primary button is held
    pub primary_down: bool,
    /// Secondary button went down this frame
    pub secondary_pressed: bool,
}

impl PointerFrame {
    /// Reads the pointer state from egui's input.
    pub fn sample(ui: &egui::Ui) -> Self {
        ui.input(|i| Self {
            pos: i.pointer.latest_pos(),
            primary_pressed: i.pointer.primary_pressed(),
            primary_down: i.pointer.primary_down(),
            secondary_pressed: i.pointer.secondary_pressed(),
        })
    }
}

impl SwapApp {
    /// Converts a screen position to integer scene coordinates.
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Position in screen space (pixels)
    /// * `origin` - Top-left corner of the canvas in screen space
    pub fn screen_to_scene(screen_pos: egui::Pos2, origin: egui::Pos2) -> (i32, i32) {
        let local = screen_pos - origin;
        (local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Converts scene coordinates to a screen position.
    pub fn scene_to_screen(scene_pos: (f32, f32), origin: egui::Pos2) -> egui::Pos2 {
        origin + egui::vec2(scene_pos.0, scene_pos.1)
    }

    /// Dispatches one frame of pointer input.
    ///
    /// # Arguments
    ///
    /// * `pointer` - Pointer state for this frame
    /// * `origin` - Top-left corner of the canvas in screen space
    /// * `now` - Frame time in seconds
    pub fn handle_pointer(&mut self, pointer: PointerFrame, origin: egui::Pos2, now: f64) {
        let scene_pos = pointer.pos.map(|pos| Self::screen_to_scene(pos, origin));

        if let Some(pos) = scene_pos {
            if pointer.secondary_pressed {
                self.press_secondary(pos, now);
            }
            if pointer.primary_pressed {
                self.press_primary(pos);
            }
            if pointer.primary_down {
                self.drag_to(pos);
            }
        }

        if !pointer.primary_down {
            self.release_primary();
        }
    }

    /// Starts dragging the box under the cursor, if any.
    ///
    /// Boxes that are part of a running swap cannot be picked up.
    pub fn press_primary(&mut self, pos: (i32, i32)) {
        let Some(index) = self.scene.hit_test(pos.0, pos.1) else {
            return;
        };
        if self.animator.is_animating_shape(index) {
            log::debug!("box {index} is swapping; ignoring drag");
            return;
        }
        let (x, y) = self.scene.shapes[index].position;
        self.interaction.dragging = Some(index);
        self.interaction.drag_offset = (pos.0 - x, pos.1 - y);
    }

    /// Moves the dragged box so it keeps its offset from the cursor.
    pub fn drag_to(&mut self, pos: (i32, i32)) {
        let Some(index) = self.interaction.dragging else {
            return;
        };
        let (dx, dy) = self.interaction.drag_offset;
        if let Some(shape) = self.scene.shapes.get_mut(index) {
            shape.position = (pos.0 - dx, pos.1 - dy);
        }
    }

    /// Ends the current drag, leaving the box where it was last moved.
    pub fn release_primary(&mut self) {
        if let Some(index) = self.interaction.dragging.take() {
            log::debug!("dropped box {index} at {:?}", self.scene.shapes[index].position);
        }
    }

    /// Handles one click of the swap gesture.
    ///
    /// The first click on a box marks it pending. A click on a different box
    /// starts the swap animation, a click on the same box cancels the gesture,
    /// and a click on empty space is ignored.
    pub fn press_secondary(&mut self, pos: (i32, i32), now: f64) {
        let Some(index) = self.scene.hit_test(pos.0, pos.1) else {
            return;
        };
        match self.interaction.pending_swap.take() {
            None => {
                self.interaction.pending_swap = Some(index);
            }
            Some(pending) if pending == index => {
                log::debug!("swap gesture on box {index} cancelled");
            }
            Some(pending) => match self.animator.start(pending, index, now, &self.scene) {
                Ok(()) => {
                    log::info!(
                        "swapping '{}' and '{}'",
                        self.scene.shapes[pending].label,
                        self.scene.shapes[index].label
                    );
                    if self
                        .interaction
                        .dragging
                        .is_some_and(|dragged| dragged == pending || dragged == index)
                    {
                        self.interaction.dragging = None;
                    }
                }
                Err(err) => log::warn!("swap rejected: {err}"),
            },
        }
    }
}
