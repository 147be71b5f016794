//! User interface and render loop for the box swapping demo.
//!
//! # Module Organization
//!
//! - `state` - The main `SwapApp` struct and interaction state
//! - `canvas` - Pointer handling: dragging and the swap gesture
//! - `rendering` - Drawing boxes and the robotic arm

mod canvas;
mod rendering;
mod state;

pub use canvas::PointerFrame;
pub use state::{InteractionState, SwapApp};

use crate::animation::AnimationProgress;
use crate::types::SortOrder;
use eframe::egui;

/// Layout commands bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCommand {
    /// Restack the boxes in their current order
    Reset,
    /// Sort by label and restack
    Sort(SortOrder),
    /// Show or hide the arm overlay
    ToggleArm,
}

impl LayoutCommand {
    fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::R => Some(Self::Reset),
            egui::Key::D => Some(Self::Sort(SortOrder::Descending)),
            egui::Key::A => Some(Self::Sort(SortOrder::Ascending)),
            egui::Key::H => Some(Self::ToggleArm),
            _ => None,
        }
    }
}

impl eframe::App for SwapApp {
    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

impl SwapApp {
    /// Runs one iteration of the render loop.
    ///
    /// Ticks the clock, dispatches keyboard and pointer input, advances the
    /// swap animation, draws the scene on a white canvas, and schedules the
    /// next tick. A clock failure closes the window instead.
    pub fn run_frame(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        match self.clock.tick(now) {
            Ok(tick) if self.clock.is_late(&tick) => {
                log::debug!("frame {} took {:.1} ms", tick.frame, tick.delta * 1000.0);
            }
            Ok(_) => {}
            Err(err) => {
                log::error!("frame clock failed, exiting: {err}");
                self.quit_requested = true;
            }
        }
        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.handle_layout_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.draw_canvas(ui, now);
            });

        ctx.request_repaint_after(self.clock.tick_interval());
    }

    /// Applies the layout command for every key pressed this frame.
    fn handle_layout_keys(&mut self, ctx: &egui::Context) {
        let commands: Vec<LayoutCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => LayoutCommand::from_key(*key),
                    _ => None,
                })
                .collect()
        });
        for command in commands {
            self.apply_layout_command(command);
        }
    }

    /// Applies a single layout command.
    ///
    /// Reset and sort are ignored while a swap is playing since they would
    /// move the boxes out from under it.
    pub fn apply_layout_command(&mut self, command: LayoutCommand) {
        if command == LayoutCommand::ToggleArm {
            self.show_arm = !self.show_arm;
            log::debug!("arm overlay visible: {}", self.show_arm);
            return;
        }
        if self.animator.is_animating() {
            log::debug!("ignoring {command:?} while a swap is running");
            return;
        }
        self.interaction.clear();
        match command {
            LayoutCommand::Reset => self.scene.reset_layout(),
            LayoutCommand::Sort(order) => self.scene.sort_by_label(order),
            LayoutCommand::ToggleArm => {}
        }
        log::debug!("{command:?} -> {:?}", self.scene.labels());
    }

    /// Handles canvas input and draws the scene for this frame.
    fn draw_canvas(&mut self, ui: &mut egui::Ui, now: f64) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let origin = response.rect.min;

        self.handle_pointer(PointerFrame::sample(ui), origin, now);

        if let AnimationProgress::Finished { a, b } =
            self.animator.advance(now, &mut self.scene, &mut self.arm)
        {
            log::info!(
                "swap finished: box {a} is now '{}', box {b} is now '{}'",
                self.scene.shapes[a].label,
                self.scene.shapes[b].label
            );
        }

        self.render_scene(&painter, origin);
    }
}

#[cfg(test)]
mod tests;
