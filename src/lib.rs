//! # Box Swap
//!
//! A desktop demo of a stack of labeled boxes that can be dragged, re-sorted,
//! and swapped, with a robotic arm that pivots to follow each swap.
//!
//! ## Features
//! - Drag boxes with the primary mouse button
//! - Swap two boxes' labels by secondary-clicking one and then the other
//! - `R` restacks the boxes, `D`/`A` sort them by label, `H` toggles the arm
//! - Swap animations run alongside input handling at a fixed 60 Hz tick

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod animation;
mod arm;
mod clock;
mod config;
mod constants;
mod types;
mod ui;

// Re-export public types and functions
pub use animation::*;
pub use arm::*;
pub use clock::*;
pub use config::*;
pub use types::*;
pub use ui::{InteractionState, LayoutCommand, PointerFrame, SwapApp};

/// Runs the demo with the given configuration.
///
/// The configuration is validated before the window opens; an invalid one is
/// logged and reported as an `eframe::Error`.
///
/// # Example
///
/// ```no_run
/// use box_swap::{run_app, DemoConfig};
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app(DemoConfig::default())
/// }
/// ```
pub fn run_app(config: DemoConfig) -> Result<(), eframe::Error> {
    let app = SwapApp::new(config).map_err(|err| {
        log::error!("invalid configuration: {err}");
        eframe::Error::AppCreation(Box::new(err))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app.config.title.clone())
            .with_inner_size([app.config.window_width as f32, app.config.window_height as f32])
            .with_resizable(false),
        ..Default::default()
    };
    log::info!(
        "starting with {} boxes at {} Hz",
        app.scene.len(),
        app.config.tick_rate_hz
    );
    let title = app.config.title.clone();
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
}
