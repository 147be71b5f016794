//! Application state management structures.
//!
//! This module contains the main application struct and the state it tracks
//! between frames: the scene, pointer interaction, the running animation, and
//! the frame clock.

use crate::animation::{AnimationTiming, Animator};
use crate::arm::ArmState;
use crate::clock::FrameClock;
use crate::config::{ConfigError, DemoConfig};
use crate::types::Scene;

/// State related to user interactions with boxes.
///
/// Tracks the box being dragged and the box waiting for a swap partner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Box currently being dragged with the primary button
    pub dragging: Option<usize>,
    /// Offset from the dragged box's top-left corner to the cursor
    pub drag_offset: (i32, i32),
    /// Box picked by the first click of a swap gesture
    pub pending_swap: Option<usize>,
}

impl InteractionState {
    /// Drops any drag and pending swap.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The main application structure containing UI state and the scene.
///
/// This struct implements the `eframe::App` trait and owns every piece of
/// mutable state in the demo.
pub struct SwapApp {
    /// Configuration the scene was built from
    pub config: DemoConfig,
    /// Boxes on screen
    pub scene: Scene,
    /// Drag and swap gesture state
    pub interaction: InteractionState,
    /// Swap animation driver
    pub animator: Animator,
    /// Robotic arm joint angles
    pub arm: ArmState,
    /// Whether the arm overlay is drawn
    pub show_arm: bool,
    /// Frame pacing
    pub clock: FrameClock,
    /// Set when the render loop must close the window
    pub quit_requested: bool,
}

impl SwapApp {
    /// Builds the application for a validated configuration.
    pub fn new(config: DemoConfig) -> Result<Self, ConfigError> {
        let scene = Scene::from_config(&config)?;
        let animator = Animator::new(AnimationTiming::from_config(&config));
        let clock = FrameClock::new(config.tick_rate_hz);
        Ok(Self {
            config,
            scene,
            interaction: InteractionState::default(),
            animator,
            arm: ArmState::default(),
            show_arm: true,
            clock,
            quit_requested: false,
        })
    }
}
