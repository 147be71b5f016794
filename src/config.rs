//! Demo configuration.
//!
//! All visual and timing knobs of the demo live in [`DemoConfig`]. The defaults
//! reproduce the stock four-box scene; a config can also be round-tripped
//! through JSON for tweaking.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating a [`DemoConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The scene would start empty.
    #[error("config must describe at least one box")]
    NoBoxes,
    /// A size that must be positive is zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: i64,
    },
    /// A size that must not be negative is below zero.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: i64,
    },
    /// A pixel extent or tick count derived from the config overflows.
    #[error("config is too large: {0} overflows")]
    TooLarge(&'static str),
    /// The animation speed does not divide the tick rate into a usable batch.
    #[error("animation speed {speed} leaves fewer than 2 ticks per batch at {tick_rate} Hz")]
    BatchTooShort {
        /// Configured tick rate
        tick_rate: u32,
        /// Configured animation speed
        speed: u32,
    },
}

/// One box of the startup stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Single character drawn in the middle of the box
    pub label: char,
    /// Fill color as RGB
    pub color: [u8; 3],
}

/// Appearance of the robotic arm overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Pivot X coordinate
    pub base_x: i32,
    /// Pivot Y coordinate
    pub base_y: i32,
    /// Thickness of the column and the segment
    pub thickness: i32,
    /// Arm color as RGB
    pub color: [u8; 3],
    /// Side length of the gripper square
    pub gripper_size: i32,
    /// Gripper color as RGB
    pub gripper_color: [u8; 3],
    /// Fraction of the heading error closed per animation tick
    pub smoothing: f32,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            base_x: ARM_BASE_X,
            base_y: ARM_BASE_Y,
            thickness: ARM_THICKNESS,
            color: ARM_COLOR,
            gripper_size: GRIPPER_SIZE,
            gripper_color: GRIPPER_COLOR,
            smoothing: ARM_SMOOTHING,
        }
    }
}

/// Complete configuration of the demo window, scene, and animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub window_width: i32,
    /// Window height in pixels
    pub window_height: i32,
    /// Box width in pixels
    pub box_width: i32,
    /// Box height in pixels
    pub box_height: i32,
    /// Vertical gap between stacked boxes
    pub box_gap: i32,
    /// Left edge of the stack
    pub stack_x: i32,
    /// Boxes of the startup stack, top to bottom
    pub boxes: Vec<BoxSpec>,
    /// Render and animation tick rate
    pub tick_rate_hz: u32,
    /// Length of one swap animation in milliseconds
    pub swap_duration_ms: u64,
    /// Tick rate divisor giving the ping-pong batch length
    pub animation_speed: u32,
    /// Arm overlay appearance
    pub arm: ArmConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            box_width: BOX_WIDTH,
            box_height: BOX_HEIGHT,
            box_gap: BOX_GAP,
            stack_x: STACK_X,
            boxes: BOX_LABELS
                .iter()
                .zip(BOX_COLORS.iter())
                .map(|(label, color)| BoxSpec {
                    label: *label,
                    color: *color,
                })
                .collect(),
            tick_rate_hz: TICK_RATE_HZ,
            swap_duration_ms: SWAP_DURATION_MS,
            animation_speed: ANIMATION_SPEED,
            arm: ArmConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Parses and validates a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Checks that the configuration describes a drawable scene and a usable animation.
    ///
    /// Besides the sign checks, every pixel extent the scene and the arm derive
    /// from the config must fit in an `i32`, and the tick count of one swap
    /// must fit in a `u32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boxes.is_empty() {
            return Err(ConfigError::NoBoxes);
        }
        let sizes = [
            ("window_width", i64::from(self.window_width)),
            ("window_height", i64::from(self.window_height)),
            ("box_width", i64::from(self.box_width)),
            ("box_height", i64::from(self.box_height)),
            ("tick_rate_hz", i64::from(self.tick_rate_hz)),
            (
                "swap_duration_ms",
                i64::try_from(self.swap_duration_ms).unwrap_or(i64::MAX),
            ),
            ("animation_speed", i64::from(self.animation_speed)),
            ("arm.thickness", i64::from(self.arm.thickness)),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.box_gap < 0 {
            return Err(ConfigError::Negative {
                name: "box_gap",
                value: i64::from(self.box_gap),
            });
        }
        if self.batch_ticks() < 2 {
            return Err(ConfigError::BatchTooShort {
                tick_rate: self.tick_rate_hz,
                speed: self.animation_speed,
            });
        }
        self.check_extents()
    }

    fn check_extents(&self) -> Result<(), ConfigError> {
        fn fits<T>(name: &'static str, value: Option<T>) -> Result<T, ConfigError> {
            value.ok_or(ConfigError::TooLarge(name))
        }

        let count = fits("boxes", i32::try_from(self.boxes.len()).ok())?;
        let pitch = fits("box_height + box_gap", self.box_height.checked_add(self.box_gap))?;
        fits("stack height", count.checked_mul(pitch))?;
        fits("stack_x + box_width", self.stack_x.checked_add(self.box_width))?;
        fits(
            "arm segment length",
            self.box_height
                .checked_mul(5)
                .and_then(|length| length.checked_add(self.box_gap)),
        )?;
        fits(
            "arm.base_x - arm.thickness / 2",
            self.arm.base_x.checked_sub(self.arm.thickness / 2),
        )?;
        let ticks = fits(
            "swap_duration_ms * tick_rate_hz",
            self.swap_duration_ms.checked_mul(u64::from(self.tick_rate_hz)),
        )? / 1000;
        fits("swap tick count", u32::try_from(ticks).ok())?;
        Ok(())
    }

    /// Number of ticks in one ping-pong batch of the swap animation.
    pub fn batch_ticks(&self) -> u32 {
        self.tick_rate_hz / self.animation_speed.max(1)
    }
}
