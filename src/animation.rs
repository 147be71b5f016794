//! Swap animation.
//!
//! A swap animation moves two boxes toward each other and back in a ping-pong
//! pattern while the arm tracks them, then exchanges their labels. Progress is
//! derived from the elapsed time since the animation started, so the render
//! loop keeps handling input while it plays and dropped frames only make the
//! animator catch up on the ticks it missed.

use crate::arm::ArmState;
use crate::config::DemoConfig;
use crate::types::Scene;
use thiserror::Error;

/// Reasons a swap animation could not start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimationError {
    /// Another swap is still playing.
    #[error("a swap between boxes {a} and {b} is already running")]
    Busy {
        /// First box of the running swap
        a: usize,
        /// Second box of the running swap
        b: usize,
    },
    /// Both ends of the swap are the same box.
    #[error("cannot swap box {0} with itself")]
    SameShape(usize),
    /// An index does not name a box in the scene.
    #[error("box index {index} is out of range for a scene of {len}")]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// Number of boxes in the scene
        len: usize,
    },
}

/// Tick timing of a swap animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    /// Ticks per second
    pub tick_rate: f64,
    /// Total number of ticks in one animation
    pub total_ticks: u32,
    /// Length of one ping-pong batch in ticks
    pub batch_ticks: u32,
    /// Fraction of heading error the arm base closes per tick
    pub smoothing: f32,
}

impl AnimationTiming {
    /// Derives the timing from the demo configuration.
    pub fn from_config(config: &DemoConfig) -> Self {
        let tick_rate = config.tick_rate_hz as f64;
        let total_ticks = (config.swap_duration_ms as f64 * tick_rate / 1000.0).round() as u32;
        Self {
            tick_rate,
            total_ticks,
            batch_ticks: config.batch_ticks().max(2),
            smoothing: config.arm.smoothing,
        }
    }

    /// Wall-clock length of the animation in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.total_ticks as f64 / self.tick_rate
    }

    /// Vertical offset after `tick` ticks: rises by one per tick for the first
    /// half of each batch, then falls back to zero by the batch boundary.
    pub fn ping_pong_offset(&self, tick: u32) -> i32 {
        let k = tick % self.batch_ticks;
        let half = self.batch_ticks / 2;
        if k <= half {
            k as i32
        } else {
            (self.batch_ticks - k) as i32
        }
    }
}

/// A swap that is currently playing.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapAnimation {
    /// Box moving down first
    pub a: usize,
    /// Box moving up first
    pub b: usize,
    start_time: f64,
    origin_a: i32,
    origin_b: i32,
    ticks_applied: u32,
}

impl SwapAnimation {
    /// Returns true if the box at `index` is part of this swap.
    pub fn involves(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

/// What [`Animator::advance`] did this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationProgress {
    /// Nothing is playing
    Idle,
    /// A swap is playing; `fraction` runs from 0 to 1
    Running {
        /// Completed share of the animation
        fraction: f64,
    },
    /// The swap between `a` and `b` completed this frame
    Finished {
        /// First box of the swap
        a: usize,
        /// Second box of the swap
        b: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum AnimationState {
    Idle,
    Animating(SwapAnimation),
}

/// Drives swap animations over a [`Scene`].
#[derive(Debug, Clone)]
pub struct Animator {
    timing: AnimationTiming,
    state: AnimationState,
}

impl Animator {
    /// Creates an idle animator with the given timing.
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            state: AnimationState::Idle,
        }
    }

    /// The swap currently playing, if any.
    pub fn current(&self) -> Option<&SwapAnimation> {
        match &self.state {
            AnimationState::Idle => None,
            AnimationState::Animating(swap) => Some(swap),
        }
    }

    /// Returns true while a swap is playing.
    pub fn is_animating(&self) -> bool {
        self.current().is_some()
    }

    /// Returns true if the box at `index` is being moved by the running swap.
    pub fn is_animating_shape(&self, index: usize) -> bool {
        self.current().is_some_and(|swap| swap.involves(index))
    }

    /// Starts swapping boxes `a` and `b` at time `now` (seconds).
    pub fn start(&mut self, a: usize, b: usize, now: f64, scene: &Scene) -> Result<(), AnimationError> {
        if let Some(swap) = self.current() {
            return Err(AnimationError::Busy { a: swap.a, b: swap.b });
        }
        if a == b {
            return Err(AnimationError::SameShape(a));
        }
        let len = scene.len();
        for index in [a, b] {
            if index >= len {
                return Err(AnimationError::OutOfRange { index, len });
            }
        }
        self.state = AnimationState::Animating(SwapAnimation {
            a,
            b,
            start_time: now,
            origin_a: scene.shapes[a].position.1,
            origin_b: scene.shapes[b].position.1,
            ticks_applied: 0,
        });
        Ok(())
    }

    /// Applies every tick that elapsed up to `now` and finishes the swap once
    /// its duration has passed.
    pub fn advance(&mut self, now: f64, scene: &mut Scene, arm: &mut ArmState) -> AnimationProgress {
        let timing = self.timing;
        let AnimationState::Animating(swap) = &mut self.state else {
            return AnimationProgress::Idle;
        };

        let elapsed = (now - swap.start_time).max(0.0);
        let due_ticks = ((elapsed * timing.tick_rate).floor() as u32).min(timing.total_ticks);

        for tick in swap.ticks_applied + 1..=due_ticks {
            let offset = timing.ping_pong_offset(tick);
            scene.shapes[swap.a].position.1 = swap.origin_a + offset;
            scene.shapes[swap.b].position.1 = swap.origin_b - offset;
            arm.track(
                scene.shapes[swap.a].position,
                scene.shapes[swap.b].position,
                timing.smoothing,
            );
        }
        swap.ticks_applied = swap.ticks_applied.max(due_ticks);

        if elapsed < timing.duration_secs() {
            return AnimationProgress::Running {
                fraction: elapsed / timing.duration_secs(),
            };
        }

        let (a, b) = (swap.a, swap.b);
        scene.shapes[a].position.1 = swap.origin_a;
        scene.shapes[b].position.1 = swap.origin_b;
        scene.swap_labels(a, b);
        self.state = AnimationState::Idle;
        AnimationProgress::Finished { a, b }
    }
}
