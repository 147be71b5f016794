//! Frame pacing for the render loop.

use std::time::Duration;
use thiserror::Error;

/// Failures of the frame time source. Any of these ends the render loop.
#[derive(Debug, Error, PartialEq)]
pub enum ClockError {
    /// The reported time is NaN or infinite.
    #[error("frame time is not finite: {0}")]
    NonFinite(f64),
    /// The reported time is earlier than the previous frame.
    #[error("frame time went backwards from {previous:.3}s to {current:.3}s")]
    WentBackwards {
        /// Time of the previous frame
        previous: f64,
        /// Time reported now
        current: f64,
    },
}

/// One accepted frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Zero-based frame counter
    pub frame: u64,
    /// Seconds since the previous frame (zero on the first)
    pub delta: f64,
}

/// Paces the render loop at a fixed tick rate and validates frame times.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_interval: f64,
    last_time: Option<f64>,
    frames: u64,
}

impl FrameClock {
    /// Creates a clock ticking `tick_rate_hz` times per second.
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            tick_interval: 1.0 / tick_rate_hz.max(1) as f64,
            last_time: None,
            frames: 0,
        }
    }

    /// Records a frame at `now` seconds.
    pub fn tick(&mut self, now: f64) -> Result<FrameTick, ClockError> {
        if !now.is_finite() {
            return Err(ClockError::NonFinite(now));
        }
        let delta = match self.last_time {
            Some(previous) if now < previous => {
                return Err(ClockError::WentBackwards {
                    previous,
                    current: now,
                });
            }
            Some(previous) => now - previous,
            None => 0.0,
        };
        let tick = FrameTick {
            frame: self.frames,
            delta,
        };
        self.last_time = Some(now);
        self.frames += 1;
        Ok(tick)
    }

    /// Delay until the next tick boundary.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.tick_interval)
    }

    /// Returns true if the frame arrived more than two tick intervals after the previous one.
    pub fn is_late(&self, tick: &FrameTick) -> bool {
        tick.delta > self.tick_interval * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_frames_and_deltas() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.tick(1.0), Ok(FrameTick { frame: 0, delta: 0.0 }));
        let second = clock.tick(1.5).unwrap();
        assert_eq!(second.frame, 1);
        assert!((second.delta - 0.5).abs() < 1e-12);
        assert_eq!(clock.tick(1.6).unwrap().frame, 2);
    }

    #[test]
    fn same_time_is_accepted() {
        let mut clock = FrameClock::new(60);
        clock.tick(2.0).unwrap();
        assert_eq!(clock.tick(2.0).unwrap().delta, 0.0);
    }

    #[test]
    fn rejects_time_going_backwards() {
        let mut clock = FrameClock::new(60);
        clock.tick(2.0).unwrap();
        assert_eq!(
            clock.tick(1.0),
            Err(ClockError::WentBackwards {
                previous: 2.0,
                current: 1.0
            })
        );
        // A rejected frame is not counted
        assert_eq!(clock.tick(2.5).unwrap().frame, 1);
    }

    #[test]
    fn rejects_non_finite_time() {
        let mut clock = FrameClock::new(60);
        assert!(matches!(clock.tick(f64::NAN), Err(ClockError::NonFinite(_))));
        assert!(matches!(clock.tick(f64::INFINITY), Err(ClockError::NonFinite(_))));
    }

    #[test]
    fn frames_over_two_ticks_apart_are_late() {
        let mut clock = FrameClock::new(60);
        let first = clock.tick(0.0).unwrap();
        assert!(!clock.is_late(&first));
        let on_time = clock.tick(1.0 / 60.0).unwrap();
        assert!(!clock.is_late(&on_time));
        let stalled = clock.tick(0.5).unwrap();
        assert!(clock.is_late(&stalled));
    }

    #[test]
    fn tick_interval_is_sixtieth_of_a_second() {
        let clock = FrameClock::new(60);
        let interval = clock.tick_interval().as_secs_f64();
        assert!((interval - 1.0 / 60.0).abs() < 1e-9);
    }
}
