//! Frame pacing.

use std::thread;
use std::time::{Duration, Instant};

use crate::ports::Clock;

/// Sleeps until the next frame boundary.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time left in the current frame; useful as an input poll timeout.
    pub fn remaining(&self, rate: u32) -> Duration {
        frame_duration(rate).saturating_sub(self.last.elapsed())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, rate: u32) -> u32 {
        let remaining = self.remaining(rate);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_millis().min(u32::MAX as u128) as u32
    }
}

/// Reports exactly one frame per tick without sleeping. For headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    ticks: u64,
}

impl FixedClock {
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for FixedClock {
    fn tick(&mut self, rate: u32) -> u32 {
        self.ticks += 1;
        frame_duration(rate).as_millis() as u32
    }
}

fn frame_duration(rate: u32) -> Duration {
    Duration::from_secs(1) / rate.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_frame_length() {
        let mut clock = FixedClock::default();
        assert_eq!(clock.tick(15), 66);
        assert_eq!(clock.tick(0), 1000);
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn test_frame_clock_paces() {
        let mut clock = FrameClock::new();
        let elapsed = clock.tick(100);
        assert!(elapsed >= 9, "expected ~10ms, got {}", elapsed);
    }
}
