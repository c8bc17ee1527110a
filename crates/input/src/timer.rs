//! Periodic timer driven by elapsed frame time.

use crate::map::RawEvent;
use crate::types::TimerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicTimer {
    id: TimerId,
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl PeriodicTimer {
    /// A disarmed timer; `interval_ms` is clamped to at least 1.
    pub fn new(id: TimerId, interval_ms: u32) -> Self {
        Self {
            id,
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed: false,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start counting from zero.
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed_ms = 0;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    /// Advance by `elapsed_ms` and return how many times the timer fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fired
    }

    /// The event delivered when this timer fires.
    pub fn event(&self) -> RawEvent {
        RawEvent::TimerFired(self.id)
    }
}
