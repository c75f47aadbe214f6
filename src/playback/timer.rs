//! The repeating timer owned by a playback controller

use std::time::{Duration, Instant};

/// A repeating deadline.
///
/// A controller holds at most one of these in an `Option`; dropping it is the
/// cancellation. Ticks are scheduled on a fixed grid from the arm instant, so a
/// late poll catches up instead of drifting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    interval: Duration,
    next_fire: Instant,
}

impl Timer {
    /// Arm a timer whose first tick is one interval after `now`
    pub fn start(now: Instant, interval: Duration) -> Self {
        Timer {
            interval,
            next_fire: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_fire(&self) -> Instant {
        self.next_fire
    }

    /// Whether a tick is pending at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_fire
    }

    /// Consume one pending tick
    pub fn advance(&mut self) {
        self.next_fire += self.interval;
    }

    /// Time left until the next tick, zero when one is already due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_fire.saturating_duration_since(now)
    }
}
