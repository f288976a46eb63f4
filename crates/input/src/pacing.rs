//! Fixed-cadence tick clock for the driver loop.
//!
//! Every tick lasts a full period even when a key arrives early: the driver polls
//! for input until the deadline, then sleeps out whatever is left. Holding a key
//! therefore never speeds up gravity.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    period: Duration,
    deadline: Instant,
}

impl TickClock {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            deadline: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current tick; zero once the deadline has passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Start the next tick. A late tick restarts the cadence from `now` instead of
    /// bursting to catch up.
    pub fn advance(&mut self, now: Instant) {
        let next = self.deadline + self.period;
        self.deadline = if next > now { next } else { now + self.period };
    }
}
