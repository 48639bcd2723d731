use std::time::{Duration, Instant};

/// Fixed-interval tick schedule. The event loop waits until [`TickClock::deadline`] and
/// then asks [`TickClock::poll`] whether a tick is due.
pub struct TickClock {
    pub interval: Duration,
    next_tick: Option<Instant>,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    /// Returns true at most once per interval. The first poll always ticks. A clock that
    /// fell more than an interval behind skips the missed ticks instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(next_tick) if now < next_tick => false,
            Some(next_tick) if now < next_tick + self.interval => {
                self.next_tick = Some(next_tick + self.interval);
                true
            }
            _ => {
                self.next_tick = Some(now + self.interval);
                true
            }
        }
    }

    /// When the next tick is due, or `None` if the clock has not started.
    pub fn deadline(&self) -> Option<Instant> {
        self.next_tick
    }
}
