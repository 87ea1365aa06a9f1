//! Fixed rate tick clock.

use std::time::{Duration, Instant};

/// Decides when the next simulation tick is due. The window repaints much
/// more often than the game ticks, so most frames only redraw.
#[derive(Debug, Clone)]
pub struct Clock {
    delay: Duration,
    last: Option<Instant>,
}

impl Clock {
    /// Default delay between ticks, that's 10 ticks per second.
    pub const DELAY: Duration = Duration::from_millis(100);

    /// Return a new [`Clock`] ticking every `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    /// Return `true` if a tick is due at `now` and start waiting for the next
    /// one. The very first call is always due.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.delay => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Delay between ticks.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(Self::DELAY)
    }
}
