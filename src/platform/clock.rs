//! The real monotonic clock.

use std::time::{Duration, Instant};

use crate::session::Clock;

/// Wall clock backed by [`Instant`] and a blocking thread sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
