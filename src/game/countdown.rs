//! Countdown arithmetic shared by every scheduler implementation.
//!
//! A countdown of `duration_ms` steps down by `interval_ms` at a time. Each
//! step that leaves time on the clock is a tick reporting what remains; the
//! step that reaches zero is the expiry. The final step is shorter than an
//! interval when the duration is not a multiple of it.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    Tick(u64),
    Expire,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_ms: u64,
    interval_ms: u64,
    finished: bool,
}

impl Countdown {
    pub fn new(duration_ms: u64, interval_ms: u64) -> Self {
        Self {
            remaining_ms: duration_ms,
            // A zero interval would never make progress.
            interval_ms: interval_ms.max(1),
            finished: false,
        }
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for Countdown {
    /// Delay to wait before the step fires, and the step itself.
    type Item = (Duration, CountdownStep);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let elapsed = self.remaining_ms.min(self.interval_ms);
        self.remaining_ms -= elapsed;
        let step = if self.remaining_ms == 0 {
            self.finished = true;
            CountdownStep::Expire
        } else {
            CountdownStep::Tick(self.remaining_ms)
        };
        Some((Duration::from_millis(elapsed), step))
    }
}
