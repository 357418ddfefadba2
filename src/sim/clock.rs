//! Wall-clock collaborators

use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub trait Clock {
    /// Whole seconds since the Unix epoch
    fn now_secs(&self) -> u64;

    /// Wait before the next step
    fn pause(&mut self, duration: Duration);
}

/// Real time; pausing sleeps the thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Simulated time that only moves when paused
///
/// Every pause advances by at least `tick`, so a zero frame delay still
/// reaches a deadline.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    pub elapsed: Duration,
    tick: Duration,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            tick: Self::DEFAULT_TICK,
        }
    }
}

impl ManualClock {
    /// Smallest advance per pause
    pub const DEFAULT_TICK: Duration = Duration::from_millis(1);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(secs: u64) -> Self {
        Self {
            elapsed: Duration::from_secs(secs),
            ..Self::default()
        }
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    fn pause(&mut self, duration: Duration) {
        self.elapsed += duration.max(self.tick);
    }
}
