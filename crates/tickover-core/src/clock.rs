//! Wall-clock abstraction.
//!
//! The engine anchors durability to integer unix seconds. All time reads
//! go through [`Clock`] so tests can simulate process gaps and backward
//! clock jumps without sleeping.

use std::cell::Cell;
use std::rc::Rc;

/// Source of unix-second timestamps.
pub trait Clock {
    /// Current unix time in whole seconds.
    fn now(&self) -> i64;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A hand-advanced clock for deterministic tests and simulations.
///
/// Cloning shares the underlying instant, so a copy handed to a timer
/// stays steerable from the test body.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<i64>>);

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self(Rc::new(Cell::new(now)))
    }

    pub fn set(&self, now: i64) {
        self.0.set(now);
    }

    /// Move the clock by `secs` (negative values jump backward).
    pub fn advance(&self, secs: i64) {
        self.0.set(self.0.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.0.get()
    }
}
