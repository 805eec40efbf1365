//! Live countdown primitive and its polling driver.
//!
//! [`Countdown`] is wall-clock based and caller-pumped: it holds no
//! thread and no timer queue, the host loop feeds it timestamps and it
//! reports progress as events. [`Ticker`] pumps a set of persistent
//! timers through weak handles, so a dropped owner simply stops being
//! ticked — liveness is checked by the driver, never owned by it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::timer::PersistentTimer;

/// Progress report from one countdown pump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownEvent {
    /// Still running; `remaining` seconds left.
    Tick { remaining: f32 },
    /// Reached zero on this pump. Fires once per arm.
    Ended,
}

/// An inert-until-armed live countdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    remaining: f32,
    armed: bool,
    last_pump: Option<i64>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)arm to fire after `seconds`, replacing any pending arm.
    pub fn set_time(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
        self.armed = true;
        self.last_pump = None;
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Flush wall-clock time elapsed since the previous pump.
    ///
    /// Returns `None` while disarmed. Backward timestamps count as zero
    /// elapsed time.
    pub fn tick(&mut self, now: i64) -> Option<CountdownEvent> {
        if !self.armed {
            return None;
        }

        if let Some(last) = self.last_pump.replace(now) {
            let elapsed = (now - last).max(0) as f32;
            self.remaining = (self.remaining - elapsed).max(0.0);
        }

        if self.remaining <= 0.0 {
            self.armed = false;
            Some(CountdownEvent::Ended)
        } else {
            Some(CountdownEvent::Tick {
                remaining: self.remaining,
            })
        }
    }
}

/// Pumps registered timers on each pass; handles whose owner has been
/// dropped are discarded.
#[derive(Default)]
pub struct Ticker {
    handles: Vec<Weak<RefCell<PersistentTimer>>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, timer: &Rc<RefCell<PersistentTimer>>) {
        self.handles.push(Rc::downgrade(timer));
    }

    /// Number of live registrations as of the last pump.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Tick every live timer once, dropping dead handles.
    pub fn pump(&mut self) {
        self.handles.retain(|handle| match handle.upgrade() {
            Some(timer) => {
                timer.borrow_mut().tick();
                true
            }
            None => false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_countdown_stays_silent() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.tick(100), None);
        assert!(!countdown.is_armed());
    }

    #[test]
    fn first_pump_after_arm_establishes_baseline() {
        let mut countdown = Countdown::new();
        countdown.set_time(10.0);
        // No elapsed reference yet, so the full time remains.
        assert_eq!(countdown.tick(100), Some(CountdownEvent::Tick { remaining: 10.0 }));
        assert_eq!(countdown.tick(104), Some(CountdownEvent::Tick { remaining: 6.0 }));
    }

    #[test]
    fn countdown_ends_once_then_disarms() {
        let mut countdown = Countdown::new();
        countdown.set_time(5.0);
        countdown.tick(100);
        assert_eq!(countdown.tick(107), Some(CountdownEvent::Ended));
        assert!(!countdown.is_armed());
        assert_eq!(countdown.tick(110), None);
    }

    #[test]
    fn rearm_replaces_pending_countdown() {
        let mut countdown = Countdown::new();
        countdown.set_time(5.0);
        countdown.tick(100);
        countdown.set_time(30.0);
        countdown.tick(103);
        // The old baseline was cleared by the re-arm.
        assert_eq!(countdown.remaining(), 30.0);
    }

    #[test]
    fn backward_timestamp_counts_as_zero_elapsed() {
        let mut countdown = Countdown::new();
        countdown.set_time(10.0);
        countdown.tick(100);
        assert_eq!(countdown.tick(90), Some(CountdownEvent::Tick { remaining: 10.0 }));
    }
}
