//! The persistent timer itself.
//!
//! `PersistentTimer` glues the durable [`TimerState`] to a live
//! [`Countdown`] and runs catch-up whenever a persisted record is
//! loaded. It is single-threaded by design: the host loop (usually via
//! [`crate::runtime::Ticker`]) calls [`PersistentTimer::tick`]
//! periodically, and every mutation fires the change-notification list
//! so observers can refresh without polling.

use bytes::{Buf, BufMut};
use tracing::{debug, info, warn};

use crate::catch_up::catch_up;
use crate::clock::{Clock, SystemClock};
use crate::codec;
use crate::error::{Result, TimerError};
use crate::events::{Observers, SubscriptionId};
use crate::runtime::{Countdown, CountdownEvent};
use crate::state::{TimerConfig, TimerState};

pub struct PersistentTimer {
    config: TimerConfig,
    state: TimerState,
    /// Created lazily on first use; reconstructed each session, never
    /// persisted.
    countdown: Option<Countdown>,
    observers: Observers,
    clock: Box<dyn Clock>,
}

impl PersistentTimer {
    pub fn new(config: TimerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Construct with an injected clock. Tests use [`crate::ManualClock`]
    /// to simulate process gaps.
    pub fn with_clock(config: TimerConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            state: TimerState::default(),
            countdown: None,
            observers: Observers::default(),
            clock: Box::new(clock),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Snapshot of the durable fields.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Completed cycles not yet drained.
    pub fn cycles(&self) -> i32 {
        self.state.cycles
    }

    /// Remaining seconds in the active cycle.
    pub fn remaining(&self) -> f32 {
        self.state.current
    }

    /// Duration of one cycle; `0.0` until the timer is first started.
    pub fn initial(&self) -> f32 {
        self.state.initial
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended(self.config.repeat)
    }

    pub fn repeat(&self) -> bool {
        self.config.repeat
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.config.repeat = repeat;
    }

    // ── Notifications ────────────────────────────────────────────────

    /// Register a callback fired synchronously after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ── Lifecycle operations ─────────────────────────────────────────

    /// Begin a fresh cycle of `duration` seconds.
    ///
    /// Fails fast for non-positive (or NaN) durations without touching
    /// any state. `reset_cycles` also zeroes the undrained cycle count.
    pub fn start_new_timer(&mut self, duration: f32, reset_cycles: bool) -> Result<()> {
        if duration.is_nan() || duration <= 0.0 {
            return Err(TimerError::InvalidDuration(duration));
        }

        self.state.initial = duration;
        self.state.current = duration;
        self.state.last = self.clock.now();
        if reset_cycles {
            self.state.cycles = 0;
        }
        self.countdown_mut().set_time(duration);
        self.observers.notify();
        Ok(())
    }

    /// Drain the accumulated cycle count, resetting it to zero.
    ///
    /// Returns 0 without notifying when there was nothing to drain.
    pub fn extract_cycles(&mut self) -> i32 {
        if self.state.cycles <= 0 {
            return 0;
        }

        let drained = std::mem::take(&mut self.state.cycles);
        self.observers.notify();
        drained
    }

    /// Initialize from configuration when no persisted record exists.
    pub fn load_default(&mut self) -> Result<()> {
        self.state = TimerState {
            initial: self.config.default_initial,
            current: 0.0,
            last: self.clock.now(),
            cycles: 0,
        };

        if self.config.start_by_default {
            self.start_new_timer(self.config.default_initial, true)
        } else {
            self.observers.notify();
            Ok(())
        }
    }

    /// Restore from a persisted record and reconcile elapsed time.
    ///
    /// On decode failure the previous state is left untouched; the
    /// caller decides whether to fall back to [`Self::load_default`].
    pub fn load(&mut self, buf: &mut impl Buf) -> Result<()> {
        self.state = codec::decode(buf)?;

        let now = self.clock.now();
        let report = catch_up(&mut self.state, self.config.repeat, now);
        if report.clock_went_backward {
            warn!(last = self.state.last, "wall clock behind saved state, gap clamped to zero");
        }
        debug!(
            completed = report.completed,
            remaining = self.state.current,
            cycles = self.state.cycles,
            "catch-up applied on load"
        );

        if self.state.is_started() && !self.is_ended() {
            // Resume the live countdown from the reconciled remainder,
            // not from a full cycle.
            let remaining = self.state.current;
            self.countdown_mut().set_time(remaining);
        }

        self.observers.notify();
        Ok(())
    }

    /// Append the 20-byte persisted record to `buf`.
    pub fn save(&self, buf: &mut impl BufMut) {
        codec::encode(&self.state, buf);
    }

    // ── Live ticking ─────────────────────────────────────────────────

    /// Pump the live countdown against the wall clock.
    ///
    /// End-of-cycle handling (cycle counted, re-arm decided) completes
    /// before this call returns, so a later tick can never observe a
    /// half-processed end.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };

        match countdown.tick(now) {
            Some(CountdownEvent::Tick { remaining }) => {
                self.state.last = now;
                self.state.current = remaining.max(0.0);
                self.observers.notify();
            }
            Some(CountdownEvent::Ended) => {
                info!(cycles = self.state.cycles + 1, "timer cycle ended");
                self.state.last = now;
                self.state.current = 0.0;
                self.state.cycles = self.state.cycles.saturating_add(1);
                if self.config.repeat {
                    // Snap straight into the next cycle so a save taken
                    // before the next tick does not replay this end.
                    self.state.current = self.state.initial;
                    countdown.set_time(self.state.initial);
                }
                self.observers.notify();
            }
            None => {}
        }
    }

    fn countdown_mut(&mut self) -> &mut Countdown {
        self.countdown.get_or_insert_with(|| {
            debug!("creating live countdown instance");
            Countdown::new()
        })
    }
}
