//! # Tickover Core Library
//!
//! A persistent countdown/repeating timer that survives process restarts
//! and accounts for real-world time elapsed while the owning process was
//! not running (AFK catch-up). Wall-clock gaps are reconciled into a
//! deterministic number of completed cycles plus a remaining-time value,
//! anchored on integer unix-second snapshots.
//!
//! ## Architecture
//!
//! - **Timer**: [`PersistentTimer`] owns the durable state and a lazily
//!   created live countdown; the caller pumps it by periodically
//!   invoking `tick()`
//! - **Catch-up**: pure modular arithmetic over the saved state in
//!   [`catch_up`]
//! - **Persistence**: a 20-byte fixed little-endian record in [`codec`]
//! - **Runtime**: the caller-driven [`Countdown`] primitive and the
//!   weak-handle [`Ticker`] driver
//!
//! ## Key Components
//!
//! - [`PersistentTimer`]: lifecycle operations, change notifications
//! - [`TimerState`] / [`TimerConfig`]: durable fields vs. construction
//!   configuration
//! - [`Clock`]: injectable unix-seconds source ([`ManualClock`] for
//!   deterministic tests)

pub mod catch_up;
pub mod clock;
pub mod codec;
pub mod error;
pub mod events;
pub mod runtime;
pub mod state;
pub mod timer;

pub use catch_up::{catch_up, CatchUp};
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::RECORD_SIZE;
pub use error::{Result, TimerError};
pub use events::SubscriptionId;
pub use runtime::{Countdown, CountdownEvent, Ticker};
pub use state::{TimerConfig, TimerState};
pub use timer::PersistentTimer;
