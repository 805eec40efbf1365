//! Fixed binary record for timer persistence.
//!
//! The record is 20 bytes, little-endian, no magic number and no version
//! tag — the host save system frames it:
//!
//! - Bytes 0-3:   initial (f32)
//! - Bytes 4-7:   current (f32)
//! - Bytes 8-15:  last (i64, unix seconds)
//! - Bytes 16-19: cycles (i32)

use bytes::{Buf, BufMut};

use crate::error::{Result, TimerError};
use crate::state::TimerState;

/// Size of one persisted record in bytes. Callers can use this to
/// pre-allocate buffers.
pub const RECORD_SIZE: usize = 20;

/// Write `state` to `buf` in record order.
pub fn encode(state: &TimerState, buf: &mut impl BufMut) {
    buf.put_f32_le(state.initial);
    buf.put_f32_le(state.current);
    buf.put_i64_le(state.last);
    buf.put_i32_le(state.cycles);
}

/// Read one record from `buf`.
///
/// Short buffers fail explicitly rather than defaulting fields; the
/// caller decides whether to fall back to a default-initialized timer.
pub fn decode(buf: &mut impl Buf) -> Result<TimerState> {
    if buf.remaining() < RECORD_SIZE {
        return Err(TimerError::TruncatedRecord {
            expected: RECORD_SIZE,
            actual: buf.remaining(),
        });
    }

    let state = TimerState {
        initial: buf.get_f32_le(),
        current: buf.get_f32_le(),
        last: buf.get_i64_le(),
        cycles: buf.get_i32_le(),
    };

    if !state.initial.is_finite() || !state.current.is_finite() {
        return Err(TimerError::NonFiniteRecord);
    }

    // The catch-up arithmetic relies on these domains; a record that
    // violates them is corrupt, not merely drifted.
    if state.initial < 0.0 {
        return Err(TimerError::NegativeRecordField { field: "initial" });
    }
    if state.current < 0.0 {
        return Err(TimerError::NegativeRecordField { field: "current" });
    }
    if state.cycles < 0 {
        return Err(TimerError::NegativeRecordField { field: "cycles" });
    }

    Ok(state)
}
