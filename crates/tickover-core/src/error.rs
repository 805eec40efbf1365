//! Error types for tickover-core.

use thiserror::Error;

/// Errors produced by timer operations and persistence.
#[derive(Error, Debug)]
pub enum TimerError {
    /// A timer was started with a zero, negative, or non-finite duration.
    #[error("cannot start a timer with non-positive duration ({0} seconds)")]
    InvalidDuration(f32),

    /// A persisted record was shorter than the fixed layout requires.
    #[error("persisted timer record too short: expected {expected} bytes, got {actual}")]
    TruncatedRecord { expected: usize, actual: usize },

    /// A persisted record decoded to NaN or infinite duration fields.
    #[error("persisted timer record contains non-finite duration values")]
    NonFiniteRecord,

    /// A persisted record decoded to a negative duration or cycle count.
    #[error("persisted timer record has a negative {field} field")]
    NegativeRecordField { field: &'static str },

    /// Timer configuration failed to parse.
    #[error("failed to parse timer configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for TimerError.
pub type Result<T, E = TimerError> = std::result::Result<T, E>;
