//! Durable timer state and non-persisted configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The durable fields of a persistent timer.
///
/// This is exactly what the binary record in [`crate::codec`] carries.
/// Everything else (repeat behaviour, defaults, the live countdown) is
/// reconstructed each session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerState {
    /// Duration of one cycle in seconds. `0.0` means the timer was never
    /// started.
    pub initial: f32,
    /// Remaining seconds in the active cycle, in `[0, initial]`.
    pub current: f32,
    /// Unix seconds at the last observation of `current`.
    pub last: i64,
    /// Completed cycles not yet drained by the owner.
    pub cycles: i32,
}

impl TimerState {
    /// Whether the timer has ever been started.
    pub fn is_started(&self) -> bool {
        self.initial != 0.0
    }

    /// Whether a non-repeating timer has run out.
    ///
    /// An ended timer stays at zero remaining time until it is explicitly
    /// restarted.
    pub fn is_ended(&self, repeat: bool) -> bool {
        self.current <= 0.0 && !repeat
    }
}

/// Configuration fixed at construction time; never persisted with the
/// timer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Whether a completed cycle immediately restarts.
    #[serde(default = "default_repeat")]
    pub repeat: bool,
    /// Start the timer from `default_initial` when no persisted record
    /// exists.
    #[serde(default)]
    pub start_by_default: bool,
    /// Cycle duration used by `load_default`, in seconds.
    #[serde(default)]
    pub default_initial: f32,
}

fn default_repeat() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            repeat: default_repeat(),
            start_by_default: false,
            default_initial: 0.0,
        }
    }
}

impl TimerConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_repeats() {
        let cfg = TimerConfig::default();
        assert!(cfg.repeat);
        assert!(!cfg.start_by_default);
        assert_eq!(cfg.default_initial, 0.0);
    }

    #[test]
    fn config_parses_with_partial_fields() {
        let cfg = TimerConfig::from_toml_str("default_initial = 90.0\n").unwrap();
        assert!(cfg.repeat);
        assert_eq!(cfg.default_initial, 90.0);
    }

    #[test]
    fn config_rejects_malformed_toml() {
        assert!(TimerConfig::from_toml_str("repeat = \"maybe\"").is_err());
    }

    #[test]
    fn fresh_state_is_not_started() {
        let state = TimerState::default();
        assert!(!state.is_started());
        assert!(state.is_ended(false));
        assert!(!state.is_ended(true));
    }
}
