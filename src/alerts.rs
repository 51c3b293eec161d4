//! Temperature threshold alerter.
//!
//! A two-level hysteresis state machine evaluated once per tick after the
//! history has been updated.
//!
//! ## Alert lifecycle
//!
//! 1. Temperature reaches the warning threshold → one `Warning` alert,
//!    `warning_active` latches.
//! 2. Temperature reaches the critical threshold → one `Critical` alert,
//!    both flags latch.
//! 3. While either flag is latched, repeated readings in the same band
//!    emit nothing.
//! 4. Only a reading below the *warning* threshold clears both flags.
//!    Dropping from the critical band into the warning band does not re-arm
//!    anything.

use core::fmt;

use log::info;
use serde::Serialize;

use crate::config::Thresholds;

/// Latched alert flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlertState {
    pub warning_active: bool,
    pub critical_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertLevel {
    Warning,
    Critical,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// An alert raised by a threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub temperature_c: f64,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: CPU temperature has reached {}\u{00b0}C.",
            self.level, self.temperature_c
        )
    }
}

/// Pure transition function.
pub fn evaluate(
    temperature_c: f64,
    thresholds: &Thresholds,
    state: AlertState,
) -> (AlertState, Option<AlertLevel>) {
    if temperature_c >= thresholds.critical_c {
        if state.critical_active {
            return (state, None);
        }
        let next = AlertState {
            warning_active: true,
            critical_active: true,
        };
        (next, Some(AlertLevel::Critical))
    } else if temperature_c >= thresholds.warning_c {
        if state.warning_active {
            return (state, None);
        }
        let next = AlertState {
            warning_active: true,
            ..state
        };
        (next, Some(AlertLevel::Warning))
    } else {
        (AlertState::default(), None)
    }
}

/// Owns the latched [`AlertState`] and logs transitions.
#[derive(Debug, Default)]
pub struct ThresholdAlerter {
    state: AlertState,
}

impl ThresholdAlerter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one temperature reading.  Returns the alert to raise, if any.
    pub fn evaluate(&mut self, temperature_c: f64, thresholds: &Thresholds) -> Option<Alert> {
        let (next, level) = evaluate(temperature_c, thresholds, self.state);

        if self.state != AlertState::default() && next == AlertState::default() {
            info!("Temperature back below warning ({temperature_c}\u{00b0}C), alerts re-armed");
        }
        self.state = next;

        level.map(|level| Alert {
            level,
            temperature_c,
        })
    }

    pub fn state(&self) -> AlertState {
        self.state
    }
}
