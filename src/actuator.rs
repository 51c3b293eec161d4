//! Simulated cooling fan.
//!
//! Holds a speed percentage and nothing else.  No hardware is driven; the
//! only observable effect of a command is the new [`FanState`] shown by the
//! display.

use core::fmt;

use serde::Serialize;

use crate::app::commands::CommandIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FanState {
    /// Always within 0..=100.
    pub speed_percent: u8,
}

impl Default for FanState {
    fn default() -> Self {
        Self { speed_percent: 50 }
    }
}

impl fmt::Display for FanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fan Speed: {}% (Simulated)", self.speed_percent)
    }
}

/// Pure transition: bounded step up or down.
pub fn apply(state: FanState, intent: CommandIntent, step: u8) -> FanState {
    let speed_percent = match intent {
        CommandIntent::IncreaseSpeed => state.speed_percent.saturating_add(step).min(100),
        CommandIntent::DecreaseSpeed => state.speed_percent.saturating_sub(step),
        CommandIntent::Unknown => state.speed_percent,
    };
    FanState { speed_percent }
}

/// A speed change produced by [`FanController::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanChange {
    pub from: FanState,
    pub to: FanState,
}

pub struct FanController {
    state: FanState,
    step: u8,
}

impl FanController {
    /// `initial` is clamped to 100.
    pub fn new(initial: u8, step: u8) -> Self {
        Self {
            state: FanState {
                speed_percent: initial.min(100),
            },
            step,
        }
    }

    /// Apply an intent.  Returns `None` when the speed did not move
    /// (unknown intent, or already at a bound).
    pub fn apply(&mut self, intent: CommandIntent) -> Option<FanChange> {
        let from = self.state;
        let to = apply(from, intent, self.step);
        if to == from {
            return None;
        }
        self.state = to;
        Some(FanChange { from, to })
    }

    pub fn state(&self) -> FanState {
        self.state
    }
}

impl Default for FanController {
    fn default() -> Self {
        Self::new(FanState::default().speed_percent, 10)
    }
}
