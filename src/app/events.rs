//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them: log a line, refresh a
//! display model, pop up a desktop alert.

use serde::Serialize;

use crate::actuator::FanState;
use crate::alerts::{Alert, AlertState};
use crate::config::{ThresholdUpdate, Thresholds};
use crate::ranking::ProcessSnapshot;

use super::commands::CommandIntent;

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, Serialize)]
pub enum AppEvent {
    /// The service has started (carries the initial view).
    Started(DisplaySnapshot),

    /// A tick was applied; carries the refreshed view.
    Refreshed(DisplaySnapshot),

    /// A threshold crossing raised an alert.
    Alert(Alert),

    /// An utterance was recognized and routed.
    UtteranceHandled { text: String, intent: CommandIntent },

    /// The simulated fan moved.
    FanSpeedChanged { from: FanState, to: FanState },

    /// Thresholds were edited through the configuration surface.
    ThresholdsUpdated(ThresholdUpdate),

    /// The voice status line changed.
    VoiceStatus(String),
}

/// Read-only view for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    /// Temperature series, oldest first (≤ 50).
    pub temperatures: Vec<f64>,
    /// `HH:MM:SS` labels, index-aligned with `temperatures`.
    pub labels: Vec<String>,
    /// Ranked processes (≤ 50).
    pub processes: Vec<ProcessSnapshot>,
    pub alert_state: AlertState,
    pub fan: FanState,
    pub thresholds: Thresholds,
    /// Free-text status for the last utterance / listening state.
    pub voice_status: String,
    pub tick_count: u64,
}

impl DisplaySnapshot {
    pub fn latest_temperature(&self) -> Option<f64> {
        self.temperatures.last().copied()
    }
}
