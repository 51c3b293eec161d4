//! Monitor service: the hexagonal core.
//!
//! [`MonitorService`] owns the rolling history, ranked process list, alert
//! state, thresholds and simulated fan.  It never touches a channel or a
//! thread: the [`Coordinator`](super::coordinator::Coordinator) feeds it
//! one message at a time, which is what serializes every mutation.
//!
//! ```text
//!  TickReading ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                  │        MonitorService         │
//!  Utterance   ──▶ │ Window · Ranker · Alerter ·   │
//!  AppCommand  ──▶ │ Router · Fan                  │
//!                  └──────────────────────────────┘
//! ```

use chrono::Local;

use crate::actuator::FanController;
use crate::alerts::{AlertState, ThresholdAlerter};
use crate::config::{MonitorConfig, ThresholdUpdate, Thresholds};
use crate::history::RollingWindow;
use crate::ranking::{ProcessRanker, ProcessSnapshot};
use crate::sampler::{Sampler, TickReading};

use super::commands::{CommandIntent, CommandRouter};
use super::events::{AppEvent, DisplaySnapshot};
use super::ports::{EventSink, ProcessPort, SensorPort};

pub const VOICE_ACTIVE: &str = "Voice Command: Active";
pub const VOICE_INACTIVE: &str = "Voice Command: Inactive";

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

pub struct MonitorService {
    window: RollingWindow,
    ranker: ProcessRanker,
    processes: Vec<ProcessSnapshot>,
    alerter: ThresholdAlerter,
    thresholds: Thresholds,
    router: CommandRouter,
    fan: FanController,
    sampler: Sampler,
    voice_status: String,
    tick_count: u64,
}

impl MonitorService {
    /// Construct the service from configuration.  Expects a validated config.
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            window: RollingWindow::new(),
            ranker: ProcessRanker::new(config.max_ranked_processes),
            processes: Vec::new(),
            alerter: ThresholdAlerter::new(),
            thresholds: config.thresholds,
            router: CommandRouter::new(),
            fan: FanController::new(config.fan_initial_percent, config.fan_step_percent),
            sampler: Sampler::new(),
            voice_status: VOICE_INACTIVE.to_string(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.snapshot()));
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Sample the providers now and apply the result.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ProcessPort`], the same way one host adapter backs both.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + ProcessPort), sink: &mut impl EventSink) {
        let reading = self.sampler.sample(hw, Local::now());
        self.apply_tick(reading, sink);
    }

    /// Apply one tick: history → ranking → alerts, in that order.
    pub fn apply_tick(&mut self, reading: TickReading, sink: &mut impl EventSink) {
        self.tick_count += 1;
        let temperature_c = reading.sample.temperature_c;

        // 1. History
        self.window.append(reading.sample);

        // 2. Process ranking
        self.processes = self.ranker.rank(reading.processes);

        // 3. Threshold alerts
        if let Some(alert) = self.alerter.evaluate(temperature_c, &self.thresholds) {
            sink.emit(&AppEvent::Alert(alert));
        }

        sink.emit(&AppEvent::Refreshed(self.snapshot()));
    }

    // ── Voice path ────────────────────────────────────────────

    /// Route one recognized utterance and apply it to the fan.
    pub fn handle_utterance(&mut self, text: &str, sink: &mut impl EventSink) -> CommandIntent {
        self.set_voice_status(format!("Voice Command: {text}"), sink);

        let intent = self.router.route(text);
        sink.emit(&AppEvent::UtteranceHandled {
            text: text.to_string(),
            intent,
        });

        if let Some(change) = self.fan.apply(intent) {
            sink.emit(&AppEvent::FanSpeedChanged {
                from: change.from,
                to: change.to,
            });
        }
        intent
    }

    /// Record whether the recognition source is listening.
    pub fn set_listening(&mut self, active: bool, sink: &mut impl EventSink) {
        let status = if active { VOICE_ACTIVE } else { VOICE_INACTIVE };
        self.set_voice_status(status.to_string(), sink);
    }

    // ── Configuration surface ─────────────────────────────────

    /// Parse and apply threshold inputs; unparseable fields keep their value.
    pub fn set_thresholds(
        &mut self,
        warning_input: &str,
        critical_input: &str,
        sink: &mut impl EventSink,
    ) -> ThresholdUpdate {
        let update = self.thresholds.apply_inputs(warning_input, critical_input);
        sink.emit(&AppEvent::ThresholdsUpdated(update));
        update
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build the read-only display view.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            temperatures: self.window.temperatures(),
            labels: self.window.labels(),
            processes: self.processes.clone(),
            alert_state: self.alerter.state(),
            fan: self.fan.state(),
            thresholds: self.thresholds,
            voice_status: self.voice_status.clone(),
            tick_count: self.tick_count,
        }
    }

    pub fn history(&self) -> &RollingWindow {
        &self.window
    }

    pub fn processes(&self) -> &[ProcessSnapshot] {
        &self.processes
    }

    pub fn alert_state(&self) -> AlertState {
        self.alerter.state()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn fan_speed(&self) -> u8 {
        self.fan.state().speed_percent
    }

    pub fn voice_status(&self) -> &str {
        &self.voice_status
    }

    /// Total ticks applied since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn set_voice_status(&mut self, status: String, sink: &mut impl EventSink) {
        if status != self.voice_status {
            self.voice_status = status;
            sink.emit(&AppEvent::VoiceStatus(self.voice_status.clone()));
        }
    }
}
