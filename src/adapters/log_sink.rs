//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events
//! through the `log` facade (rendered by `tracing-subscriber` in the
//! binary).  A windowed front end would implement the same trait.

use log::{error, info, warn};

use crate::alerts::AlertLevel;
use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Refreshed(snap) => {
                let top = snap
                    .processes
                    .first()
                    .map(|p| format!("{} {:.2}%", p.name, p.cpu_usage_percent))
                    .unwrap_or_else(|| "-".to_string());
                info!(
                    "TICK | #{} | T={:.1}\u{00b0}C | history={} | procs={} top={} | {}",
                    snap.tick_count,
                    snap.latest_temperature().unwrap_or_default(),
                    snap.temperatures.len(),
                    snap.processes.len(),
                    top,
                    snap.fan,
                );
            }
            AppEvent::Alert(alert) => match alert.level {
                AlertLevel::Critical => error!("ALERT | {}", alert),
                AlertLevel::Warning => warn!("ALERT | {}", alert),
            },
            AppEvent::UtteranceHandled { text, intent } => {
                info!("VOICE | {:?} -> {:?}", text, intent);
            }
            AppEvent::FanSpeedChanged { from, to } => {
                info!("FAN | {}% -> {}%", from.speed_percent, to.speed_percent);
            }
            AppEvent::ThresholdsUpdated(update) => {
                info!(
                    "CONFIG | warning={}\u{00b0}C{} critical={}\u{00b0}C{}",
                    update.thresholds.warning_c,
                    if update.warning_applied { "" } else { " (unchanged)" },
                    update.thresholds.critical_c,
                    if update.critical_applied { "" } else { " (unchanged)" },
                );
            }
            AppEvent::VoiceStatus(status) => {
                info!("VOICE | {}", status);
            }
            AppEvent::Started(snap) => {
                info!(
                    "START | warning={}\u{00b0}C critical={}\u{00b0}C | {} | {}",
                    snap.thresholds.warning_c, snap.thresholds.critical_c, snap.fan, snap.voice_status
                );
            }
        }
    }
}
