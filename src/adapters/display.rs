//! Shared display model.
//!
//! Keeps the most recent [`DisplaySnapshot`] behind a mutex so a renderer
//! on another thread can read it without touching the monitor state.
//! [`FanoutSink`] lets the binary feed the log and the display from the
//! same event stream.

use std::sync::{Arc, Mutex};

use heapless::Deque;

use crate::alerts::Alert;
use crate::app::events::{AppEvent, DisplaySnapshot};
use crate::app::ports::EventSink;

/// Undrained alerts kept for the renderer; older ones are discarded.
pub const PENDING_ALERTS: usize = 16;

#[derive(Default)]
struct DisplayModel {
    snapshot: Option<DisplaySnapshot>,
    alerts: Deque<Alert, PENDING_ALERTS>,
}

/// Cloneable handle onto the latest display state.
#[derive(Clone, Default)]
pub struct SharedDisplay {
    inner: Arc<Mutex<DisplayModel>>,
}

impl SharedDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot, if any event carrying one has arrived.
    pub fn snapshot(&self) -> Option<DisplaySnapshot> {
        self.inner.lock().ok().and_then(|m| m.snapshot.clone())
    }

    /// Drain alerts raised since the last call (one popup each), oldest
    /// first.  At most [`PENDING_ALERTS`] are retained between calls.
    pub fn take_alerts(&self) -> Vec<Alert> {
        self.inner
            .lock()
            .map(|mut m| {
                let mut drained = Vec::with_capacity(m.alerts.len());
                while let Some(alert) = m.alerts.pop_front() {
                    drained.push(alert);
                }
                drained
            })
            .unwrap_or_default()
    }
}

impl EventSink for SharedDisplay {
    fn emit(&mut self, event: &AppEvent) {
        let Ok(mut model) = self.inner.lock() else {
            return;
        };
        match event {
            AppEvent::Started(snap) | AppEvent::Refreshed(snap) => {
                model.snapshot = Some(snap.clone());
            }
            AppEvent::Alert(alert) => {
                if model.alerts.is_full() {
                    model.alerts.pop_front();
                }
                let _ = model.alerts.push_back(*alert);
            }
            AppEvent::FanSpeedChanged { to, .. } => {
                if let Some(snap) = model.snapshot.as_mut() {
                    snap.fan = *to;
                }
            }
            AppEvent::ThresholdsUpdated(update) => {
                if let Some(snap) = model.snapshot.as_mut() {
                    snap.thresholds = update.thresholds;
                }
            }
            AppEvent::VoiceStatus(status) => {
                if let Some(snap) = model.snapshot.as_mut() {
                    snap.voice_status.clone_from(status);
                }
            }
            AppEvent::UtteranceHandled { .. } => {}
        }
    }
}

/// Forwards each event to two sinks in order.
pub struct FanoutSink<A, B> {
    first: A,
    second: B,
}

impl<A: EventSink, B: EventSink> FanoutSink<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: EventSink, B: EventSink> EventSink for FanoutSink<A, B> {
    fn emit(&mut self, event: &AppEvent) {
        self.first.emit(event);
        self.second.emit(event);
    }
}
