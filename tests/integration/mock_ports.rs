//! Mock adapters for integration tests.
//!
//! Scripted providers replay fixed readings; the recording sink keeps
//! every emitted event so tests can assert on the full history.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use thermowatch::alerts::{Alert, AlertLevel};
use thermowatch::app::events::AppEvent;
use thermowatch::app::ports::{EventSink, ProcessPort, RecognitionSource, SensorPort};
use thermowatch::channels::UtteranceSender;
use thermowatch::error::{ProcessReadError, RecognitionError, SensorError};
use thermowatch::ranking::ProcessReading;

// ── ScriptedHardware ──────────────────────────────────────────

/// Replays temperatures in order, then repeats the last one.
pub struct ScriptedHardware {
    temps: VecDeque<Result<f64, SensorError>>,
    last: Result<f64, SensorError>,
    pub processes: Vec<Result<ProcessReading, ProcessReadError>>,
}

#[allow(dead_code)]
impl ScriptedHardware {
    pub fn new(temps: &[f64]) -> Self {
        Self {
            temps: temps.iter().copied().map(Ok).collect(),
            last: Err(SensorError::Unavailable),
            processes: Vec::new(),
        }
    }

    pub fn failing() -> Self {
        Self {
            temps: VecDeque::new(),
            last: Err(SensorError::Unavailable),
            processes: Vec::new(),
        }
    }

    pub fn with_process(mut self, name: &str, cpu: f64, memory_bytes: u64) -> Self {
        self.processes.push(Ok(ProcessReading {
            name: name.to_string(),
            memory_bytes,
            cpu_usage_estimate: cpu,
        }));
        self
    }

    pub fn with_unreadable_process(mut self) -> Self {
        self.processes.push(Err(ProcessReadError::AccessDenied));
        self
    }
}

impl SensorPort for ScriptedHardware {
    fn current_cpu_temperature(&mut self) -> Result<f64, SensorError> {
        if let Some(next) = self.temps.pop_front() {
            self.last = next;
        }
        self.last
    }
}

impl ProcessPort for ScriptedHardware {
    fn list_processes(&mut self) -> Vec<Result<ProcessReading, ProcessReadError>> {
        self.processes.clone()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// Cloneable sink; clones share one event log.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<AppEvent>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                AppEvent::Alert(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    pub fn alert_levels(&self) -> Vec<AlertLevel> {
        self.alerts().into_iter().map(|a| a.level).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

// ── Recognition sources ───────────────────────────────────────

/// Delivers a fixed list of utterances as soon as it is started.
pub struct ScriptedRecognizer {
    pub utterances: Vec<&'static str>,
    /// Shared so tests can observe the source after it moves into a coordinator.
    pub starts: Arc<AtomicU32>,
    pub stops: Arc<AtomicU32>,
}

#[allow(dead_code)]
impl ScriptedRecognizer {
    pub fn new(utterances: &[&'static str]) -> Self {
        Self {
            utterances: utterances.to_vec(),
            starts: Arc::default(),
            stops: Arc::default(),
        }
    }
}

impl RecognitionSource for ScriptedRecognizer {
    fn start(&mut self, sender: UtteranceSender) -> Result<(), RecognitionError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        for text in self.utterances.drain(..) {
            sender.send(text);
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

/// A host with no speech engine.
pub struct UnavailableRecognizer;

impl RecognitionSource for UnavailableRecognizer {
    fn start(&mut self, _sender: UtteranceSender) -> Result<(), RecognitionError> {
        Err(RecognitionError::NoInputDevice)
    }

    fn stop(&mut self) {}
}
