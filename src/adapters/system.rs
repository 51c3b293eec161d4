//! Host system adapter: bridges the OS sensor and process tables to
//! domain port traits.
//!
//! Owns a `sysinfo` [`System`] and [`Components`] list and exposes them
//! through [`SensorPort`] and [`ProcessPort`].  This is the only module in
//! the crate that touches the host's hardware monitoring APIs.

use log::debug;
use sysinfo::{Components, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::app::ports::{ProcessPort, SensorPort};
use crate::error::{ProcessReadError, SensorError};
use crate::ranking::ProcessReading;

/// Component labels that identify a CPU temperature sensor.
const CPU_SENSOR_HINTS: [&str; 5] = ["cpu", "package", "core", "tctl", "k10temp"];

/// Plausible range for a CPU die reading.
const MIN_PLAUSIBLE_C: f32 = -40.0;
const MAX_PLAUSIBLE_C: f32 = 150.0;

pub struct SystemAdapter {
    sys: System,
    components: Components,
}

impl SystemAdapter {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Prime CPU accounting so the first tick has a baseline.
        let processes = sys.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind());
        let components = Components::new_with_refreshed_list();
        debug!(
            "SystemAdapter: {} process(es), {} component sensor(s)",
            processes,
            components.len()
        );
        Self { sys, components }
    }
}

impl Default for SystemAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing().with_cpu().with_memory()
}

fn is_cpu_sensor(label: &str) -> bool {
    let label = label.to_ascii_lowercase();
    CPU_SENSOR_HINTS.iter().any(|hint| label.contains(hint))
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for SystemAdapter {
    /// Reports the last CPU sensor in enumeration order.
    fn current_cpu_temperature(&mut self) -> Result<f64, SensorError> {
        self.components.refresh(true);

        let mut found = false;
        let mut latest = None;
        for component in self.components.iter() {
            if !is_cpu_sensor(component.label()) {
                continue;
            }
            found = true;
            if let Some(t) = component.temperature() {
                latest = Some(t);
            }
        }

        match latest {
            Some(t) if (MIN_PLAUSIBLE_C..=MAX_PLAUSIBLE_C).contains(&t) => Ok(f64::from(t)),
            Some(_) => Err(SensorError::OutOfRange),
            None if found => Err(SensorError::NoReading),
            None => Err(SensorError::Unavailable),
        }
    }
}

// ── ProcessPort implementation ────────────────────────────────

impl ProcessPort for SystemAdapter {
    fn list_processes(&mut self) -> Vec<Result<ProcessReading, ProcessReadError>> {
        let refreshed = self
            .sys
            .refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind());
        debug!("SystemAdapter: refreshed {refreshed} process(es)");

        self.sys
            .processes()
            .values()
            .filter(|p| p.thread_kind().is_none())
            .map(|p| {
                let name = p.name().to_string_lossy();
                if name.is_empty() {
                    return Err(ProcessReadError::AccessDenied);
                }
                Ok(ProcessReading {
                    name: name.into_owned(),
                    memory_bytes: p.memory(),
                    cpu_usage_estimate: f64::from(p.cpu_usage()),
                })
            })
            .collect()
    }
}
