//! Per-tick provider polling.
//!
//! Calls the sensor and process ports exactly once each and bundles the
//! results into a [`TickReading`].  Provider failures never abort a tick:
//! a missing temperature becomes `0.0` and unreadable processes are dropped.

use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::app::ports::{ProcessPort, SensorPort};
use crate::history::Sample;
use crate::ranking::ProcessSnapshot;

/// Temperature forwarded when the sensor has nothing to report.
pub const FALLBACK_TEMPERATURE_C: f64 = 0.0;

/// Everything collected during one tick.
#[derive(Debug, Clone)]
pub struct TickReading {
    pub sample: Sample,
    /// Unranked, in provider enumeration order.
    pub processes: Vec<ProcessSnapshot>,
}

#[derive(Debug, Default)]
pub struct Sampler {
    /// Whether the previous sensor read failed (log transitions only).
    sensor_failing: bool,
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll both providers once, stamping the sample with `at`.
    pub fn sample(
        &mut self,
        hw: &mut (impl SensorPort + ProcessPort),
        at: DateTime<Local>,
    ) -> TickReading {
        let temperature_c = match hw.current_cpu_temperature() {
            Ok(t) if t.is_finite() => {
                if self.sensor_failing {
                    info!("CPU temperature sensor recovered ({t}\u{00b0}C)");
                    self.sensor_failing = false;
                }
                t
            }
            Ok(_) | Err(_) => {
                if !self.sensor_failing {
                    warn!("CPU temperature unavailable, reporting {FALLBACK_TEMPERATURE_C}\u{00b0}C");
                    self.sensor_failing = true;
                }
                FALLBACK_TEMPERATURE_C
            }
        };

        let readings = hw.list_processes();
        let total = readings.len();
        let processes = ProcessSnapshot::collect(readings);
        if processes.len() < total {
            debug!("{} of {} processes unreadable this tick", total - processes.len(), total);
        }

        TickReading {
            sample: Sample::new(at, temperature_c),
            processes,
        }
    }
}
