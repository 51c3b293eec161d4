//! Process snapshot ranking.
//!
//! Raw readings from the [`ProcessPort`](crate::app::ports::ProcessPort)
//! are converted into display rows, then sorted by CPU usage (descending,
//! stable) and truncated.  Nothing is retained between ticks.

use log::debug;
use serde::Serialize;

use crate::config::MAX_RANKED_PROCESSES;
use crate::error::ProcessReadError;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One raw process entry as reported by the process provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReading {
    pub name: String,
    pub memory_bytes: u64,
    pub cpu_usage_estimate: f64,
}

/// Display row for a single process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSnapshot {
    pub name: String,
    /// Rounded to 2 decimals.
    pub cpu_usage_percent: f64,
    /// Rounded to 2 decimals.
    pub memory_usage_mb: f64,
}

impl ProcessSnapshot {
    pub fn from_reading(reading: &ProcessReading) -> Self {
        Self {
            name: reading.name.clone(),
            cpu_usage_percent: round2(reading.cpu_usage_estimate),
            memory_usage_mb: round2(reading.memory_bytes as f64 / BYTES_PER_MB),
        }
    }

    /// Convert provider output, dropping entries that could not be read.
    pub fn collect(readings: Vec<Result<ProcessReading, ProcessReadError>>) -> Vec<Self> {
        readings
            .into_iter()
            .filter_map(|r| match r {
                Ok(reading) => Some(Self::from_reading(&reading)),
                Err(e) => {
                    debug!("Skipping unreadable process: {e}");
                    None
                }
            })
            .collect()
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sorts and limits process snapshots for display.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRanker {
    limit: usize,
}

impl ProcessRanker {
    /// `limit` is capped at [`MAX_RANKED_PROCESSES`].
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.min(MAX_RANKED_PROCESSES),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Highest CPU first; equal usage keeps enumeration order.
    pub fn rank(&self, mut snapshots: Vec<ProcessSnapshot>) -> Vec<ProcessSnapshot> {
        // `sort_by` is stable.  NaN ranks below every number.
        snapshots.sort_by(|a, b| {
            sort_key(b.cpu_usage_percent).total_cmp(&sort_key(a.cpu_usage_percent))
        });
        snapshots.truncate(self.limit);
        snapshots
    }
}

fn sort_key(cpu: f64) -> f64 {
    if cpu.is_nan() { f64::NEG_INFINITY } else { cpu }
}

impl Default for ProcessRanker {
    fn default() -> Self {
        Self::new(MAX_RANKED_PROCESSES)
    }
}
