//! Rolling temperature history for trend display.
//!
//! Two fixed-capacity ring buffers are kept side by side: the numeric
//! samples and their `HH:MM:SS` labels.  Both are only ever touched by
//! [`RollingWindow::append`], so they evict together and stay index-aligned.

use core::fmt::Write;

use chrono::{DateTime, Local};
use heapless::{Deque, String};
use serde::Serialize;

use crate::config::HISTORY_CAPACITY;

/// Label length for `HH:MM:SS`.
const LABEL_LEN: usize = 8;

/// Axis label attached to every sample.
pub type TimeLabel = String<LABEL_LEN>;

/// One temperature reading taken at a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub temperature_c: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Local>, temperature_c: f64) -> Self {
        Self {
            timestamp,
            temperature_c,
        }
    }

    /// Human-readable tick time, `HH:MM:SS`.
    pub fn label(&self) -> TimeLabel {
        let mut label = TimeLabel::new();
        // Eight bytes always fit "%H:%M:%S".
        let _ = write!(label, "{}", self.timestamp.format("%H:%M:%S"));
        label
    }
}

/// Bounded FIFO of the most recent samples plus their labels.
pub struct RollingWindow {
    samples: Deque<Sample, HISTORY_CAPACITY>,
    labels: Deque<TimeLabel, HISTORY_CAPACITY>,
}

impl RollingWindow {
    pub fn new() -> Self {
        Self {
            samples: Deque::new(),
            labels: Deque::new(),
        }
    }

    /// Append a sample, evicting the oldest entry once the window is full.
    pub fn append(&mut self, sample: Sample) {
        if self.samples.is_full() {
            self.samples.pop_front();
            self.labels.pop_front();
        }
        let label = sample.label();
        // Both deques were just given a free slot above.
        let _ = self.samples.push_back(sample);
        let _ = self.labels.push_back(label);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Temperature series for plotting, oldest first.
    pub fn temperatures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.temperature_c).collect()
    }

    /// Label series, index-aligned with [`temperatures`](Self::temperatures).
    pub fn labels(&self) -> Vec<std::string::String> {
        self.labels.iter().map(|l| l.as_str().to_owned()).collect()
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new()
    }
}
