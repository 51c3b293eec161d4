//! Monitor configuration parameters
//!
//! All tunable parameters for the monitor.  Values can be overridden from a
//! JSON file (see [`JsonConfigFile`](crate::adapters::config_file::JsonConfigFile))
//! and the alert thresholds can additionally be changed at runtime through
//! [`Thresholds::apply_inputs`].

use log::warn;
use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Number of samples kept in the rolling history.
pub const HISTORY_CAPACITY: usize = 50;

/// Upper bound on the ranked process list shown to the display.
pub const MAX_RANKED_PROCESSES: usize = 50;

/// Temperature alert thresholds in degrees Celsius.
///
/// No ordering between the two values is enforced: a critical threshold
/// below the warning threshold is accepted and logged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning_c: f64,
    pub critical_c: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_c: 70.0,
            critical_c: 85.0,
        }
    }
}

/// Per-field outcome of [`Thresholds::apply_inputs`].
///
/// The update as a whole never fails; a field that did not parse simply
/// keeps its previous value and is flagged `false` here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdUpdate {
    pub warning_applied: bool,
    pub critical_applied: bool,
    /// Thresholds in effect after the update.
    pub thresholds: Thresholds,
}

impl ThresholdUpdate {
    /// True when both inputs parsed.
    pub fn fully_applied(&self) -> bool {
        self.warning_applied && self.critical_applied
    }
}

impl Thresholds {
    /// Parse the two text inputs independently and overwrite each threshold
    /// whose input is a finite number.
    pub fn apply_inputs(&mut self, warning_input: &str, critical_input: &str) -> ThresholdUpdate {
        let warning = parse_celsius(warning_input);
        let critical = parse_celsius(critical_input);

        if let Some(w) = warning {
            self.warning_c = w;
        }
        if let Some(c) = critical {
            self.critical_c = c;
        }

        if warning.is_none() {
            warn!("Ignoring unparseable warning threshold {:?}", warning_input);
        }
        if critical.is_none() {
            warn!("Ignoring unparseable critical threshold {:?}", critical_input);
        }
        if self.critical_c < self.warning_c {
            warn!(
                "Critical threshold {}\u{00b0}C is below warning threshold {}\u{00b0}C",
                self.critical_c, self.warning_c
            );
        }

        ThresholdUpdate {
            warning_applied: warning.is_some(),
            critical_applied: critical.is_some(),
            thresholds: *self,
        }
    }
}

fn parse_celsius(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Core monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    // --- Alerts ---
    pub thresholds: Thresholds,

    // --- Timing ---
    /// Sampling period (milliseconds)
    pub sample_interval_ms: u32,

    // --- Display ---
    /// Maximum processes kept after ranking (at most 50)
    pub max_ranked_processes: usize,

    // --- Fan simulation ---
    /// Fan speed at startup (0-100%)
    pub fan_initial_percent: u8,
    /// Step applied per voice command (percentage points)
    pub fan_step_percent: u8,

    // --- Voice ---
    /// Start the recognition source immediately
    pub voice_enabled: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            sample_interval_ms: 1000, // 1 Hz
            max_ranked_processes: MAX_RANKED_PROCESSES,
            fan_initial_percent: 50,
            fan_step_percent: 10,
            voice_enabled: true,
        }
    }
}

impl MonitorConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.thresholds.warning_c.is_finite() {
            return Err(ConfigError::ValidationFailed("warning threshold must be finite"));
        }
        if !self.thresholds.critical_c.is_finite() {
            return Err(ConfigError::ValidationFailed("critical threshold must be finite"));
        }
        if self.sample_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("sample interval must be non-zero"));
        }
        if self.max_ranked_processes == 0 || self.max_ranked_processes > MAX_RANKED_PROCESSES {
            return Err(ConfigError::ValidationFailed("process limit must be 1..=50"));
        }
        if self.fan_initial_percent > 100 {
            return Err(ConfigError::ValidationFailed("initial fan speed above 100%"));
        }
        if self.fan_step_percent == 0 || self.fan_step_percent > 100 {
            return Err(ConfigError::ValidationFailed("fan step must be 1..=100"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }
}
