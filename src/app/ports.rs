//! Port traits: the hexagonal boundary between the monitor core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensor library, process table, speech engine, display,
//! config file) implement these traits.  The
//! [`MonitorService`](super::service::MonitorService) and the
//! [`Coordinator`](super::coordinator::Coordinator) consume them via
//! generics, so the core never touches an OS API directly.
//!
//! ## Blocking contract
//!
//! [`SensorPort`] and [`ProcessPort`] are called synchronously from the
//! sampling task.  Implementations MUST return within one sample period;
//! a slower read delays that tick, and the scheduler then skips the ticks
//! it missed rather than running them back to back.

use core::ops::ControlFlow;

use crate::channels::UtteranceSender;
use crate::config::MonitorConfig;
use crate::error::{ProcessReadError, RecognitionError, SensorError};
use crate::ranking::ProcessReading;
use crate::scheduler::TickInfo;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the CPU temperature.
pub trait SensorPort {
    /// Current CPU temperature in °C.  Called once per tick.
    fn current_cpu_temperature(&mut self) -> Result<f64, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Process port (driven adapter: OS process table → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the process list.
pub trait ProcessPort {
    /// Enumerate processes.  Called once per tick.  Individual entries may
    /// fail; the caller drops them.
    fn list_processes(&mut self) -> Vec<Result<ProcessReading, ProcessReadError>>;
}

// ───────────────────────────────────────────────────────────────
// Recognition source (driving adapter: speech engine → domain)
// ───────────────────────────────────────────────────────────────

/// Asynchronous stream of recognized utterances.
///
/// After a successful [`start`](Self::start) the source delivers zero or
/// more utterances through the sender, from whatever thread it owns, until
/// [`stop`](Self::stop).  Delivery is at most once: the sender drops an
/// utterance when the coordinator is behind.
pub trait RecognitionSource {
    fn start(&mut self, sender: UtteranceSender) -> Result<(), RecognitionError>;

    fn stop(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → display / logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, display
/// model, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ← config source)
// ───────────────────────────────────────────────────────────────

/// Loads monitor configuration.
///
/// Implementations MUST validate before returning; invalid ranges are
/// rejected with [`ConfigError::ValidationFailed`], not clamped.
pub trait ConfigPort {
    /// Returns [`MonitorConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<MonitorConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from sampling)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the [`Scheduler`](crate::scheduler::Scheduler)
/// invokes on every periodic tick.
pub trait SchedulerDelegate {
    /// Return `ControlFlow::Break(())` to stop the scheduler.
    fn on_tick(&mut self, tick: TickInfo) -> ControlFlow<()>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// The config source exists but could not be read.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Corrupted => Self::Config("corrupted"),
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
            ConfigError::IoError => Self::Config("I/O error"),
        }
    }
}
