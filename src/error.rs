//! Unified error types for the monitor.
//!
//! Every provider-facing failure has its own small `Copy` enum so the port
//! traits can return typed results, and all of them convert into the
//! top-level [`Error`].  None of these are fatal to the core: the sampler
//! and coordinator absorb them into defaults or skipped entries.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The temperature sensor could not be read.
    Sensor(SensorError),
    /// A single process entry could not be queried.
    Process(ProcessReadError),
    /// The speech recognition source failed to start.
    Recognition(RecognitionError),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Process(e) => write!(f, "process: {e}"),
            Self::Recognition(e) => write!(f, "recognition: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// No CPU temperature sensor is present on this machine.
    Unavailable,
    /// The sensor exists but returned no value this poll.
    NoReading,
    /// Reading is outside the plausible range for a CPU die.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "no CPU temperature sensor"),
            Self::NoReading => write!(f, "sensor returned no reading"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Process errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessReadError {
    /// The OS refused access to the process.
    AccessDenied,
    /// The process exited while it was being queried.
    Exited,
}

impl fmt::Display for ProcessReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessDenied => write!(f, "access denied"),
            Self::Exited => write!(f, "process exited"),
        }
    }
}

impl From<ProcessReadError> for Error {
    fn from(e: ProcessReadError) -> Self {
        Self::Process(e)
    }
}

// ---------------------------------------------------------------------------
// Recognition errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionError {
    /// No audio input device (or equivalent input) is available.
    NoInputDevice,
    /// The recognition engine failed to initialise.
    EngineUnavailable,
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInputDevice => write!(f, "no input device"),
            Self::EngineUnavailable => write!(f, "recognition engine unavailable"),
        }
    }
}

impl From<RecognitionError> for Error {
    fn from(e: RecognitionError) -> Self {
        Self::Recognition(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
