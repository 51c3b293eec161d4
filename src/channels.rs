//! Coordinator inbox.
//!
//! Uses an `embassy-sync` bounded channel as the single-consumer queue
//! that serializes every state mutation.  Producers never block: ticks,
//! utterances and commands are posted with `try_send` and dropped (with a
//! warning) when the coordinator is behind.
//!
//! ```text
//! ┌──────────────┐  Tick        ┌───────────────┐
//! │ Sampling task│─────────────▶│               │
//! └──────────────┘              │  MonitorMsg   │     ┌─────────────┐
//! ┌──────────────┐  Utterance   │   channel     │────▶│ Coordinator │
//! │ Recognizer   │─────────────▶│ (bounded, 16) │     │ (consumer)  │
//! └──────────────┘              │               │     └─────────────┘
//! ┌──────────────┐  Command     │               │
//! │ Config / UI  │─────────────▶│               │
//! └──────────────┘              └───────────────┘
//! ```

use std::sync::Arc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::app::commands::AppCommand;
use crate::sampler::TickReading;

/// Channel depth.  Small on purpose: a backlog of stale ticks is useless.
pub const CHANNEL_DEPTH: usize = 16;

/// Everything the coordinator can be asked to do.
#[derive(Debug, Clone)]
pub enum MonitorMsg {
    /// One sampling tick's worth of data.
    Tick(TickReading),
    /// A recognized utterance, verbatim.
    Utterance(String),
    /// A configuration / control command.
    Command(AppCommand),
    /// Stop the coordinator loop.
    Shutdown,
}

pub type MonitorChannel = Channel<CriticalSectionRawMutex, MonitorMsg, CHANNEL_DEPTH>;

/// Cloneable producer handle onto the coordinator inbox.
#[derive(Clone)]
pub struct MonitorHandle {
    channel: Arc<MonitorChannel>,
}

impl MonitorHandle {
    pub fn new(channel: Arc<MonitorChannel>) -> Self {
        Self { channel }
    }

    /// Post a message.  Returns `false` if the inbox was full and the
    /// message was dropped.
    pub fn post(&self, msg: MonitorMsg) -> bool {
        match self.channel.try_send(msg) {
            Ok(()) => true,
            Err(_) => {
                warn!("Monitor channel full, dropping message");
                false
            }
        }
    }

    pub fn set_thresholds(&self, warning_input: &str, critical_input: &str) -> bool {
        self.post(MonitorMsg::Command(AppCommand::SetThresholds {
            warning_input: warning_input.to_string(),
            critical_input: critical_input.to_string(),
        }))
    }

    pub fn set_listening(&self, active: bool) -> bool {
        self.post(MonitorMsg::Command(AppCommand::SetListening(active)))
    }

    pub fn shutdown(&self) -> bool {
        self.post(MonitorMsg::Shutdown)
    }

    /// Narrowed handle for a recognition source.
    pub fn utterance_sender(&self) -> UtteranceSender {
        UtteranceSender {
            handle: self.clone(),
        }
    }
}

/// Handle given to a [`RecognitionSource`](crate::app::ports::RecognitionSource).
///
/// `Send + Sync`, so the source may deliver from its own thread.
#[derive(Clone)]
pub struct UtteranceSender {
    handle: MonitorHandle,
}

impl UtteranceSender {
    /// Deliver one utterance, at most once.  Returns `false` if dropped.
    pub fn send(&self, text: impl Into<String>) -> bool {
        self.handle.post(MonitorMsg::Utterance(text.into()))
    }

    /// Tell the coordinator the source can no longer deliver, so it leaves
    /// listening mode.
    pub fn source_closed(&self) -> bool {
        self.handle.set_listening(false)
    }
}
