//! Single-owner coordinator and sampling task.
//!
//! Runs on one thread with `edge-executor` for cooperative scheduling and
//! `async-io-mini` for reactor-driven timers.  Two futures share the
//! executor:
//!
//! 1. **Sampling**: the [`Scheduler`] fires every period; the
//!    [`SamplingTask`] polls the providers and posts a `Tick`.
//! 2. **Coordinator**: drains the [`MonitorChannel`] and applies each
//!    message to the [`MonitorService`], which it owns exclusively.
//!
//! The recognition source lives outside the executor and posts utterances
//! into the same channel from its own thread.
//!
//! ```text
//!  ┌──────────────────────────────────────────────────────────┐
//!  │  futures_lite::block_on                                  │
//!  │  ┌────────────────────────────────────────────────────┐  │
//!  │  │  edge_executor::LocalExecutor                      │  │
//!  │  │   ┌──────────────┐          ┌──────────────────┐   │  │
//!  │  │   │ Sampling     │  Tick    │ Coordinator      │   │  │
//!  │  │   │ 1 s ⏱        │─────────▶│ channel.receive()│   │  │
//!  │  │   └──────────────┘          └──────────────────┘   │  │
//!  │  └─────────────────────────────────▲──────────────────┘  │
//!  └────────────────────────────────────┼─────────────────────┘
//!                    Recognizer thread ─┘ Utterance
//! ```

use core::ops::ControlFlow;
use core::time::Duration;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use log::{info, warn};

use crate::channels::{MonitorChannel, MonitorHandle, MonitorMsg};
use crate::config::MonitorConfig;
use crate::sampler::Sampler;
use crate::scheduler::{Scheduler, TickInfo};

use super::commands::AppCommand;
use super::ports::{EventSink, ProcessPort, RecognitionSource, SchedulerDelegate, SensorPort};
use super::service::MonitorService;

// ───────────────────────────────────────────────────────────────
// Sampling task
// ───────────────────────────────────────────────────────────────

/// Scheduler delegate that samples the providers and posts the reading.
pub struct SamplingTask<H> {
    hw: H,
    sampler: Sampler,
    handle: MonitorHandle,
    tick_limit: Option<u64>,
}

impl<H: SensorPort + ProcessPort> SamplingTask<H> {
    pub fn new(hw: H, handle: MonitorHandle) -> Self {
        Self {
            hw,
            sampler: Sampler::new(),
            handle,
            tick_limit: None,
        }
    }

    /// Stop after `ticks` ticks and ask the coordinator to shut down.
    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.tick_limit = Some(ticks);
        self
    }
}

impl<H: SensorPort + ProcessPort> SchedulerDelegate for SamplingTask<H> {
    fn on_tick(&mut self, tick: TickInfo) -> ControlFlow<()> {
        let reading = self.sampler.sample(&mut self.hw, Local::now());
        if !self.handle.post(MonitorMsg::Tick(reading)) {
            warn!("Tick {} dropped, coordinator busy", tick.index);
        }
        match self.tick_limit {
            Some(limit) if tick.index >= limit => {
                self.handle.shutdown();
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Coordinator
// ───────────────────────────────────────────────────────────────

/// Sole owner of the monitor state.
pub struct Coordinator<R, S> {
    service: MonitorService,
    recognizer: R,
    sink: S,
    channel: Arc<MonitorChannel>,
    listening: bool,
}

impl<R: RecognitionSource, S: EventSink> Coordinator<R, S> {
    pub fn new(
        config: &MonitorConfig,
        recognizer: R,
        sink: S,
        channel: Arc<MonitorChannel>,
    ) -> Self {
        Self {
            service: MonitorService::new(config),
            recognizer,
            sink,
            channel,
            listening: false,
        }
    }

    /// Producer handle for this coordinator's inbox.
    pub fn handle(&self) -> MonitorHandle {
        MonitorHandle::new(self.channel.clone())
    }

    /// Emit the initial view and optionally start listening.
    pub fn start(&mut self, voice_enabled: bool) {
        self.service.start(&mut self.sink);
        if voice_enabled {
            self.set_listening(true);
        }
    }

    /// Apply one message.  Returns `Break` on shutdown.
    pub fn dispatch(&mut self, msg: MonitorMsg) -> ControlFlow<()> {
        match msg {
            MonitorMsg::Tick(reading) => self.service.apply_tick(reading, &mut self.sink),
            MonitorMsg::Utterance(text) => {
                if self.listening {
                    self.service.handle_utterance(&text, &mut self.sink);
                } else {
                    info!("Ignoring utterance {:?} while not listening", text);
                }
            }
            MonitorMsg::Command(AppCommand::SetThresholds {
                warning_input,
                critical_input,
            }) => {
                self.service
                    .set_thresholds(&warning_input, &critical_input, &mut self.sink);
            }
            MonitorMsg::Command(AppCommand::SetListening(active)) => self.set_listening(active),
            MonitorMsg::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Drain the inbox until `Shutdown`.  Returns the final service state.
    pub async fn run(mut self) -> MonitorService {
        loop {
            let msg = self.channel.receive().await;
            if self.dispatch(msg).is_break() {
                break;
            }
        }
        if self.listening {
            self.recognizer.stop();
        }
        info!("Coordinator stopped after {} tick(s)", self.service.tick_count());
        self.service
    }

    pub fn service(&self) -> &MonitorService {
        &self.service
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    // ── Internal ──────────────────────────────────────────────

    fn set_listening(&mut self, active: bool) {
        if active == self.listening {
            return;
        }
        if active {
            let sender = self.handle().utterance_sender();
            if let Err(e) = self.recognizer.start(sender) {
                warn!("Recognition unavailable ({e}), continuing in sampling-only mode");
                return;
            }
        } else {
            self.recognizer.stop();
        }
        self.listening = active;
        self.service.set_listening(active, &mut self.sink);
    }
}

// ───────────────────────────────────────────────────────────────
// Executor entry point
// ───────────────────────────────────────────────────────────────

/// Run sampling and coordination on the current thread until shutdown.
///
/// Returns the final [`MonitorService`] so callers can inspect it.
pub fn run_blocking<H, R, S>(
    mut coordinator: Coordinator<R, S>,
    sampling: SamplingTask<H>,
    period: Duration,
    voice_enabled: bool,
) -> MonitorService
where
    H: SensorPort + ProcessPort,
    R: RecognitionSource,
    S: EventSink,
{
    let executor: edge_executor::LocalExecutor<'_, 4> = edge_executor::LocalExecutor::new();

    coordinator.start(voice_enabled);

    let mut sampling = sampling;
    executor
        .spawn(async move {
            let mut scheduler = Scheduler::new(period, Instant::now());
            scheduler.run(&mut sampling).await;
        })
        .detach();

    info!("Monitor running (period {:?})", period);
    futures_lite::future::block_on(executor.run(coordinator.run()))
}
