//! ThermoWatch: Main Entry Point
//!
//! Hexagonal architecture with a single-owner coordinator.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SystemAdapter      StdinRecognizer    JsonConfigFile          │
//! │  (Sensor+Process)   (Recognition)      (ConfigPort)            │
//! │  LogEventSink + SharedDisplay (EventSink)                      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              MonitorService (pure logic)               │    │
//! │  │  History · Ranker · Alerter · Router · Fan             │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (delegate-driven) · Coordinator (channel consumer)  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use core::time::Duration;
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use thermowatch::adapters::config_file::JsonConfigFile;
use thermowatch::adapters::display::{FanoutSink, SharedDisplay};
use thermowatch::adapters::log_sink::LogEventSink;
use thermowatch::adapters::recognizer::StdinRecognizer;
#[cfg(unix)]
use thermowatch::adapters::signals::ShutdownSignals;
use thermowatch::adapters::system::SystemAdapter;
use thermowatch::app::commands::CommandRouter;
use thermowatch::app::coordinator::{run_blocking, Coordinator, SamplingTask};
use thermowatch::app::ports::ConfigPort;
use thermowatch::channels::MonitorChannel;
use thermowatch::config::MonitorConfig;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt::init();

    info!("ThermoWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Load config (or defaults) ──────────────────────────
    let config = match JsonConfigFile::from_env().load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load failed ({}), using defaults", e);
            MonitorConfig::default()
        }
    };

    // ── 3. Adapters ───────────────────────────────────────────
    let channel = Arc::new(MonitorChannel::new());
    let display = SharedDisplay::new();
    let sink = FanoutSink::new(LogEventSink::new(), display.clone());
    let coordinator = Coordinator::new(&config, StdinRecognizer::new(), sink, channel);
    let sampling = SamplingTask::new(SystemAdapter::new(), coordinator.handle());

    if config.voice_enabled {
        let phrases: Vec<_> = CommandRouter::new().phrases().collect();
        info!("Voice commands: {}", phrases.join(", "));
    }

    #[cfg(unix)]
    let signals = ShutdownSignals::register(coordinator.handle())?;

    // ── 4. Run until SIGINT / SIGTERM ─────────────────────────
    let period = Duration::from_millis(u64::from(config.sample_interval_ms));
    let service = run_blocking(coordinator, sampling, period, config.voice_enabled);

    #[cfg(unix)]
    signals.close();

    info!(
        "Stopped after {} tick(s), {}, {} unacknowledged alert(s)",
        service.tick_count(),
        service.snapshot().fan,
        display.take_alerts().len()
    );
    Ok(())
}
