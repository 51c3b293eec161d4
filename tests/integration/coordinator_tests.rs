//! Coordinator: message serialization, recognizer lifecycle and the
//! executor-driven run loop.

use core::ops::ControlFlow;
use core::time::Duration;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

use chrono::Local;
use thermowatch::adapters::recognizer::StdinRecognizer;
use thermowatch::app::coordinator::{run_blocking, Coordinator, SamplingTask};
use thermowatch::app::events::AppEvent;
use thermowatch::app::service::{VOICE_ACTIVE, VOICE_INACTIVE};
use thermowatch::channels::{MonitorChannel, MonitorMsg};
use thermowatch::config::MonitorConfig;
use thermowatch::history::Sample;
use thermowatch::sampler::TickReading;

use crate::mock_ports::{RecordingSink, ScriptedHardware, ScriptedRecognizer, UnavailableRecognizer};

fn tick(temp: f64) -> MonitorMsg {
    MonitorMsg::Tick(TickReading {
        sample: Sample::new(Local::now(), temp),
        processes: Vec::new(),
    })
}

#[test]
fn dispatch_applies_messages_in_order() {
    let sink = RecordingSink::new();
    let mut coord = Coordinator::new(
        &MonitorConfig::default(),
        ScriptedRecognizer::new(&[]),
        sink.clone(),
        Arc::new(MonitorChannel::new()),
    );
    coord.start(true);
    assert!(coord.is_listening());
    assert_eq!(coord.service().voice_status(), VOICE_ACTIVE);

    assert!(coord.dispatch(tick(72.0)).is_continue());
    assert!(coord.dispatch(MonitorMsg::Utterance("increase fan speed".into())).is_continue());
    assert!(coord.dispatch(tick(90.0)).is_continue());
    assert_eq!(coord.dispatch(MonitorMsg::Shutdown), ControlFlow::Break(()));

    assert_eq!(coord.service().tick_count(), 2);
    assert_eq!(coord.service().fan_speed(), 60);
    assert_eq!(sink.alerts().len(), 2);
}

#[test]
fn utterances_ignored_while_muted() {
    let recognizer = ScriptedRecognizer::new(&[]);
    let stops = recognizer.stops.clone();
    let mut coord = Coordinator::new(
        &MonitorConfig::default(),
        recognizer,
        RecordingSink::new(),
        Arc::new(MonitorChannel::new()),
    );
    coord.start(true);

    let _ = coord.dispatch(MonitorMsg::Command(
        thermowatch::app::commands::AppCommand::SetListening(false),
    ));
    assert_eq!(stops.load(Ordering::SeqCst), 1);
    assert_eq!(coord.service().voice_status(), VOICE_INACTIVE);

    let _ = coord.dispatch(MonitorMsg::Utterance("increase fan speed".into()));
    assert_eq!(coord.service().fan_speed(), 50);
}

#[test]
fn unavailable_recognizer_leaves_sampling_only_mode() {
    let sink = RecordingSink::new();
    let mut coord = Coordinator::new(
        &MonitorConfig::default(),
        UnavailableRecognizer,
        sink.clone(),
        Arc::new(MonitorChannel::new()),
    );
    coord.start(true);

    assert!(!coord.is_listening());
    assert_eq!(coord.service().voice_status(), VOICE_INACTIVE);
    let _ = coord.dispatch(tick(50.0));
    assert_eq!(coord.service().tick_count(), 1);
}

#[test]
fn closed_input_falls_back_to_sampling_only() {
    let channel = Arc::new(MonitorChannel::new());
    let mut coord = Coordinator::new(
        &MonitorConfig::default(),
        StdinRecognizer::from_reader(std::io::Cursor::new("")),
        RecordingSink::new(),
        channel.clone(),
    );
    coord.start(true);

    // The reader hits end of input and asks the coordinator to stop listening.
    let deadline = Instant::now() + Duration::from_secs(5);
    let msg = loop {
        if let Ok(msg) = channel.try_receive() {
            break msg;
        }
        assert!(Instant::now() < deadline, "no notification after input closed");
        std::thread::sleep(Duration::from_millis(5));
    };
    let _ = coord.dispatch(msg);
    assert!(!coord.is_listening());
    assert_eq!(coord.service().voice_status(), VOICE_INACTIVE);

    // Re-enabling fails: the source is gone.
    let _ = coord.dispatch(MonitorMsg::Command(
        thermowatch::app::commands::AppCommand::SetListening(true),
    ));
    assert!(!coord.is_listening());
    assert_eq!(coord.service().voice_status(), VOICE_INACTIVE);

    let _ = coord.dispatch(tick(42.0));
    assert_eq!(coord.service().tick_count(), 1);
}

#[test]
fn threshold_command_through_handle() {
    let channel = Arc::new(MonitorChannel::new());
    let mut coord = Coordinator::new(
        &MonitorConfig::default(),
        UnavailableRecognizer,
        RecordingSink::new(),
        channel.clone(),
    );
    assert!(coord.handle().set_thresholds("65", "oops"));
    let msg = channel.try_receive().unwrap();
    let _ = coord.dispatch(msg);

    assert_eq!(coord.service().thresholds().warning_c, 65.0);
    assert_eq!(coord.service().thresholds().critical_c, 85.0);
}

#[test]
fn run_blocking_stops_at_tick_limit() {
    let sink = RecordingSink::new();
    let recognizer = ScriptedRecognizer::new(&["increase fan speed", "increase fan speed"]);
    let stops = recognizer.stops.clone();
    let coord = Coordinator::new(
        &MonitorConfig::default(),
        recognizer,
        sink.clone(),
        Arc::new(MonitorChannel::new()),
    );
    let hw = ScriptedHardware::new(&[60.0, 75.0, 88.0]).with_process("worker", 12.5, 1 << 20);
    let sampling = SamplingTask::new(hw, coord.handle()).with_tick_limit(3);

    let service = run_blocking(coord, sampling, Duration::from_millis(5), true);

    assert_eq!(service.tick_count(), 3);
    assert_eq!(service.history().temperatures(), [60.0, 75.0, 88.0]);
    assert_eq!(service.fan_speed(), 70);
    assert_eq!(service.processes()[0].name, "worker");
    assert_eq!(stops.load(Ordering::SeqCst), 1);

    let refreshed = sink
        .events()
        .iter()
        .filter(|e| matches!(e, AppEvent::Refreshed(_)))
        .count();
    assert_eq!(refreshed, 3);
    assert_eq!(sink.alerts().len(), 2);
}
