//! MonitorService against scripted providers.

use thermowatch::alerts::AlertLevel;
use thermowatch::app::commands::CommandIntent;
use thermowatch::app::events::AppEvent;
use thermowatch::app::service::{MonitorService, VOICE_INACTIVE};
use thermowatch::config::MonitorConfig;

use crate::mock_ports::{RecordingSink, ScriptedHardware};

fn service() -> MonitorService {
    MonitorService::new(&MonitorConfig::default())
}

// ── Alerts ────────────────────────────────────────────────────

#[test]
fn hysteresis_sequence_raises_expected_alerts() {
    let mut svc = service();
    let mut hw = ScriptedHardware::new(&[60.0, 72.0, 90.0, 90.0, 65.0, 78.0]);
    let mut sink = RecordingSink::new();

    let mut per_step = Vec::new();
    for _ in 0..6 {
        sink.clear();
        svc.tick(&mut hw, &mut sink);
        per_step.push(sink.alert_levels());
    }

    assert_eq!(
        per_step,
        vec![
            vec![],
            vec![AlertLevel::Warning],
            vec![AlertLevel::Critical],
            vec![],
            vec![],
            vec![AlertLevel::Warning],
        ]
    );
    assert!(svc.alert_state().warning_active);
    assert!(!svc.alert_state().critical_active);
}

#[test]
fn alert_text_names_level_and_temperature() {
    let mut svc = service();
    let mut hw = ScriptedHardware::new(&[91.5]);
    let mut sink = RecordingSink::new();
    svc.tick(&mut hw, &mut sink);

    let alerts = sink.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].to_string(), "Critical: CPU temperature has reached 91.5\u{00b0}C.");
}

#[test]
fn alerts_follow_updated_thresholds() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    svc.set_thresholds("50", "60", &mut sink);

    let mut hw = ScriptedHardware::new(&[55.0]);
    svc.tick(&mut hw, &mut sink);
    assert_eq!(sink.alert_levels(), vec![AlertLevel::Warning]);
}

// ── Sampling failures ─────────────────────────────────────────

#[test]
fn missing_sensor_records_zero_and_keeps_ticking() {
    let mut svc = service();
    let mut hw = ScriptedHardware::failing()
        .with_process("sshd", 0.5, 4 * 1024 * 1024)
        .with_unreadable_process();
    let mut sink = RecordingSink::new();

    for _ in 0..3 {
        svc.tick(&mut hw, &mut sink);
    }

    let snap = svc.snapshot();
    assert_eq!(snap.temperatures, [0.0, 0.0, 0.0]);
    assert_eq!(snap.processes.len(), 1);
    assert_eq!(snap.processes[0].memory_usage_mb, 4.0);
    assert!(sink.alerts().is_empty());
}

// ── History and ranking ───────────────────────────────────────

#[test]
fn history_keeps_latest_fifty() {
    let temps: Vec<f64> = (0..120).map(f64::from).collect();
    let mut svc = service();
    let mut hw = ScriptedHardware::new(&temps);
    let mut sink = RecordingSink::new();

    for _ in 0..temps.len() {
        svc.tick(&mut hw, &mut sink);
    }

    let snap = svc.snapshot();
    assert_eq!(snap.temperatures.len(), 50);
    assert_eq!(snap.labels.len(), 50);
    assert_eq!(snap.temperatures.first(), Some(&70.0));
    assert_eq!(snap.latest_temperature(), Some(119.0));
}

#[test]
fn processes_ranked_by_cpu_each_tick() {
    let mut svc = service();
    let mut hw = ScriptedHardware::new(&[40.0])
        .with_process("a", 10.0, 0)
        .with_process("b", 90.0, 0)
        .with_process("c", 50.0, 0)
        .with_process("d", 90.0, 0);
    let mut sink = RecordingSink::new();
    svc.tick(&mut hw, &mut sink);

    let names: Vec<_> = svc.processes().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["b", "d", "c", "a"]);
}

// ── Voice path ────────────────────────────────────────────────

#[test]
fn fan_clamps_at_bounds() {
    let mut svc = service();
    let mut sink = RecordingSink::new();

    for _ in 0..10 {
        svc.handle_utterance("increase fan speed", &mut sink);
    }
    assert_eq!(svc.fan_speed(), 100);

    sink.clear();
    svc.handle_utterance("increase fan speed", &mut sink);
    assert_eq!(svc.fan_speed(), 100);
    assert!(
        !sink
            .events()
            .iter()
            .any(|e| matches!(e, AppEvent::FanSpeedChanged { .. })),
        "no-op command must not report a change"
    );

    for _ in 0..11 {
        svc.handle_utterance("lower fan speed", &mut sink);
    }
    assert_eq!(svc.fan_speed(), 0);
}

#[test]
fn routing_is_exact_match() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    assert_eq!(
        svc.handle_utterance("LOWER FAN SPEED", &mut sink),
        CommandIntent::Unknown
    );
    assert_eq!(svc.fan_speed(), 50);
    assert_eq!(
        svc.handle_utterance("lower fan speed", &mut sink),
        CommandIntent::DecreaseSpeed
    );
    assert_eq!(svc.fan_speed(), 40);
    assert_eq!(svc.snapshot().fan.to_string(), "Fan Speed: 40% (Simulated)");
}

// ── Configuration surface ─────────────────────────────────────

#[test]
fn set_thresholds_keeps_unparseable_field() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    let update = svc.set_thresholds("abc", "90", &mut sink);

    assert!(!update.warning_applied);
    assert!(update.critical_applied);
    assert_eq!(svc.thresholds().warning_c, 70.0);
    assert_eq!(svc.thresholds().critical_c, 90.0);
    assert!(matches!(
        sink.events().last(),
        Some(AppEvent::ThresholdsUpdated(u)) if u.thresholds.critical_c == 90.0
    ));
}

#[test]
fn starts_with_voice_inactive() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    svc.start(&mut sink);
    match sink.events().first() {
        Some(AppEvent::Started(snap)) => {
            assert_eq!(snap.voice_status, VOICE_INACTIVE);
            assert_eq!(snap.fan.speed_percent, 50);
            assert!(snap.temperatures.is_empty());
        }
        other => panic!("expected Started, got {other:?}"),
    }
}
