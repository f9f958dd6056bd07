//! Unit tests for the session tracker lifecycle.

use std::time::Duration;

use wristlink::metrics::accumulator::{HealthSample, MetricsAccumulator};
use wristlink::session::types::{EventKind, SessionState};
use wristlink::SessionTracker;

#[test]
fn test_full_session_produces_summary() {
    let mut tracker = SessionTracker::new("Eccentric Upper");
    let mut accumulator = MetricsAccumulator::new();

    tracker.start().expect("Should start");
    accumulator.record(&HealthSample::active_energy(8.0, chrono::Utc::now()));
    accumulator.record(&HealthSample::heart_rate(122.0, chrono::Utc::now()));

    tracker.pause().expect("Should pause");
    tracker.resume().expect("Should resume");
    tracker.add_marker().expect("Should record marker");

    accumulator.record(&HealthSample::active_energy(4.0, chrono::Utc::now()));
    accumulator.record(&HealthSample::heart_rate(138.0, chrono::Utc::now()));

    tracker.end().expect("Should end");

    let summary = tracker.summary(&accumulator.totals()).expect("Should summarize");
    assert_eq!(summary.id, tracker.id());
    assert_eq!(summary.workout_name, "Eccentric Upper");
    assert_eq!(summary.energy_kcal, 12.0);
    assert_eq!(summary.avg_hr, Some(130.0));
    assert_eq!(summary.max_hr, Some(138.0));
    assert_eq!(summary.events.len(), 3);
    assert!(summary.ended_at >= summary.started_at);
}

#[test]
fn test_event_kinds_recorded_in_order() {
    let mut tracker = SessionTracker::new("Incinerator");
    tracker.start().unwrap();
    tracker.pause().unwrap();
    tracker.resume().unwrap();
    tracker.add_marker().unwrap();

    let kinds: Vec<EventKind> = tracker.events().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EventKind::Pause, EventKind::Resume, EventKind::Marker]);
}

#[test]
fn test_active_duration_live_and_final() {
    let mut tracker = SessionTracker::new("Incinerator");
    assert_eq!(tracker.active_duration().unwrap(), Duration::ZERO);

    tracker.start().unwrap();
    let live = tracker.active_duration().unwrap();

    tracker.end().unwrap();
    let final_duration = tracker.active_duration().unwrap();
    assert!(final_duration >= live);

    // Once ended, the value is fixed.
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(tracker.active_duration().unwrap(), final_duration);
}

#[test]
fn test_paused_time_excluded() {
    let mut tracker = SessionTracker::new("Incinerator");
    tracker.start().unwrap();

    std::thread::sleep(Duration::from_millis(50));
    tracker.pause().unwrap();
    let at_pause = tracker.active_duration().unwrap();

    std::thread::sleep(Duration::from_millis(100));
    let while_paused = tracker.active_duration().unwrap();

    // The clock does not advance while paused.
    assert_eq!(at_pause, while_paused);

    tracker.resume().unwrap();
    tracker.end().unwrap();
    let total = tracker.active_duration().unwrap();
    assert!(total < Duration::from_millis(120));
}

#[test]
fn test_states_report_expected_labels() {
    let mut tracker = SessionTracker::new("Incinerator");
    assert_eq!(tracker.state().label(), "not_started");

    assert_eq!(tracker.start().unwrap().label(), "running");
    assert_eq!(tracker.pause().unwrap().label(), "paused");
    assert_eq!(tracker.resume().unwrap().label(), "running");
    assert_eq!(tracker.end().unwrap().label(), "ended");
    assert_eq!(tracker.state(), SessionState::Ended);
}
