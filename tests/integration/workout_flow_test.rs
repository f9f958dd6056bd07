//! Integration test for the full catalog → session → summary flow.

use std::time::Duration;

use wristlink::format;
use wristlink::metrics::accumulator::HealthSample;
use wristlink::session::types::SessionState;
use wristlink::{MetricsAccumulator, SessionTracker, WorkoutCatalog};

#[test]
fn test_strength_session_end_to_end() {
    let catalog = WorkoutCatalog::new();
    let plan = catalog.by_name("Eccentric Upper").expect("Plan exists").clone();

    let mut tracker = SessionTracker::new(plan.name.clone());
    let mut accumulator = MetricsAccumulator::new();

    tracker.start().expect("Should start");

    for i in 0..5 {
        let now = chrono::Utc::now();
        accumulator.record(&HealthSample::active_energy(6.3, now));
        accumulator.record(&HealthSample::heart_rate(110.0 + i as f64 * 5.0, now));
        tracker.add_marker().expect("Should record marker");
    }

    tracker.pause().expect("Should pause");
    std::thread::sleep(Duration::from_millis(40));
    tracker.resume().expect("Should resume");
    tracker.end().expect("Should end");

    assert_eq!(tracker.state(), SessionState::Ended);

    let totals = accumulator.totals();
    let summary = tracker.summary(&totals).expect("Should summarize");

    assert_eq!(summary.workout_name, "Eccentric Upper");
    assert_eq!(summary.events.len(), 7);
    assert_eq!(summary.energy_kcal, totals.energy_kcal);
    assert_eq!(summary.max_hr, Some(130.0));
    assert_eq!(summary.avg_hr, Some(120.0));

    // The 40ms pause is excluded from active time.
    let wall = (summary.ended_at - summary.started_at)
        .to_std()
        .expect("End after start");
    assert!(summary.active_duration <= wall);
    assert!(wall - summary.active_duration >= Duration::from_millis(30));

    assert_eq!(format::energy_kcal(summary.energy_kcal), "31 CAL");
    assert_eq!(format::heart_rate(totals.max_hr.unwrap()), "130 BPM");
    assert!(format::duration_hms(summary.active_duration).starts_with("0:00:"));
}

#[test]
fn test_default_plan_lookup_drives_session() {
    let catalog = WorkoutCatalog::new();
    let config = wristlink::config::AppConfig::default();

    let plan = catalog
        .by_name(&config.workout.default_workout)
        .expect("Default workout is in the catalog");

    let mut tracker = SessionTracker::new(plan.name.clone());
    tracker.start().expect("Should start");
    tracker.end().expect("Should end");

    let summary = tracker
        .summary(&MetricsAccumulator::new().totals())
        .expect("Should summarize");
    assert_eq!(summary.workout_name, "Incinerator");
    assert_eq!(summary.energy_kcal, 0.0);
    assert_eq!(summary.avg_hr, None);
}
