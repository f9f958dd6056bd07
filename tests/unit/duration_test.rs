//! Unit tests for active-duration edge cases and validation.

use chrono::{DateTime, Utc};
use std::time::Duration;

use wristlink::session::duration::{active_duration, active_duration_at};
use wristlink::session::types::{EventSequenceError, WorkoutEvent};

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("Valid timestamp")
}

#[test]
fn test_computation_is_idempotent() {
    let events = [
        WorkoutEvent::pause(ts(30)),
        WorkoutEvent::resume(ts(50)),
        WorkoutEvent::pause(ts(70)),
    ];

    let first = active_duration_at(ts(0), ts(100), &events).unwrap();
    let second = active_duration_at(ts(0), ts(100), &events).unwrap();
    assert_eq!(first, Duration::from_secs(50));
    assert_eq!(first, second);
}

#[test]
fn test_end_defaults_to_now() {
    let start = Utc::now() - chrono::Duration::seconds(10);

    let d = active_duration(start, None, &[]).unwrap();
    assert!(d >= Duration::from_secs(9));
    assert!(d <= Duration::from_secs(30));
}

#[test]
fn test_open_session_while_paused() {
    let start = Utc::now() - chrono::Duration::seconds(60);
    let events = [WorkoutEvent::pause(start + chrono::Duration::seconds(15))];

    // Still paused now, so only the span up to the pause counts.
    let d = active_duration(start, None, &events).unwrap();
    assert_eq!(d, Duration::from_secs(15));
}

#[test]
fn test_pause_after_end_boundary_tolerated() {
    // The pause closes its active span even past the boundary, as the
    // source data sometimes reports.
    let events = [WorkoutEvent::pause(ts(120))];
    let d = active_duration_at(ts(0), ts(100), &events).unwrap();
    assert_eq!(d, Duration::from_secs(120));
}

#[test]
fn test_resume_after_end_boundary_shrinks_total() {
    let events = [WorkoutEvent::pause(ts(40)), WorkoutEvent::resume(ts(120))];
    let d = active_duration_at(ts(0), ts(100), &events).unwrap();
    assert_eq!(d, Duration::from_secs(20));
}

#[test]
fn test_result_never_negative() {
    let events = [WorkoutEvent::pause(ts(10)), WorkoutEvent::resume(ts(500))];
    let d = active_duration_at(ts(0), ts(100), &events).unwrap();
    assert_eq!(d, Duration::ZERO);
}

#[test]
fn test_equal_timestamps_are_chronological() {
    let events = [
        WorkoutEvent::pause(ts(30)),
        WorkoutEvent::resume(ts(30)),
        WorkoutEvent::pause(ts(30)),
    ];

    let d = active_duration_at(ts(0), ts(100), &events).unwrap();
    assert_eq!(d, Duration::from_secs(30));
}

#[test]
fn test_validation_errors() {
    let double_pause = [WorkoutEvent::pause(ts(10)), WorkoutEvent::pause(ts(20))];
    assert_eq!(
        active_duration_at(ts(0), ts(100), &double_pause),
        Err(EventSequenceError::PauseWhilePaused)
    );

    let bare_resume = [WorkoutEvent::resume(ts(10))];
    assert_eq!(
        active_duration_at(ts(0), ts(100), &bare_resume),
        Err(EventSequenceError::ResumeWhileActive)
    );

    let out_of_order = [WorkoutEvent::pause(ts(50)), WorkoutEvent::resume(ts(40))];
    assert_eq!(
        active_duration_at(ts(0), ts(100), &out_of_order),
        Err(EventSequenceError::NotChronological)
    );

    assert_eq!(
        active_duration_at(ts(100), ts(99), &[]),
        Err(EventSequenceError::EndBeforeStart)
    );
}

#[test]
fn test_markers_do_not_affect_validation() {
    // Markers are ignored entirely, even out of order.
    let events = [
        WorkoutEvent::marker(ts(90)),
        WorkoutEvent::pause(ts(30)),
        WorkoutEvent::marker(ts(10)),
        WorkoutEvent::resume(ts(50)),
    ];

    let d = active_duration_at(ts(0), ts(100), &events).unwrap();
    assert_eq!(d, Duration::from_secs(80));
}
