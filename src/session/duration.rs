//! Active-duration computation over a session's pause/resume timeline.
//!
//! Walks the recorded events in order, summing the spans the session was
//! active and skipping the spans it was paused. Pure arithmetic over the
//! inputs; no clocks are read unless the end boundary is omitted.

use crate::session::types::{EventKind, EventSequenceError, WorkoutEvent};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Compute the active duration between `start` and `end`, excluding paused
/// spans described by `events`.
///
/// `end` defaults to the current time, for querying a session still in
/// progress. Marker and other non pause/resume events are ignored.
pub fn active_duration(
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    events: &[WorkoutEvent],
) -> Result<Duration, EventSequenceError> {
    active_duration_at(start, end.unwrap_or_else(Utc::now), events)
}

/// Compute the active duration against an explicit end boundary.
///
/// The pause/resume subsequence must be chronological and alternating;
/// malformed input is rejected rather than silently producing a nonsense
/// span. Events past the end boundary are tolerated: a pause there still
/// closes its active span, and a resume there leaves the total clamped at
/// zero or above.
pub fn active_duration_at(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    events: &[WorkoutEvent],
) -> Result<Duration, EventSequenceError> {
    if end < start {
        return Err(EventSequenceError::EndBeforeStart);
    }

    let mut total = chrono::Duration::zero();
    let mut cursor = start;
    let mut last_seen = start;
    let mut paused = false;

    for event in events {
        match event.kind {
            EventKind::Pause => {
                if event.timestamp < last_seen {
                    return Err(EventSequenceError::NotChronological);
                }
                if paused {
                    return Err(EventSequenceError::PauseWhilePaused);
                }
                total = total + (event.timestamp - cursor);
                paused = true;
                last_seen = event.timestamp;
            }
            EventKind::Resume => {
                if event.timestamp < last_seen {
                    return Err(EventSequenceError::NotChronological);
                }
                if !paused {
                    return Err(EventSequenceError::ResumeWhileActive);
                }
                cursor = event.timestamp;
                paused = false;
                last_seen = event.timestamp;
            }
            EventKind::Marker => {}
        }
    }

    if !paused {
        total = total + (end - cursor);
    }

    // A resume past the end boundary can drive the sum negative; clamp to zero.
    Ok(total.to_std().unwrap_or(Duration::ZERO))
}
