//! Workout session lifecycle and active-duration computation.

pub mod duration;
pub mod tracker;
pub mod types;

pub use duration::{active_duration, active_duration_at};
pub use tracker::SessionTracker;
pub use types::{
    EventKind, EventSequenceError, SessionError, SessionState, WorkoutEvent, WorkoutSummary,
};
