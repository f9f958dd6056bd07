//! Session state, event timeline, and summary types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle state of a workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Session not started
    #[default]
    NotStarted,
    /// Session in progress
    Running,
    /// Session paused by the user
    Paused,
    /// Session finished
    Ended,
}

impl SessionState {
    /// Stable wire label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not_started",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::Ended => "ended",
        }
    }

    /// Parse a wire label back into a state.
    pub fn from_label(label: &str) -> Option<SessionState> {
        match label {
            "not_started" => Some(SessionState::NotStarted),
            "running" => Some(SessionState::Running),
            "paused" => Some(SessionState::Paused),
            "ended" => Some(SessionState::Ended),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::NotStarted => write!(f, "Not Started"),
            SessionState::Running => write!(f, "Running"),
            SessionState::Paused => write!(f, "Paused"),
            SessionState::Ended => write!(f, "Ended"),
        }
    }
}

/// Kind of timeline event within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Active time stops accumulating
    Pause,
    /// Active time resumes accumulating
    Resume,
    /// Informational marker (lap, segment change)
    Marker,
}

/// A timestamped event on the session timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEvent {
    /// Event kind
    pub kind: EventKind,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl WorkoutEvent {
    /// Create a pause event at the given instant.
    pub fn pause(timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: EventKind::Pause,
            timestamp,
        }
    }

    /// Create a resume event at the given instant.
    pub fn resume(timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: EventKind::Resume,
            timestamp,
        }
    }

    /// Create a marker event at the given instant.
    pub fn marker(timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: EventKind::Marker,
            timestamp,
        }
    }
}

/// Final summary of an ended session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Session identifier
    pub id: Uuid,
    /// Name of the workout performed
    pub workout_name: String,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session ended
    pub ended_at: DateTime<Utc>,
    /// Time spent active, paused spans excluded
    pub active_duration: Duration,
    /// Recorded timeline events
    pub events: Vec<WorkoutEvent>,
    /// Total active energy in kilocalories
    pub energy_kcal: f64,
    /// Total distance in meters
    pub distance_m: f64,
    /// Average heart rate in BPM
    pub avg_hr: Option<f64>,
    /// Maximum heart rate in BPM
    pub max_hr: Option<f64>,
}

/// Errors related to session lifecycle operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session was already started
    #[error("Session already started")]
    AlreadyStarted,

    /// Operation requires a running session
    #[error("Session not running")]
    NotRunning,

    /// Operation requires a paused session
    #[error("Session not paused")]
    NotPaused,

    /// Operation requires a running or paused session
    #[error("Session not active")]
    NotActive,

    /// Session already ended
    #[error("Session already ended")]
    AlreadyEnded,

    /// Operation requires an ended session
    #[error("Session not ended")]
    NotEnded,

    /// Received a state label that is not recognized
    #[error("Unknown state label: {0}")]
    UnknownLabel(String),

    /// The recorded event timeline is malformed
    #[error(transparent)]
    InvalidEvents(#[from] EventSequenceError),
}

/// Errors describing a malformed pause/resume event timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventSequenceError {
    /// Pause/resume events are not in chronological order
    #[error("Events not in chronological order")]
    NotChronological,

    /// A pause event arrived while already paused
    #[error("Pause event while already paused")]
    PauseWhilePaused,

    /// A resume event arrived while not paused
    #[error("Resume event while not paused")]
    ResumeWhileActive,

    /// The end boundary precedes the session start
    #[error("End time precedes start time")]
    EndBeforeStart,
}
