//! Workout session lifecycle tracking.

use crate::metrics::accumulator::MetricTotals;
use crate::session::duration::active_duration;
use crate::session::types::{SessionError, SessionState, WorkoutEvent, WorkoutSummary};
use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Tracks a single workout session through its lifecycle.
///
/// Drives `NotStarted → Running ⇄ Paused → Ended` with guarded transitions,
/// stamps start and end times, and records pause/resume/marker events so the
/// active duration can be computed with paused spans excluded. Event
/// sequences produced here are well-formed by construction.
pub struct SessionTracker {
    /// Session identifier
    id: Uuid,
    /// Name of the workout being performed
    workout_name: String,
    /// Current lifecycle state
    state: SessionState,
    /// When the session started
    started_at: Option<DateTime<Utc>>,
    /// When the session ended
    ended_at: Option<DateTime<Utc>>,
    /// Recorded timeline events
    events: Vec<WorkoutEvent>,
}

impl SessionTracker {
    /// Create a tracker for the named workout.
    pub fn new(workout_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_name: workout_name.into(),
            state: SessionState::NotStarted,
            started_at: None,
            ended_at: None,
            events: Vec::new(),
        }
    }

    /// Start the session.
    pub fn start(&mut self) -> Result<SessionState, SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        self.state = SessionState::Running;
        self.started_at = Some(Utc::now());
        tracing::info!("Session started: {}", self.workout_name);
        Ok(self.state)
    }

    /// Pause the running session.
    pub fn pause(&mut self) -> Result<SessionState, SessionError> {
        if self.state != SessionState::Running {
            return Err(SessionError::NotRunning);
        }

        self.state = SessionState::Paused;
        self.events.push(WorkoutEvent::pause(Utc::now()));
        tracing::info!("Session paused");
        Ok(self.state)
    }

    /// Resume the paused session.
    pub fn resume(&mut self) -> Result<SessionState, SessionError> {
        if self.state != SessionState::Paused {
            return Err(SessionError::NotPaused);
        }

        self.state = SessionState::Running;
        self.events.push(WorkoutEvent::resume(Utc::now()));
        tracing::info!("Session resumed");
        Ok(self.state)
    }

    /// End the session, from either the running or the paused state.
    pub fn end(&mut self) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::Running | SessionState::Paused => {
                self.state = SessionState::Ended;
                self.ended_at = Some(Utc::now());
                tracing::info!("Session ended: {}", self.workout_name);
                Ok(self.state)
            }
            SessionState::Ended => Err(SessionError::AlreadyEnded),
            SessionState::NotStarted => Err(SessionError::NotActive),
        }
    }

    /// Record a marker event on an active session.
    pub fn add_marker(&mut self) -> Result<(), SessionError> {
        if !self.is_active() {
            return Err(SessionError::NotActive);
        }

        self.events.push(WorkoutEvent::marker(Utc::now()));
        tracing::debug!("Marker recorded");
        Ok(())
    }

    /// Active duration so far, paused spans excluded.
    ///
    /// Zero before the session has started; fixed once it has ended.
    pub fn active_duration(&self) -> Result<Duration, SessionError> {
        let started_at = match self.started_at {
            Some(t) => t,
            None => return Ok(Duration::ZERO),
        };

        Ok(active_duration(started_at, self.ended_at, &self.events)?)
    }

    /// Assemble the final summary of an ended session.
    pub fn summary(&self, totals: &MetricTotals) -> Result<WorkoutSummary, SessionError> {
        if self.state != SessionState::Ended {
            return Err(SessionError::NotEnded);
        }

        let started_at = self.started_at.ok_or(SessionError::NotEnded)?;
        let ended_at = self.ended_at.ok_or(SessionError::NotEnded)?;
        let active = active_duration(started_at, Some(ended_at), &self.events)?;

        Ok(WorkoutSummary {
            id: self.id,
            workout_name: self.workout_name.clone(),
            started_at,
            ended_at,
            active_duration: active,
            events: self.events.clone(),
            energy_kcal: totals.energy_kcal,
            distance_m: totals.distance_m,
            avg_hr: totals.avg_hr,
            max_hr: totals.max_hr,
        })
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the workout being performed.
    pub fn workout_name(&self) -> &str {
        &self.workout_name
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// When the session started, if it has.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// When the session ended, if it has.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Recorded timeline events.
    pub fn events(&self) -> &[WorkoutEvent] {
        &self.events
    }

    /// Whether the session is running or paused.
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Running || self.state == SessionState::Paused
    }

    /// Whether the session is paused.
    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }
}
