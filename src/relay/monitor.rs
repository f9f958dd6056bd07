//! Companion-side session state monitoring.

use crate::relay::types::StateMessage;
use crate::session::types::{SessionError, SessionState};
use chrono::{DateTime, Utc};

/// Tracks the wrist session's state as labels arrive on the phone side.
#[derive(Debug, Default)]
pub struct SessionMonitor {
    /// Most recently observed state
    current: Option<SessionState>,
    /// When the last label arrived
    updated_at: Option<DateTime<Utc>>,
}

impl SessionMonitor {
    /// Create a monitor with no state observed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a received state label.
    pub fn apply_label(&mut self, label: &str) -> Result<SessionState, SessionError> {
        let state = SessionState::from_label(label)
            .ok_or_else(|| SessionError::UnknownLabel(label.to_string()))?;

        self.current = Some(state);
        self.updated_at = Some(Utc::now());
        tracing::debug!("Observed session state: {}", state);
        Ok(state)
    }

    /// Apply a received state frame.
    pub fn apply_message(&mut self, message: &StateMessage) -> Result<SessionState, SessionError> {
        self.apply_label(&message.state)
    }

    /// Most recently observed state, if any label has arrived.
    pub fn current(&self) -> Option<SessionState> {
        self.current
    }

    /// When the last label arrived.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Whether the session has been observed to end.
    pub fn is_ended(&self) -> bool {
        self.current == Some(SessionState::Ended)
    }
}
