//! Relay collaborator traits, wire frame, and configuration.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Default pending-queue length that triggers a growth warning.
pub const DEFAULT_PENDING_HIGH_WATER: usize = 128;

/// One-way channel to the companion app, available once activation completes.
pub trait MessageChannel: Send + Sync {
    /// Whether the counterpart can currently receive messages.
    fn is_reachable(&self) -> bool;

    /// Deliver a state label, best effort.
    fn send_label(&self, label: &str);
}

/// Outcome of a channel activation attempt.
pub type ActivationResult = Result<Arc<dyn MessageChannel>, RelayError>;

/// Callback invoked when an activation attempt completes.
///
/// Transport layers may report completion more than once; consumers are
/// expected to ignore repeats.
pub type ActivationCallback = Box<dyn Fn(ActivationResult) + Send + 'static>;

/// Connectivity layer able to activate a channel to the companion app.
pub trait Connectivity: Send + Sync {
    /// Whether the transport has completed activation.
    fn is_established(&self) -> bool;

    /// Begin activating the channel, reporting the outcome via `on_complete`.
    fn activate(&self, on_complete: ActivationCallback);
}

/// Errors surfaced by the relay layer.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Channel activation failed
    #[error("Channel activation failed: {0}")]
    ActivationFailed(String),
}

/// Wire frame carrying a session state label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    /// Session state label ("running", "paused", "ended")
    pub state: String,
}

impl StateMessage {
    /// Create a frame for the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: label.into(),
        }
    }

    /// Serialize the frame to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize a frame from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Relay tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Pending-queue length that triggers a growth warning
    pub pending_high_water: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            pending_high_water: DEFAULT_PENDING_HIGH_WATER,
        }
    }
}
