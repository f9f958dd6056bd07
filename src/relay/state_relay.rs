//! State relay between the wrist session and the companion app.

use crate::relay::types::{ActivationResult, Connectivity, MessageChannel, RelayConfig};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Relays session state labels to the companion app, fire-and-forget.
///
/// With an established channel, `send` forwards the label immediately when
/// the counterpart is reachable and drops it otherwise. Before the channel
/// exists, labels are queued and a single activation is requested; the queue
/// is flushed in order once activation succeeds and retained if it fails.
/// The caller is never blocked on delivery and never sees a transport error.
pub struct StateRelay {
    /// Connectivity layer used to activate the channel
    connectivity: Arc<dyn Connectivity>,
    /// Channel handle and pending queue, guarded together
    inner: Arc<Mutex<RelayInner>>,
    /// Tuning
    config: RelayConfig,
}

struct RelayInner {
    /// Established channel, once activation has completed
    channel: Option<Arc<dyn MessageChannel>>,
    /// Labels waiting for the channel, oldest first
    pending: VecDeque<String>,
    /// Whether activation has been requested
    activation_requested: bool,
}

impl StateRelay {
    /// Create a relay over the given connectivity layer.
    pub fn new(connectivity: Arc<dyn Connectivity>) -> Self {
        Self::with_config(connectivity, RelayConfig::default())
    }

    /// Create a relay with explicit tuning.
    pub fn with_config(connectivity: Arc<dyn Connectivity>, config: RelayConfig) -> Self {
        Self {
            connectivity,
            inner: Arc::new(Mutex::new(RelayInner {
                channel: None,
                pending: VecDeque::new(),
                activation_requested: false,
            })),
            config,
        }
    }

    /// Relay a session state label to the companion app.
    ///
    /// Never blocks on delivery. Labels sent before the channel is
    /// established are queued and flushed, in order, once activation
    /// completes; labels sent while the counterpart is unreachable are
    /// dropped.
    pub fn send(&self, label: &str) {
        let mut inner = self.inner.lock().unwrap();

        if let Some(channel) = &inner.channel {
            if channel.is_reachable() {
                channel.send_label(label);
                tracing::debug!("Relayed state: {}", label);
            } else {
                tracing::debug!("Dropped state, counterpart unreachable: {}", label);
            }
            return;
        }

        inner.pending.push_back(label.to_string());
        if inner.pending.len() == self.config.pending_high_water {
            tracing::warn!(
                "Pending state queue reached {} entries awaiting activation",
                inner.pending.len()
            );
        }

        if inner.activation_requested {
            return;
        }
        inner.activation_requested = true;

        // The activation callback may run on this thread before activate()
        // returns; the lock must be released first.
        drop(inner);

        tracing::info!("Requesting channel activation");
        let inner = Arc::clone(&self.inner);
        self.connectivity.activate(Box::new(move |result| {
            Self::on_activation_complete(&inner, result);
        }));
    }

    /// Handle the outcome of a channel activation attempt.
    fn on_activation_complete(inner: &Mutex<RelayInner>, result: ActivationResult) {
        match result {
            Ok(channel) => {
                let mut inner = inner.lock().unwrap();
                if inner.channel.is_some() {
                    tracing::debug!("Ignoring repeated activation completion");
                    return;
                }

                let flushed = inner.pending.len();
                while let Some(label) = inner.pending.pop_front() {
                    channel.send_label(&label);
                }
                inner.channel = Some(channel);
                tracing::info!("Channel activated, flushed {} pending state(s)", flushed);
            }
            Err(e) => {
                // Queue is retained; there is no retry.
                tracing::warn!("Channel activation failed: {}", e);
            }
        }
    }

    /// Number of labels waiting for the channel.
    pub fn pending_len(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }

    /// Whether a channel has been established.
    pub fn is_established(&self) -> bool {
        self.inner.lock().unwrap().channel.is_some()
    }
}
