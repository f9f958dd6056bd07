//! In-process loopback transport for the relay.
//!
//! Stands in for a platform device-to-phone transport: the wrist side holds
//! a `LoopbackLink`, which acts as both the connectivity layer and the
//! message channel, and the phone side drains a `LinkReceiver`. Activation
//! completes on a background thread after a configurable handshake delay.

use crate::relay::types::{ActivationCallback, Connectivity, MessageChannel, StateMessage};
use crossbeam::channel::{Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Wrist-side endpoint of an in-process link.
#[derive(Clone)]
pub struct LoopbackLink {
    /// Frame sender toward the phone side
    tx: Sender<Vec<u8>>,
    /// Set once activation has completed
    established: Arc<AtomicBool>,
    /// Whether the phone side is currently reachable
    reachable: Arc<AtomicBool>,
    /// Simulated activation handshake time
    activation_delay: Duration,
}

/// Phone-side endpoint receiving state frames.
pub struct LinkReceiver {
    /// Frame receiver from the wrist side
    rx: Receiver<Vec<u8>>,
}

impl LoopbackLink {
    /// Create a connected link pair.
    pub fn pair() -> (LoopbackLink, LinkReceiver) {
        let (tx, rx) = crossbeam::channel::unbounded();

        (
            LoopbackLink {
                tx,
                established: Arc::new(AtomicBool::new(false)),
                reachable: Arc::new(AtomicBool::new(true)),
                activation_delay: Duration::ZERO,
            },
            LinkReceiver { rx },
        )
    }

    /// Set the simulated activation handshake time.
    pub fn with_activation_delay(mut self, delay: Duration) -> Self {
        self.activation_delay = delay;
        self
    }

    /// Toggle phone-side reachability.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }
}

impl Connectivity for LoopbackLink {
    fn is_established(&self) -> bool {
        self.established.load(Ordering::SeqCst)
    }

    fn activate(&self, on_complete: ActivationCallback) {
        let link = self.clone();

        std::thread::spawn(move || {
            if !link.activation_delay.is_zero() {
                std::thread::sleep(link.activation_delay);
            }

            link.established.store(true, Ordering::SeqCst);
            tracing::debug!("Loopback link activated");
            on_complete(Ok(Arc::new(link)));
        });
    }
}

impl MessageChannel for LoopbackLink {
    fn is_reachable(&self) -> bool {
        self.reachable.load(Ordering::SeqCst)
    }

    fn send_label(&self, label: &str) {
        match StateMessage::new(label).to_bytes() {
            Ok(bytes) => {
                if self.tx.send(bytes).is_err() {
                    tracing::debug!("Receiver side closed, frame dropped");
                }
            }
            Err(e) => tracing::warn!("Failed to encode state frame: {}", e),
        }
    }
}

impl LinkReceiver {
    /// Receive the next state frame without blocking.
    ///
    /// Malformed frames are discarded with a warning.
    pub fn try_recv(&self) -> Option<StateMessage> {
        loop {
            let bytes = self.rx.try_recv().ok()?;
            match StateMessage::from_bytes(&bytes) {
                Ok(msg) => return Some(msg),
                Err(e) => tracing::warn!("Discarding malformed state frame: {}", e),
            }
        }
    }

    /// Receive the next state frame, waiting up to `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<StateMessage> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let bytes = self.rx.recv_timeout(remaining).ok()?;
            match StateMessage::from_bytes(&bytes) {
                Ok(msg) => return Some(msg),
                Err(e) => tracing::warn!("Discarding malformed state frame: {}", e),
            }
        }
    }
}
