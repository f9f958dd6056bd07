//! Best-effort state relay between the wrist session and the companion app.

pub mod link;
pub mod monitor;
pub mod state_relay;
pub mod types;

pub use link::{LinkReceiver, LoopbackLink};
pub use monitor::SessionMonitor;
pub use state_relay::StateRelay;
pub use types::{
    ActivationCallback, ActivationResult, Connectivity, MessageChannel, RelayConfig, RelayError,
    StateMessage,
};
