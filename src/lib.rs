//! WristLink - Workout Companion Core
//!
//! Links a wrist-device workout session to its phone companion: session
//! lifecycle tracking with pause-aware active duration, a best-effort state
//! relay that buffers messages across channel activation, health sample
//! accumulation, and a built-in workout catalog.

pub mod catalog;
pub mod config;
pub mod format;
pub mod metrics;
pub mod relay;
pub mod session;

// Re-export commonly used types
pub use catalog::WorkoutCatalog;
pub use metrics::accumulator::MetricsAccumulator;
pub use relay::monitor::SessionMonitor;
pub use relay::state_relay::StateRelay;
pub use session::tracker::SessionTracker;
