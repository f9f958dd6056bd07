//! Health metric accumulation.

pub mod accumulator;

pub use accumulator::{HealthSample, MetricTotals, MetricsAccumulator, SampleKind};
