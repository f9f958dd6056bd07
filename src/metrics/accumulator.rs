//! Health sample accumulation into session totals.
//!
//! Samples arrive in batches from the device's health store while a session
//! is active; energy and distance are summed, heart rate keeps the latest
//! reading plus running average and maximum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of health sample delivered during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// Active energy burned, in kilocalories
    ActiveEnergy,
    /// Distance covered, in meters
    Distance,
    /// Heart rate, in beats per minute
    HeartRate,
}

/// A single health sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSample {
    /// Sample kind
    pub kind: SampleKind,
    /// Sample value in the kind's unit
    pub value: f64,
    /// When the sample was recorded
    pub timestamp: DateTime<Utc>,
}

impl HealthSample {
    /// Create an active-energy sample (kilocalories).
    pub fn active_energy(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: SampleKind::ActiveEnergy,
            value,
            timestamp,
        }
    }

    /// Create a distance sample (meters).
    pub fn distance(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: SampleKind::Distance,
            value,
            timestamp,
        }
    }

    /// Create a heart-rate sample (BPM).
    pub fn heart_rate(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: SampleKind::HeartRate,
            value,
            timestamp,
        }
    }
}

/// Snapshot of session metric totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTotals {
    /// Total active energy in kilocalories
    pub energy_kcal: f64,
    /// Total distance in meters
    pub distance_m: f64,
    /// Most recent heart rate in BPM
    pub current_hr: Option<f64>,
    /// Average heart rate in BPM
    pub avg_hr: Option<f64>,
    /// Maximum heart rate in BPM
    pub max_hr: Option<f64>,
}

/// Accumulates health samples into running session totals.
#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    /// Summed active energy in kilocalories
    energy_kcal: f64,
    /// Summed distance in meters
    distance_m: f64,
    /// Most recent heart rate reading
    current_hr: Option<f64>,
    /// Highest heart rate reading
    max_hr: Option<f64>,
    /// Sum of heart rate readings, for the average
    hr_sum: f64,
    /// Count of heart rate readings
    hr_count: u32,
}

impl MetricsAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single sample into the totals.
    pub fn record(&mut self, sample: &HealthSample) {
        match sample.kind {
            SampleKind::ActiveEnergy => self.energy_kcal += sample.value,
            SampleKind::Distance => self.distance_m += sample.value,
            SampleKind::HeartRate => {
                self.current_hr = Some(sample.value);
                self.hr_sum += sample.value;
                self.hr_count += 1;

                let is_new_max = match self.max_hr {
                    Some(max) => sample.value > max,
                    None => true,
                };
                if is_new_max {
                    self.max_hr = Some(sample.value);
                }
            }
        }
    }

    /// Fold a batch of samples into the totals.
    pub fn process(&mut self, samples: &[HealthSample]) {
        for sample in samples {
            self.record(sample);
        }
    }

    /// Snapshot of the totals so far.
    pub fn totals(&self) -> MetricTotals {
        let avg_hr = if self.hr_count > 0 {
            Some(self.hr_sum / self.hr_count as f64)
        } else {
            None
        };

        MetricTotals {
            energy_kcal: self.energy_kcal,
            distance_m: self.distance_m,
            current_hr: self.current_hr,
            avg_hr,
            max_hr: self.max_hr,
        }
    }

    /// Clear all totals for a new session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
