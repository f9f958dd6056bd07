//! Display formatting for durations and metric values.
//!
//! Values are truncated, not rounded, to match what the watch face shows.

use std::time::Duration;

/// Format a duration as positional `h:mm:ss`.
pub fn duration_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format active energy as a whole-kilocalorie label.
pub fn energy_kcal(kcal: f64) -> String {
    format!("{} CAL", kcal as i64)
}

/// Format a heart rate as a whole-BPM label.
pub fn heart_rate(bpm: f64) -> String {
    format!("{} BPM", bpm as i64)
}

/// Format a distance as a whole-meter label.
pub fn distance_meters(meters: f64) -> String {
    format!("{} m", meters as i64)
}
