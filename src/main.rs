//! WristLink - Workout Companion Core
//!
//! Demo binary: runs a scripted wrist-side session and mirrors it on an
//! in-process phone side over the loopback link.

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wristlink::catalog::WorkoutCatalog;
use wristlink::config::load_config;
use wristlink::format;
use wristlink::metrics::accumulator::HealthSample;
use wristlink::relay::link::LoopbackLink;
use wristlink::relay::types::RelayConfig;
use wristlink::{MetricsAccumulator, SessionMonitor, SessionTracker, StateRelay};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WristLink v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;

    let catalog = WorkoutCatalog::new();
    let plan = match catalog.by_name(&config.workout.default_workout) {
        Some(plan) => plan,
        None => {
            tracing::warn!(
                "Unknown workout '{}', using the first plan",
                config.workout.default_workout
            );
            catalog.plans().first().context("Workout catalog is empty")?
        }
    }
    .clone();

    tracing::info!("Selected workout: {} ({} exercises)", plan.name, plan.len());

    // Wrist side: relay over an in-process link with a simulated handshake,
    // so the first sends land before the channel exists and get queued.
    let (link, receiver) = LoopbackLink::pair();
    let link = link.with_activation_delay(Duration::from_millis(150));
    let relay = StateRelay::with_config(
        Arc::new(link.clone()),
        RelayConfig {
            pending_high_water: config.relay.pending_high_water,
        },
    );

    let mut tracker = SessionTracker::new(plan.name.clone());
    let mut accumulator = MetricsAccumulator::new();

    relay.send(tracker.start()?.label());

    for (i, exercise) in plan.exercises.iter().take(6).enumerate() {
        tracing::info!("Exercise {}: {} ({})", i + 1, exercise.name, exercise.kind);

        if i == 3 {
            relay.send(tracker.pause()?.label());
            std::thread::sleep(Duration::from_millis(300));
            relay.send(tracker.resume()?.label());
        }

        std::thread::sleep(Duration::from_millis(200));

        if !tracker.is_paused() {
            let now = chrono::Utc::now();
            accumulator.record(&HealthSample::active_energy(6.3, now));
            accumulator.record(&HealthSample::heart_rate(108.0 + i as f64 * 7.0, now));
        }
        tracker.add_marker()?;
    }

    relay.send(tracker.end()?.label());

    // Phone side: drain relayed labels until the session is seen to end.
    let mut monitor = SessionMonitor::new();
    while !monitor.is_ended() {
        match receiver.recv_timeout(Duration::from_secs(2)) {
            Some(message) => {
                let state = monitor.apply_message(&message)?;
                tracing::info!("Phone observed state: {}", state);
            }
            None => anyhow::bail!("Timed out waiting for relayed session states"),
        }
    }

    let summary = tracker.summary(&accumulator.totals())?;
    tracing::info!("Workout: {}", summary.workout_name);
    tracing::info!(
        "Active time: {}",
        format::duration_hms(summary.active_duration)
    );
    tracing::info!("Energy: {}", format::energy_kcal(summary.energy_kcal));
    tracing::info!("Distance: {}", format::distance_meters(summary.distance_m));
    if let Some(avg) = summary.avg_hr {
        tracing::info!("Avg HR: {}", format::heart_rate(avg));
    }
    if let Some(max) = summary.max_hr {
        tracing::info!("Max HR: {}", format::heart_rate(max));
    }

    Ok(())
}
