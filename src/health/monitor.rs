//! Connectivity monitoring.
//!
//! # Responsibilities
//! - Probe the selected backend at startup, after each switch, and periodically
//! - Translate results into the workbench indicator
//! - Swallow and log every failure

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::HealthCheckConfig;
use crate::health::{connectivity_for, ConnectivityStatus, HealthProber};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::workbench::Workbench;

pub struct HealthMonitor {
    prober: HealthProber,
    workbench: Arc<Workbench>,
    interval: Duration,
    skip_overlapping: bool,
    in_flight: AtomicUsize,
}

/// Decrements the in-flight counter on drop.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl HealthMonitor {
    pub fn new(prober: HealthProber, workbench: Arc<Workbench>, config: &HealthCheckConfig) -> Self {
        Self {
            prober,
            workbench,
            interval: Duration::from_secs(config.interval_secs),
            skip_overlapping: config.skip_overlapping,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Override the recurring period.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn workbench(&self) -> &Arc<Workbench> {
        &self.workbench
    }

    /// Number of probes currently outstanding.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Probe the current selection and update the indicator.
    ///
    /// A result for a target that was switched away mid-flight is dropped;
    /// the switch schedules its own check.
    pub async fn perform_health_check(&self) -> ConnectivityStatus {
        let _guard = InFlight::enter(&self.in_flight);
        let selector = self.workbench.selector();
        let stamped = selector.stamped();
        let selection = &stamped.selection;

        let result = self.prober.check_health(selection).await;
        metrics::record_health_check(selection.target, result.as_ref().err());

        if selector.generation() != stamped.generation {
            tracing::debug!(mode = %selection.target, "Discarding health result for previous target");
            return self.workbench.connectivity().status;
        }

        match &result {
            Ok(()) => tracing::debug!(mode = %selection.target, "Health check passed"),
            Err(e) => tracing::warn!(
                mode = %selection.target,
                base_url = %selection.base_url,
                error = %e,
                "Health check failed"
            ),
        }

        let connectivity = connectivity_for(&result);
        let status = connectivity.status;
        self.workbench.set_system_status(connectivity);
        status
    }

    /// Timer-driven check; skipped while another check is outstanding.
    pub async fn on_tick(&self) -> Option<ConnectivityStatus> {
        if self.skip_overlapping && self.in_flight() > 0 {
            tracing::debug!("Previous health check still running, skipping tick");
            return None;
        }
        Some(self.perform_health_check().await)
    }

    /// Run the recurring checks until shutdown.
    ///
    /// Each tick is spawned so a slow probe never delays the schedule.
    pub async fn run(self: Arc<Self>, shutdown: Shutdown) {
        tracing::info!(interval_secs = self.interval.as_secs(), "Health monitor starting");

        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let monitor = self.clone();
                    tokio::spawn(async move {
                        monitor.on_tick().await;
                    });
                }
                _ = shutdown.triggered() => {
                    tracing::info!("Health monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}
