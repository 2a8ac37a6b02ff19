//! Metrics collection and exposition.
//!
//! # Metrics
//! - `clarity_health_checks_total` (counter): probes by target, outcome
//! - `clarity_corrections_total` (counter): submissions by target, outcome
//! - `clarity_correction_latency_seconds` (histogram): round trip by target
//! - `clarity_connectivity_online` (gauge): 1=online, 0=offline
//!
//! Recording is a no-op until a recorder is installed.

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::correction::CorrectionError;
use crate::endpoint::Target;
use crate::health::HealthError;

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_health_check(target: Target, error: Option<&HealthError>) {
    let outcome = error.map_or("ok", HealthError::kind);
    ::metrics::counter!(
        "clarity_health_checks_total",
        "target" => target.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_correction(target: Target, error: Option<&CorrectionError>, latency: Option<Duration>) {
    let outcome = error.map_or("ok", CorrectionError::kind);
    ::metrics::counter!(
        "clarity_corrections_total",
        "target" => target.as_str(),
        "outcome" => outcome
    )
    .increment(1);

    if let Some(latency) = latency {
        ::metrics::histogram!("clarity_correction_latency_seconds", "target" => target.as_str())
            .record(latency.as_secs_f64());
    }
}

pub fn record_connectivity(online: bool) {
    ::metrics::gauge!("clarity_connectivity_online").set(if online { 1.0 } else { 0.0 });
}
